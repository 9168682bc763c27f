//! # Request Helpers
//!
//! Client metadata and body decoding for the consent handler.
//!
//! The body is read as raw bytes and decoded with `serde_json` directly,
//! so the `Content-Type` header is not required. A body that is not valid
//! JSON, is `null`, or holds a non-string value in a text field is treated
//! as a server-side failure (500).
//!
//! Error messages built here end up in logs, so they carry the serde error
//! category and position or the field name, never payload text.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::http::{HeaderMap, StatusCode};
use consent_core::{ClientInfo, ConsentSubmission};
use serde_json::Value;

use crate::error::AppError;

/// Address recorded when no forwarding header names the client.
pub const UNKNOWN_IP: &str = "0.0.0.0";

/// Resolve the client address and user agent from request headers.
///
/// Precedence for the address: first entry of `x-forwarded-for` (when
/// non-empty after trimming), then `x-real-ip`, then [`UNKNOWN_IP`].
/// A missing `user-agent` becomes the empty string.
pub fn client_info(headers: &HeaderMap) -> ClientInfo {
    let forwarded = header_str(headers, "x-forwarded-for")
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty());

    let ip = forwarded
        .or_else(|| header_str(headers, "x-real-ip"))
        .unwrap_or(UNKNOWN_IP)
        .to_string();

    ClientInfo {
        ip,
        user_agent: header_str(headers, "user-agent").unwrap_or_default().to_string(),
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Unwrap the buffered body, mapping an over-limit body to
/// [`AppError::PayloadTooLarge`].
pub fn extract_body(body: Result<Bytes, BytesRejection>) -> Result<Bytes, AppError> {
    body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::Internal(format!("failed to read request body: {}", rejection.status()))
        }
    })
}

/// Decode the raw request body into a [`ConsentSubmission`].
///
/// Any JSON document is accepted as input; see
/// [`ConsentSubmission::from_json`] for how non-object and oddly typed
/// payloads are read.
pub fn decode_submission(body: &[u8]) -> Result<ConsentSubmission, AppError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        AppError::Internal(format!(
            "request body is not JSON ({:?} error at line {} column {})",
            e.classify(),
            e.line(),
            e.column()
        ))
    })?;
    ConsentSubmission::from_json(value)
        .map_err(|e| AppError::Internal(format!("unusable consent payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (k, v) in pairs {
            map.insert(*k, HeaderValue::from_static(v));
        }
        map
    }

    #[test]
    fn forwarded_for_first_entry_wins() {
        let info = client_info(&headers(&[
            ("x-forwarded-for", " 203.0.113.7 , 10.0.0.1"),
            ("x-real-ip", "198.51.100.2"),
        ]));
        assert_eq!(info.ip, "203.0.113.7");
    }

    #[test]
    fn blank_forwarded_for_falls_back_to_real_ip() {
        let info = client_info(&headers(&[
            ("x-forwarded-for", " , 10.0.0.1"),
            ("x-real-ip", "198.51.100.2"),
        ]));
        assert_eq!(info.ip, "198.51.100.2");
    }

    #[test]
    fn no_headers_gives_unknown_ip_and_empty_agent() {
        let info = client_info(&HeaderMap::new());
        assert_eq!(info.ip, UNKNOWN_IP);
        assert_eq!(info.user_agent, "");
    }

    #[test]
    fn user_agent_is_captured() {
        let info = client_info(&headers(&[("user-agent", "Mozilla/5.0")]));
        assert_eq!(info.user_agent, "Mozilla/5.0");
    }

    #[test]
    fn decode_accepts_partial_object() {
        let sub = decode_submission(br#"{"nombre":"Ana"}"#).unwrap();
        assert_eq!(sub.nombre.as_deref(), Some("Ana"));
        assert!(sub.email.is_none());
    }

    #[test]
    fn decode_rejects_malformed_json() {
        let err = decode_submission(b"{not json").unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn decode_reads_array_as_empty_submission() {
        let sub = decode_submission(br#"["Ana","76.543.210-3","a@b.cl",true]"#).unwrap();
        assert_eq!(sub, ConsentSubmission::default());
    }

    #[test]
    fn decode_rejects_null() {
        assert!(matches!(decode_submission(b"null"), Err(AppError::Internal(_))));
    }

    #[test]
    fn syntax_error_message_has_position_only() {
        let err = decode_submission(br#"{"email":"ana@empresa.cl",}"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Syntax error at line 1"), "{msg}");
        assert!(!msg.contains("ana@empresa.cl"), "{msg}");
    }

    #[test]
    fn wrong_type_message_omits_value() {
        let err = decode_submission(br#"{"rutEmpresa":76543210,"aceptaTerminos":true}"#)
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("rutEmpresa"), "{msg}");
        assert!(!msg.contains("76543210"), "{msg}");
    }
}
