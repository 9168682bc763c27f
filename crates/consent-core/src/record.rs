//! # Persisted Consent Record
//!
//! One JSON document is written per accepted submission. Field names are
//! camelCase to match the form payload, and the RUT is stored normalized.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::submission::ValidatedSubmission;

/// Directory prefix under which submissions are written.
pub const SUBMISSIONS_PREFIX: &str = "submissions";

/// Request metadata captured alongside the consent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    /// Client IP as reported by the forwarding headers.
    pub ip: String,
    /// `User-Agent` header, or empty.
    pub user_agent: String,
}

/// The consent document written to blob storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentRecord {
    /// Trimmed name.
    pub nombre: String,
    /// Normalized RUT (digits plus check character, no separators).
    pub rut_empresa: String,
    /// Trimmed email.
    pub email: String,
    /// Always `true`: records only exist for accepted terms.
    pub acepta_terminos: bool,
    /// Acceptance time, RFC 3339 UTC with millisecond precision.
    pub accepted_at: String,
    /// Client IP.
    pub ip: String,
    /// Client user agent.
    pub user_agent: String,
}

impl ConsentRecord {
    /// Build the record for a validated submission accepted at `now`.
    pub fn new(submission: ValidatedSubmission, client: ClientInfo, now: DateTime<Utc>) -> Self {
        Self {
            nombre: submission.nombre,
            rut_empresa: submission.rut_empresa.into(),
            email: submission.email,
            acepta_terminos: true,
            accepted_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            ip: client.ip,
            user_agent: client.user_agent,
        }
    }

    /// Serialize to the JSON bytes that get stored.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// Storage path for a submission accepted at `now`:
/// `submissions/<unix-millis>.json`.
///
/// Two submissions in the same millisecond share a path; the store's random
/// suffix keeps them apart.
pub fn submission_pathname(now: DateTime<Utc>) -> String {
    format!("{SUBMISSIONS_PREFIX}/{}.json", now.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rut::Rut;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(535))
            .unwrap()
    }

    fn record() -> ConsentRecord {
        let submission = ValidatedSubmission {
            nombre: "Ana Pérez".to_string(),
            rut_empresa: Rut::new("60.803.000-k").unwrap(),
            email: "ana@empresa.cl".to_string(),
        };
        let client = ClientInfo {
            ip: "203.0.113.7".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
        };
        ConsentRecord::new(submission, client, fixed_now())
    }

    #[test]
    fn record_uses_normalized_rut_and_accepts_terms() {
        let r = record();
        assert_eq!(r.rut_empresa, "60803000K");
        assert!(r.acepta_terminos);
    }

    #[test]
    fn accepted_at_is_iso_millis_utc() {
        assert_eq!(record().accepted_at, "2026-03-14T15:09:26.535Z");
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let value: serde_json::Value = serde_json::from_slice(&record().to_json().unwrap()).unwrap();
        assert_eq!(value["nombre"], "Ana Pérez");
        assert_eq!(value["rutEmpresa"], "60803000K");
        assert_eq!(value["email"], "ana@empresa.cl");
        assert_eq!(value["aceptaTerminos"], true);
        assert_eq!(value["acceptedAt"], "2026-03-14T15:09:26.535Z");
        assert_eq!(value["ip"], "203.0.113.7");
        assert_eq!(value["userAgent"], "Mozilla/5.0");
        assert_eq!(value.as_object().unwrap().len(), 7);
    }

    #[test]
    fn pathname_uses_unix_millis() {
        let now = fixed_now();
        assert_eq!(
            submission_pathname(now),
            format!("submissions/{}.json", now.timestamp_millis())
        );
        assert!(submission_pathname(now).ends_with("535.json"));
    }
}
