//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Every error response has the same body shape as the form expects:
//! `{ "ok": false, "error": "<message>" }`.
//!
//! Validation failures return their user-facing message with 400 and an
//! over-limit body gets 413. Storage
//! and internal failures are logged server-side and collapse to a generic
//! 500 message; their detail never reaches the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use consent_blob::BlobError;
use consent_core::SubmissionError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Message returned for every 5xx response.
pub const SERVER_ERROR_MESSAGE: &str = "Error de servidor.";

/// Message returned when the body exceeds the configured limit.
pub const TOO_LARGE_MESSAGE: &str = "Solicitud demasiado grande.";

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Always `false`.
    pub ok: bool,
    /// Human-readable message.
    pub error: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Submission failed validation (400).
    #[error("validation error: {0}")]
    Validation(#[from] SubmissionError),

    /// Request body exceeded the configured limit (413).
    #[error("request body too large")]
    PayloadTooLarge,

    /// Blob storage write failed (500). Detail is logged, not returned.
    #[error("storage error: {0}")]
    Storage(#[from] BlobError),

    /// Any other unexpected failure (500). Detail is logged, not returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Outcome label recorded in the submissions metric.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.kind(),
            Self::PayloadTooLarge => "payload_too_large",
            Self::Storage(_) => "storage_error",
            Self::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            Self::Validation(e) => e.to_string(),
            Self::PayloadTooLarge => TOO_LARGE_MESSAGE.to_string(),
            Self::Storage(_) | Self::Internal(_) => SERVER_ERROR_MESSAGE.to_string(),
        };

        match &self {
            Self::Validation(e) => tracing::info!(reason = e.kind(), "consent submission rejected"),
            Self::PayloadTooLarge => tracing::info!("request body over limit"),
            Self::Storage(_) => tracing::error!(error = %self, "blob storage write failed"),
            Self::Internal(_) => tracing::error!(error = %self, "internal server error"),
        }

        let body = ErrorBody {
            ok: false,
            error: message,
        };

        (status, Json(body)).into_response()
    }
}
