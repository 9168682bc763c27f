//! # Consent Intake
//!
//! Accepts a consent form submission, validates it, stamps it with the
//! acceptance time and client metadata, and stores it as a private JSON
//! blob under `submissions/`. The stored pathname is returned as the
//! submission id.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use consent_blob::PutOptions;
use consent_core::{submission_pathname, ConsentRecord};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::extractors::{client_info, decode_submission, extract_body};
use crate::state::AppState;

/// Body returned when a submission is stored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConsentAccepted {
    /// Always `true`.
    pub ok: bool,
    /// Storage pathname of the record, e.g. `submissions/1760000000000-Xy3.json`.
    pub id: String,
}

/// Build the consent router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/consent", post(submit_consent))
}

/// POST /api/consent — Validate and store a consent submission.
#[utoipa::path(
    post,
    path = "/api/consent",
    request_body = consent_core::ConsentSubmission,
    responses(
        (status = 201, description = "Consent recorded", body = ConsentAccepted),
        (status = 400, description = "Submission rejected", body = crate::error::ErrorBody),
        (status = 413, description = "Body over the size limit", body = crate::error::ErrorBody),
        (status = 500, description = "Server error", body = crate::error::ErrorBody),
    ),
    tag = "consent"
)]
async fn submit_consent(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<ConsentAccepted>), AppError> {
    let outcome = match extract_body(body) {
        Ok(body) => store_submission(&state, &headers, &body).await,
        Err(e) => Err(e),
    };

    match &outcome {
        Ok(id) => {
            state.metrics.record_submission("accepted");
            tracing::info!(
                id = %id,
                backend = state.blob_store.backend_name(),
                "consent recorded"
            );
        }
        Err(e) => state.metrics.record_submission(e.outcome()),
    }

    let id = outcome?;
    Ok((StatusCode::CREATED, Json(ConsentAccepted { ok: true, id })))
}

async fn store_submission(
    state: &AppState,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<String, AppError> {
    let client = client_info(headers);
    let validated = decode_submission(body)?.validate()?;

    let now = Utc::now();
    let record = ConsentRecord::new(validated, client, now);
    let payload = record
        .to_json()
        .map_err(|e| AppError::Internal(format!("failed to serialize consent record: {e}")))?;

    let stored = state
        .blob_store
        .put(&submission_pathname(now), payload, &PutOptions::private_json())
        .await?;

    Ok(stored.pathname)
}
