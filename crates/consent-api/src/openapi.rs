//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI 3.1 spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Consent Intake API",
        version = "0.1.0",
        description = "Records company consent form submissions: validates the contact data and the company RUT, then stores each accepted submission as a private JSON record.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(crate::routes::consent::submit_consent),
    components(schemas(
        consent_core::ConsentSubmission,
        crate::routes::consent::ConsentAccepted,
        crate::error::ErrorBody,
    )),
    tags(
        (name = "consent", description = "Consent form intake"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
