//! Typed client for the blob API.
//!
//! ## Endpoint
//!
//! | Method | Path                  | Operation  |
//! |--------|-----------------------|------------|
//! | PUT    | `/?pathname={path}`   | Upload one blob |
//!
//! Options travel as headers (`x-content-type`, `x-add-random-suffix`,
//! `x-vercel-blob-access`); the body is the raw blob content.
//!
//! Requests are sent once. A failed upload surfaces to the caller as a
//! [`BlobError`] and is not retried here.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::config::{BlobApiConfig, ConfigError};
use crate::error::BlobError;
use crate::types::{check_pathname, PutBlobResult, PutOptions};

/// Client for the blob API.
#[derive(Debug, Clone)]
pub struct BlobClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl BlobClient {
    /// Create a new client from configuration.
    pub fn new(config: BlobApiConfig) -> Result<Self, BlobError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.token.as_str()))
                .map_err(|_| BlobError::Config(ConfigError::InvalidToken))?,
        );
        headers.insert(
            "x-api-version",
            HeaderValue::from_str(&config.api_version).map_err(|_| {
                BlobError::Config(ConfigError::InvalidApiVersion(config.api_version.clone()))
            })?,
        );

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| BlobError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Upload `body` to `pathname`.
    ///
    /// Calls `PUT {base_url}/?pathname={pathname}`. The returned
    /// [`PutBlobResult::pathname`] includes the random suffix when one was
    /// requested.
    pub async fn put(
        &self,
        pathname: &str,
        body: Vec<u8>,
        options: &PutOptions,
    ) -> Result<PutBlobResult, BlobError> {
        check_pathname(pathname)?;
        let endpoint = "PUT /";

        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("pathname", pathname);

        let resp = self
            .http
            .put(url)
            .header("x-content-type", options.content_type.as_str())
            .header(
                "x-add-random-suffix",
                if options.add_random_suffix { "1" } else { "0" },
            )
            .header("x-vercel-blob-access", options.access.as_str())
            .body(body)
            .send()
            .await
            .map_err(|e| BlobError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(BlobError::Api {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        let result: PutBlobResult = resp.json().await.map_err(|e| BlobError::Deserialization {
            endpoint: endpoint.into(),
            source: e,
        })?;

        tracing::debug!(pathname = %result.pathname, "blob stored");
        Ok(result)
    }
}
