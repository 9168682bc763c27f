//! Blob API client configuration.
//!
//! Defaults point at the hosted blob API. Override via environment variables
//! or explicit construction for staging and tests.

use url::Url;
use zeroize::Zeroizing;

/// Configuration for connecting to the blob API.
///
/// Custom `Debug` implementation redacts the `token` field
/// to prevent credential leakage in log output.
#[derive(Clone)]
pub struct BlobApiConfig {
    /// Base URL of the blob API.
    /// Default: <https://blob.vercel-storage.com>
    pub base_url: Url,
    /// Read-write bearer token.
    pub token: Zeroizing<String>,
    /// Value sent in the `x-api-version` header.
    pub api_version: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for BlobApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlobApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .field("api_version", &self.api_version)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl BlobApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `BLOB_READ_WRITE_TOKEN` (required)
    /// - `BLOB_API_URL` (default: `https://blob.vercel-storage.com`)
    /// - `BLOB_API_VERSION` (default: `7`)
    /// - `BLOB_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = std::env::var("BLOB_READ_WRITE_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;

        Ok(Self {
            base_url: env_url("BLOB_API_URL", "https://blob.vercel-storage.com")?,
            token: Zeroizing::new(token),
            api_version: std::env::var("BLOB_API_VERSION").unwrap_or_else(|_| "7".to_string()),
            timeout_secs: std::env::var("BLOB_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Create a configuration pointing at an explicit base URL (staging, mock servers).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if `base_url` cannot be parsed.
    pub fn for_base_url(base_url: &str, token: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidUrl(base_url.to_string(), e.to_string()))?;
        Ok(Self {
            base_url,
            token: Zeroizing::new(token.to_string()),
            api_version: "7".to_string(),
            timeout_secs: 5,
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("BLOB_READ_WRITE_TOKEN environment variable is required")]
    MissingToken,
    #[error("BLOB_READ_WRITE_TOKEN contains characters not allowed in a header")]
    InvalidToken,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("BLOB_API_VERSION is not a valid header value: {0:?}")]
    InvalidApiVersion(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_base_url_builds_valid_config() {
        let cfg = BlobApiConfig::for_base_url("http://127.0.0.1:9000", "test-token").unwrap();
        assert_eq!(cfg.token.as_str(), "test-token");
        assert_eq!(cfg.timeout_secs, 5);
        assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:9000/");
    }

    #[test]
    fn for_base_url_rejects_garbage() {
        assert!(matches!(
            BlobApiConfig::for_base_url("not a url", "t"),
            Err(ConfigError::InvalidUrl(_, _))
        ));
    }

    #[test]
    fn debug_redacts_token() {
        let cfg = BlobApiConfig::for_base_url("http://127.0.0.1:9000", "super-secret").unwrap();
        let dbg = format!("{cfg:?}");
        assert!(!dbg.contains("super-secret"));
        assert!(dbg.contains("[REDACTED]"));
    }

    #[test]
    fn env_url_uses_default_when_var_absent() {
        let url = env_url("NONEXISTENT_BLOB_VAR_12345", "https://example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn env_url_rejects_invalid_url() {
        std::env::set_var("TEST_BAD_URL_BLOB", "not a url");
        let result = env_url("TEST_BAD_URL_BLOB", "https://example.com");
        std::env::remove_var("TEST_BAD_URL_BLOB");
        assert!(result.is_err());
    }
}
