//! Blob storage error types.

/// Errors from blob storage calls.
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Blob API returned a non-2xx status.
    #[error("blob API {endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// A blob already exists at the pathname and no random suffix was requested.
    #[error("blob already exists: {0}")]
    AlreadyExists(String),
    /// The pathname is empty or ends with a separator.
    #[error("invalid pathname: \"{0}\"")]
    InvalidPathname(String),
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}
