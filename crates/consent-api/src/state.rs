//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! AppState holds the storage backend that consent records are written to,
//! the Prometheus metrics handle, and the runtime configuration. Records
//! are never read back by this service.

use consent_blob::{BlobStore, MemoryBlobStore};

use crate::middleware::metrics::ApiMetrics;

/// Default request body ceiling. A consent form is a few hundred bytes.
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Runtime configuration for the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Maximum accepted request body size in bytes.
    pub body_limit_bytes: usize,
    /// Origins allowed to call the API cross-origin.
    /// Empty means no CORS layer is installed.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `PORT` (default: 8080)
    /// - `BODY_LIMIT_BYTES` (default: 65536)
    /// - `CORS_ALLOWED_ORIGINS` (comma-separated, default: none)
    ///
    /// Unparseable numbers fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            body_limit_bytes: std::env::var("BODY_LIMIT_BYTES")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(defaults.body_limit_bytes),
            cors_allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Where consent records are written.
    pub blob_store: BlobStore,
    /// Prometheus registry shared with the metrics middleware.
    pub metrics: ApiMetrics,
    /// Runtime configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Create state with the given configuration and storage backend.
    pub fn with_config(config: AppConfig, blob_store: BlobStore) -> Self {
        Self {
            blob_store,
            metrics: ApiMetrics::new(),
            config,
        }
    }

    /// State backed by a fresh in-memory store and default configuration.
    pub fn in_memory() -> Self {
        Self::with_config(AppConfig::default(), BlobStore::Memory(MemoryBlobStore::new()))
    }
}
