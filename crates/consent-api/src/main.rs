//! # consent-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for consent intake.
//! Binds to configurable port (default 8080).

use consent_api::state::{AppConfig, AppState};
use consent_blob::{BlobError, BlobStore, ConfigError, MemoryBlobStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = AppConfig::from_env();

    let blob_store = match BlobStore::remote_from_env() {
        Ok(store) => {
            tracing::info!("blob API client configured");
            store
        }
        Err(BlobError::Config(ConfigError::MissingToken)) => {
            tracing::warn!(
                "BLOB_READ_WRITE_TOKEN not set. Consent records are kept in memory and lost on restart."
            );
            BlobStore::Memory(MemoryBlobStore::new())
        }
        Err(e) => {
            tracing::error!("Failed to create blob client: {e}");
            return Err(e.into());
        }
    };

    let port = config.port;
    let state = AppState::with_config(config, blob_store);
    let app = consent_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("consent API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Structured tracing; `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
