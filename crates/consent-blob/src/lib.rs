//! # consent-blob -- Blob storage for consent records
//!
//! Two backends behind one [`BlobStore`] handle:
//!
//! - **Remote** ([`BlobClient`]): typed HTTP client for the blob API,
//!   authenticated with a read-write bearer token.
//! - **Memory** ([`MemoryBlobStore`]): process-local map for development
//!   and tests. Data is lost on restart.
//!
//! Both honour the same [`PutOptions`] (access level, content type, random
//! suffix) and return the same [`PutBlobResult`].

pub mod client;
pub mod config;
pub mod error;
pub mod memory;
pub mod types;

pub use client::BlobClient;
pub use config::{BlobApiConfig, ConfigError};
pub use error::BlobError;
pub use memory::{MemoryBlobStore, StoredBlob};
pub use types::{Access, PutBlobResult, PutOptions};

/// Runtime-selected blob backend.
#[derive(Debug, Clone)]
pub enum BlobStore {
    /// Hosted blob API.
    Remote(BlobClient),
    /// In-process store; nothing is persisted.
    Memory(MemoryBlobStore),
}

impl BlobStore {
    /// Build the remote backend from environment configuration.
    pub fn remote_from_env() -> Result<Self, BlobError> {
        let config = BlobApiConfig::from_env()?;
        Ok(Self::Remote(BlobClient::new(config)?))
    }

    /// Upload `body` to `pathname` on whichever backend is active.
    pub async fn put(
        &self,
        pathname: &str,
        body: Vec<u8>,
        options: &PutOptions,
    ) -> Result<PutBlobResult, BlobError> {
        match self {
            Self::Remote(client) => client.put(pathname, body, options).await,
            Self::Memory(store) => store.put(pathname, body, options),
        }
    }

    /// Short backend label for logs and readiness output.
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Remote(_) => "remote",
            Self::Memory(_) => "memory",
        }
    }
}

impl From<MemoryBlobStore> for BlobStore {
    fn from(store: MemoryBlobStore) -> Self {
        Self::Memory(store)
    }
}

impl From<BlobClient> for BlobStore {
    fn from(client: BlobClient) -> Self {
        Self::Remote(client)
    }
}
