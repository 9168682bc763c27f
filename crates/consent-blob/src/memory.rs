//! In-memory blob store for development and tests.
//!
//! Storage is a `parking_lot::RwLock<HashMap>` shared behind an `Arc`, so
//! clones see the same blobs. Nothing survives a restart.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::BlobError;
use crate::types::{
    check_pathname, random_suffix, with_random_suffix, Access, PutBlobResult, PutOptions,
};

/// A blob held by [`MemoryBlobStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBlob {
    pub access: Access,
    pub content_type: String,
    pub body: Vec<u8>,
}

/// Thread-safe, cloneable in-memory blob store.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: Arc<RwLock<HashMap<String, StoredBlob>>>,
}

impl MemoryBlobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `body` at `pathname`, applying the random suffix when requested.
    ///
    /// Without a suffix an existing pathname is rejected rather than
    /// overwritten.
    pub fn put(
        &self,
        pathname: &str,
        body: Vec<u8>,
        options: &PutOptions,
    ) -> Result<PutBlobResult, BlobError> {
        check_pathname(pathname)?;
        let final_path = if options.add_random_suffix {
            with_random_suffix(pathname, &random_suffix())
        } else {
            pathname.to_string()
        };

        let mut guard = self.blobs.write();
        if guard.contains_key(&final_path) {
            return Err(BlobError::AlreadyExists(final_path));
        }
        guard.insert(
            final_path.clone(),
            StoredBlob {
                access: options.access,
                content_type: options.content_type.clone(),
                body,
            },
        );

        Ok(PutBlobResult {
            url: format!("memory://{final_path}"),
            download_url: None,
            pathname: final_path,
            content_type: Some(options.content_type.clone()),
            content_disposition: None,
        })
    }

    /// Retrieve a blob by its final pathname.
    pub fn get(&self, pathname: &str) -> Option<StoredBlob> {
        self.blobs.read().get(pathname).cloned()
    }

    /// All stored pathnames, sorted.
    pub fn pathnames(&self) -> Vec<String> {
        let mut names: Vec<String> = self.blobs.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of stored blobs.
    pub fn len(&self) -> usize {
        self.blobs.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
