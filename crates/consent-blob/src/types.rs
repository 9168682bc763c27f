//! Request options and response types for blob `put`.

use serde::{Deserialize, Serialize};

use crate::error::BlobError;

/// Length of the random suffix appended to pathnames.
pub const RANDOM_SUFFIX_LEN: usize = 30;

/// Visibility of a stored blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Public,
    Private,
}

impl Access {
    /// Header value for this access level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

/// Options for a single `put`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutOptions {
    pub access: Access,
    pub content_type: String,
    /// Ask the store to append a random suffix so concurrent writes to the
    /// same pathname never collide.
    pub add_random_suffix: bool,
}

impl PutOptions {
    /// Private JSON document with a random suffix, the shape every consent
    /// record is written with.
    pub fn private_json() -> Self {
        Self {
            access: Access::Private,
            content_type: "application/json".to_string(),
            add_random_suffix: true,
        }
    }
}

/// Result of a successful `put`.
///
/// Fields use `#[serde(default)]` so additional or missing optional fields in
/// the live API response do not break deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutBlobResult {
    pub url: String,
    #[serde(default)]
    pub download_url: Option<String>,
    /// Final pathname, including any random suffix.
    pub pathname: String,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub content_disposition: Option<String>,
}

/// Reject pathnames the store cannot address.
pub(crate) fn check_pathname(pathname: &str) -> Result<(), BlobError> {
    if pathname.is_empty() || pathname.ends_with('/') {
        return Err(BlobError::InvalidPathname(pathname.to_string()));
    }
    Ok(())
}

/// Insert `-<suffix>` before the extension of the final path segment:
/// `submissions/17.json` → `submissions/17-<suffix>.json`.
pub fn with_random_suffix(pathname: &str, suffix: &str) -> String {
    let name_start = pathname.rfind('/').map_or(0, |i| i + 1);
    match pathname[name_start..].rfind('.') {
        // A leading dot is a hidden-file name, not an extension.
        Some(dot) if dot > 0 => {
            let at = name_start + dot;
            format!("{}-{}{}", &pathname[..at], suffix, &pathname[at..])
        }
        _ => format!("{pathname}-{suffix}"),
    }
}

/// Generate an alphanumeric suffix of [`RANDOM_SUFFIX_LEN`] characters.
pub fn random_suffix() -> String {
    use rand::distributions::Alphanumeric;
    use rand::Rng;

    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RANDOM_SUFFIX_LEN)
        .map(char::from)
        .collect()
}
