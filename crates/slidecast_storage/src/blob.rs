//! Blob metadata and references.

/// What the caller knows about a blob before it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlobMetadata {
    /// Slash-separated relative key, e.g. `deck-id/output3.mp3`
    pub key: String,
    /// MIME type
    pub content_type: String,
}

impl BlobMetadata {
    /// Metadata for an MP3 clip stored under `key`.
    pub fn mp3(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            content_type: "audio/mpeg".to_string(),
        }
    }
}

/// A stored blob.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlobReference {
    /// Key the blob was stored under
    pub key: String,
    /// SHA-256 of the content, lowercase hex
    pub content_hash: String,
    /// Storage backend name (e.g., "filesystem", "memory")
    pub storage_backend: String,
    /// Backend-specific location
    pub storage_path: String,
    /// Size in bytes
    pub size_bytes: u64,
    /// MIME type
    pub content_type: String,
}

/// Check that `key` is a clean relative path.
///
/// Empty keys, absolute keys, backslashes and `.`/`..` segments are rejected
/// so a key can never escape the storage root.
pub(crate) fn validate_key(key: &str) -> Result<(), String> {
    if key.is_empty() {
        return Err("empty key".to_string());
    }
    if key.starts_with('/') || key.contains('\\') {
        return Err(format!("key must be relative: {}", key));
    }
    if key
        .split('/')
        .any(|segment| segment.is_empty() || segment == "." || segment == "..")
    {
        return Err(format!("invalid path segment in key: {}", key));
    }
    Ok(())
}

pub(crate) fn content_hash(data: &[u8]) -> String {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}
