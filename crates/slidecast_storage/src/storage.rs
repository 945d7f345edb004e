//! Storage trait definition.

use crate::{BlobMetadata, BlobReference};
use slidecast_error::SlidecastResult;

/// Pluggable blob store for narration clips.
///
/// Blobs are addressed by caller-chosen relative keys. Storing under an
/// existing key replaces the previous content.
#[async_trait::async_trait]
pub trait MediaStorage: Send + Sync {
    /// Store `data` under `metadata.key`.
    async fn store(&self, data: &[u8], metadata: &BlobMetadata) -> SlidecastResult<BlobReference>;

    /// Read the blob stored under `key`.
    async fn retrieve(&self, key: &str) -> SlidecastResult<Vec<u8>>;

    /// Location a player should fetch the blob from.
    ///
    /// A public URL when the backend has one, otherwise the backend path.
    async fn get_url(&self, reference: &BlobReference) -> SlidecastResult<String>;

    /// Remove the blob stored under `key`.
    async fn delete(&self, key: &str) -> SlidecastResult<()>;

    /// Whether a blob is stored under `key`.
    async fn exists(&self, key: &str) -> SlidecastResult<bool>;
}
