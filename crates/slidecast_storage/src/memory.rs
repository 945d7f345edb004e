//! In-memory storage backend.

use crate::blob::{content_hash, validate_key};
use crate::{BlobMetadata, BlobReference, MediaStorage};
use slidecast_error::{SlidecastResult, StorageError, StorageErrorKind};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Blob store held in a shared map.
///
/// Clones share the same contents. Useful for dry runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    blobs: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs.
    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    /// Whether nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.blobs.read().await.is_empty()
    }

    /// Stored keys in sorted order.
    pub async fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.blobs.read().await.keys().cloned().collect();
        keys.sort();
        keys
    }
}

#[async_trait::async_trait]
impl MediaStorage for MemoryStorage {
    async fn store(&self, data: &[u8], metadata: &BlobMetadata) -> SlidecastResult<BlobReference> {
        validate_key(&metadata.key)
            .map_err(|e| StorageError::new(StorageErrorKind::InvalidKey(e)))?;

        self.blobs
            .write()
            .await
            .insert(metadata.key.clone(), data.to_vec());

        Ok(BlobReference {
            key: metadata.key.clone(),
            content_hash: content_hash(data),
            storage_backend: "memory".to_string(),
            storage_path: format!("memory://{}", metadata.key),
            size_bytes: data.len() as u64,
            content_type: metadata.content_type.clone(),
        })
    }

    async fn retrieve(&self, key: &str) -> SlidecastResult<Vec<u8>> {
        self.blobs
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::new(StorageErrorKind::NotFound(key.to_string())).into())
    }

    async fn get_url(&self, reference: &BlobReference) -> SlidecastResult<String> {
        Ok(reference.storage_path.clone())
    }

    async fn delete(&self, key: &str) -> SlidecastResult<()> {
        match self.blobs.write().await.remove(key) {
            Some(_) => Ok(()),
            None => Err(StorageError::new(StorageErrorKind::NotFound(key.to_string())).into()),
        }
    }

    async fn exists(&self, key: &str) -> SlidecastResult<bool> {
        Ok(self.blobs.read().await.contains_key(key))
    }
}
