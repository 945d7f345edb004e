//! Filesystem storage backend.

use crate::blob::{content_hash, validate_key};
use crate::{BlobMetadata, BlobReference, MediaStorage};
use slidecast_error::{SlidecastResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};

/// Stores each blob at `{base_path}/{key}`.
///
/// ```text
/// slidecast-media/
/// ├── 89b37441-78ad-47fb-ba2a-0845dc435c75/
/// │   ├── output1.mp3
/// │   ├── output2.mp3
/// │   └── output3.mp3
/// └── 9a844d49-6baa-4d52-95eb-40b8297fba89/
///     └── output1.mp3
/// ```
///
/// Writes go to a temp file that is renamed into place, so a reader never
/// sees a partial clip.
pub struct FileSystemStorage {
    base_path: PathBuf,
    public_url: Option<String>,
}

impl FileSystemStorage {
    /// Create a backend rooted at `base_path`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> SlidecastResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Created filesystem storage");
        Ok(Self {
            base_path,
            public_url: None,
        })
    }

    /// Serve blobs from `public_url` instead of their filesystem path.
    pub fn with_public_url(mut self, public_url: impl Into<String>) -> Self {
        let url = public_url.into();
        self.public_url = Some(url.trim_end_matches('/').to_string());
        self
    }

    /// Root directory of this backend.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn resolve(&self, key: &str) -> SlidecastResult<PathBuf> {
        validate_key(key).map_err(|e| StorageError::new(StorageErrorKind::InvalidKey(e)))?;
        Ok(self.base_path.join(key))
    }
}

#[async_trait::async_trait]
impl MediaStorage for FileSystemStorage {
    #[tracing::instrument(skip(self, data, metadata), fields(key = %metadata.key, size = data.len()))]
    async fn store(&self, data: &[u8], metadata: &BlobMetadata) -> SlidecastResult<BlobReference> {
        let path = self.resolve(&metadata.key)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        let hash = content_hash(data);
        tracing::debug!(hash = %hash, path = %path.display(), "Stored blob");

        Ok(BlobReference {
            key: metadata.key.clone(),
            content_hash: hash,
            storage_backend: "filesystem".to_string(),
            storage_path: path.to_string_lossy().to_string(),
            size_bytes: data.len() as u64,
            content_type: metadata.content_type.clone(),
        })
    }

    #[tracing::instrument(skip(self))]
    async fn retrieve(&self, key: &str) -> SlidecastResult<Vec<u8>> {
        let path = self.resolve(key)?;

        let data = tokio::fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(key.to_string()))
            } else {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        })?;

        tracing::debug!(size = data.len(), "Retrieved blob");
        Ok(data)
    }

    async fn get_url(&self, reference: &BlobReference) -> SlidecastResult<String> {
        Ok(match &self.public_url {
            Some(base) => format!("{}/{}", base, reference.key),
            None => reference.storage_path.clone(),
        })
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, key: &str) -> SlidecastResult<()> {
        let path = self.resolve(key)?;

        tokio::fs::remove_file(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(key.to_string()))
            } else {
                StorageError::new(StorageErrorKind::Delete(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        })?;

        tracing::info!(path = %path.display(), "Deleted blob");
        Ok(())
    }

    async fn exists(&self, key: &str) -> SlidecastResult<bool> {
        let path = self.resolve(key)?;
        tokio::fs::try_exists(&path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()
        })
    }
}
