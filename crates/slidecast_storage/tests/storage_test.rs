//! Tests for the blob storage backends.

use slidecast_error::{SlidecastErrorKind, StorageErrorKind};
use slidecast_storage::{BlobMetadata, FileSystemStorage, MediaStorage, MemoryStorage};
use tempfile::TempDir;

#[tokio::test]
async fn test_filesystem_store_and_retrieve() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    let data = b"fake mp3 bytes";
    let reference = storage
        .store(data, &BlobMetadata::mp3("deck-1/output1.mp3"))
        .await
        .unwrap();

    assert_eq!(reference.storage_backend, "filesystem");
    assert_eq!(reference.content_type, "audio/mpeg");
    assert_eq!(reference.size_bytes, data.len() as u64);
    assert_eq!(reference.content_hash.len(), 64);
    assert!(temp_dir.path().join("deck-1/output1.mp3").exists());
    assert!(!temp_dir.path().join("deck-1/output1.tmp").exists());

    let retrieved = storage.retrieve("deck-1/output1.mp3").await.unwrap();
    assert_eq!(retrieved, data);
}

#[tokio::test]
async fn test_filesystem_store_replaces_existing_key() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();
    let metadata = BlobMetadata::mp3("deck-1/output2.mp3");

    let first = storage.store(b"first", &metadata).await.unwrap();
    let second = storage.store(b"second", &metadata).await.unwrap();

    assert_ne!(first.content_hash, second.content_hash);
    assert_eq!(
        storage.retrieve("deck-1/output2.mp3").await.unwrap(),
        b"second"
    );
}

#[tokio::test]
async fn test_filesystem_url_uses_public_prefix_when_configured() {
    let temp_dir = TempDir::new().unwrap();
    let plain = FileSystemStorage::new(temp_dir.path()).unwrap();
    let reference = plain
        .store(b"x", &BlobMetadata::mp3("d/output1.mp3"))
        .await
        .unwrap();
    assert_eq!(
        plain.get_url(&reference).await.unwrap(),
        reference.storage_path
    );

    let public = FileSystemStorage::new(temp_dir.path())
        .unwrap()
        .with_public_url("https://media.example.com/");
    assert_eq!(
        public.get_url(&reference).await.unwrap(),
        "https://media.example.com/d/output1.mp3"
    );
}

#[tokio::test]
async fn test_filesystem_rejects_escaping_keys() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    for key in ["", "/etc/passwd", "../outside.mp3", "a//b.mp3", "a\\b.mp3"] {
        let err = storage
            .store(b"x", &BlobMetadata::mp3(key))
            .await
            .unwrap_err();
        match err.kind() {
            SlidecastErrorKind::Storage(e) => {
                assert!(matches!(e.kind, StorageErrorKind::InvalidKey(_)), "{key}")
            }
            other => panic!("unexpected error for {key}: {other}"),
        }
    }
}

#[tokio::test]
async fn test_filesystem_delete_and_exists() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();
    storage
        .store(b"x", &BlobMetadata::mp3("d/output3.mp3"))
        .await
        .unwrap();

    assert!(storage.exists("d/output3.mp3").await.unwrap());
    storage.delete("d/output3.mp3").await.unwrap();
    assert!(!storage.exists("d/output3.mp3").await.unwrap());

    let err = storage.delete("d/output3.mp3").await.unwrap_err();
    assert!(err.to_string().contains("Blob not found"));
    assert!(storage.retrieve("d/output3.mp3").await.is_err());
}

#[tokio::test]
async fn test_memory_storage_shares_contents_between_clones() {
    let storage = MemoryStorage::new();
    let clone = storage.clone();

    clone
        .store(b"abc", &BlobMetadata::mp3("d/output1.mp3"))
        .await
        .unwrap();

    assert_eq!(storage.len().await, 1);
    assert_eq!(storage.keys().await, vec!["d/output1.mp3".to_string()]);
    assert_eq!(storage.retrieve("d/output1.mp3").await.unwrap(), b"abc");
    storage.delete("d/output1.mp3").await.unwrap();
    assert!(clone.is_empty().await);
}
