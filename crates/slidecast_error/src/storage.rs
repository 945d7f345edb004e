//! Blob storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create a storage directory
    #[display("Failed to create storage directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write a blob
    #[display("Failed to write blob: {}", _0)]
    FileWrite(String),
    /// Failed to read a blob
    #[display("Failed to read blob: {}", _0)]
    FileRead(String),
    /// No blob stored under the requested key
    #[display("Blob not found: {}", _0)]
    NotFound(String),
    /// Key escapes the storage root or is otherwise unusable
    #[display("Invalid storage key: {}", _0)]
    InvalidKey(String),
    /// Failed to delete a blob
    #[display("Failed to delete blob: {}", _0)]
    Delete(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use slidecast_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::NotFound("deck/output1.mp3".to_string()));
/// assert!(err.to_string().contains("Blob not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
