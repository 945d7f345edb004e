//! Blob storage for Slidecast narration clips.
//!
//! Synthesized narration is uploaded once per unit under
//! `{deck_id}/output{sequence}.mp3` and referenced from the deck by URL.
//!
//! # Example
//!
//! ```no_run
//! use slidecast_storage::{BlobMetadata, FileSystemStorage, MediaStorage};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = FileSystemStorage::new("/var/slidecast/media")?
//!     .with_public_url("https://media.example.com");
//!
//! let reference = storage
//!     .store(b"ID3...", &BlobMetadata::mp3("deck-1/output1.mp3"))
//!     .await?;
//! let url = storage.get_url(&reference).await?;
//! assert_eq!(url, "https://media.example.com/deck-1/output1.mp3");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod blob;
mod filesystem;
mod memory;
mod storage;

pub use blob::{BlobMetadata, BlobReference};
pub use filesystem::FileSystemStorage;
pub use memory::MemoryStorage;
pub use storage::MediaStorage;
