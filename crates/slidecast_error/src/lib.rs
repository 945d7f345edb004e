//! Error types for the Slidecast narrated presentation engine.
//!
//! Every concern gets an `*ErrorKind` enum describing what went wrong and an
//! `*Error` struct pairing the kind with the source location that raised it.
//! All of them convert into [`SlidecastError`] so callers can use `?` freely.
//!
//! # Examples
//!
//! ```
//! use slidecast_error::{SlidecastResult, DeckError, DeckErrorKind};
//!
//! fn load() -> SlidecastResult<()> {
//!     Err(DeckError::new(DeckErrorKind::EmptyDeck))?
//! }
//!
//! assert!(load().unwrap_err().to_string().contains("no slides"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chat;
mod deck;
mod error;
mod generation;
mod message;
mod provider;
mod storage;

pub use chat::{ChatError, ChatErrorKind};
pub use deck::{DeckError, DeckErrorKind};
pub use error::{SlidecastError, SlidecastErrorKind, SlidecastResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use message::{BackendError, ConfigError, HttpError, JsonError};
pub use provider::{ProviderError, ProviderErrorKind, RetryableError};
pub use storage::{StorageError, StorageErrorKind};
