//! Slidecast turns a question into a narrated slide presentation.
//!
//! A language model drafts the slides, every narration unit is voiced, image
//! slots are filled from an image search, and the result plays back one
//! clip at a time with each element appearing as it is spoken about.
//!
//! # Architecture
//!
//! - `slidecast_error` - Error types
//! - `slidecast_core` - Slides, decks, roles and completion requests
//! - `slidecast_interface` - `LanguageModel`, `SpeechSynthesizer`, `ImageSearch`
//! - `slidecast_rate_limit` - Fan-out limiting, retry and configuration
//! - `slidecast_storage` - Blob storage for narration clips
//! - `slidecast_deck` - Slide validation, numbering and the two fan-outs
//! - `slidecast_playback` - Cursor, transitions and per-deck sessions
//! - `slidecast_models` - OpenAI, ElevenLabs and SerpApi clients
//! - `slidecast_chat` - Transcripts and turn orchestration
//!
//! This crate re-exports everything and adds the HTTP API and wiring.
//!
//! # Example
//!
//! ```rust,ignore
//! use slidecast::{chat_service, SlidecastConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = chat_service(&SlidecastConfig::load()?)?;
//!     let answer = service.ask(None, "How do vaccines work?").await?;
//!     println!("{}", serde_json::to_string_pretty(answer.deck())?);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod app;

pub use api::{router, ApiError, AskBody, AskReply, ErrorBody};
pub use app::{chat_service, deck_generator};

pub use slidecast_chat::*;
pub use slidecast_core::*;
pub use slidecast_deck::*;
pub use slidecast_error::*;
pub use slidecast_interface::*;
pub use slidecast_models::*;
pub use slidecast_playback::*;
pub use slidecast_rate_limit::*;
pub use slidecast_storage::*;
