//! Conversation transcripts for Slidecast.
//!
//! A chat is an ordered list of turns. User turns hold questions; assistant
//! turns hold either a serialized deck or plain text. [`ChatService::ask`]
//! runs one turn end to end and only persists a deck that was fully
//! generated.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod model;
mod render;
mod repository;
mod service;
mod suggestions;
mod title;

pub use model::{Chat, ChatMessage, PLACEHOLDER_TITLE, sort_transcript};
pub use render::{RenderedTurn, render_transcript};
pub use repository::{InMemoryTranscriptRepository, TranscriptRepository};
pub use service::{Answer, ChatService};
pub use suggestions::{
    SUGGESTION_COUNT, Suggestion, all_suggestions, pick_suggestions, suggestions,
};
pub use title::{FALLBACK_TITLE, generate_title, title_request};
