//! Core data types for the Slidecast narrated presentation engine.
//!
//! This crate holds the slide model shared by generation, playback and the
//! conversation transcript, plus the request types spoken to language models.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod deck;
mod logging;
mod request;
mod role;
mod slide;

pub use deck::{AudioAsset, SlideDeck};
pub use request::{GenerateRequest, GenerateResponse, Message};
pub use role::Role;
pub use slide::{
    ImageUnit, NarratedText, NarrationUnit, Slide, SlideElement, SlideKind, UnitContent,
};
pub use logging::init_tracing;
