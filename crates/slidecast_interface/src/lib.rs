//! Collaborator traits for the Slidecast presentation engine.
//!
//! Deck generation talks to three external services: a language model that
//! writes the slides, a speech synthesizer that narrates them and an image
//! search that illustrates them. Each is a trait here so that generation can
//! be driven by live HTTP clients or by in-process fakes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{ImageSearch, LanguageModel, SpeechSynthesizer};
pub use types::{ImageHit, SpeechClip};
