//! Deck generation for Slidecast.
//!
//! A question becomes a deck in four steps:
//!
//! 1. [`DeckGenerator::draft_slides`] asks the language model for slides and
//!    validates every element against the four templates.
//! 2. [`linearize`] assigns each narration unit its global sequence number
//!    and collects the narration text in the same order.
//! 3. [`NarrationSynthesizer`] and [`IllustrationResolver`] fan out in
//!    parallel, each bounded by its own [`slidecast_rate_limit::RateLimiter`].
//! 4. [`DeckGenerator::assemble`] joins both into a [`slidecast_core::SlideDeck`].
//!
//! Steps 1 and 2 are fatal on failure; unit failures in step 3 only leave
//! gaps in the audio list or missing image URLs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extraction;
mod generator;
mod illustration;
mod linearize;
mod prompt;
mod synthesis;

pub use extraction::{
    ENVELOPE_KEYS, extract_json, parse_slides, strip_line_breaks, unwrap_envelope, validate_slide,
};
pub use generator::DeckGenerator;
pub use illustration::{IllustrationResolver, ImageRequest, ImageSlot, apply_image, image_requests};
pub use linearize::{Linearized, linearize, number_slide};
pub use prompt::{SYSTEM_PROMPT, slide_request};
pub use synthesis::{NarrationSynthesizer, audio_key};
