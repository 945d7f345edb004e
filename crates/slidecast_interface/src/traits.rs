//! Trait definitions for the external services a deck is built from.

use crate::{ImageHit, SpeechClip};
use async_trait::async_trait;
use slidecast_core::{GenerateRequest, GenerateResponse};
use slidecast_error::SlidecastResult;

/// A chat-completion language model.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Complete the conversation in `req`.
    async fn generate(&self, req: &GenerateRequest) -> SlidecastResult<GenerateResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier.
    fn model_name(&self) -> &str;
}

/// A text-to-speech service.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Render `text` as speech.
    async fn synthesize(&self, text: &str) -> SlidecastResult<SpeechClip>;

    /// Voice identifier used for rendering.
    fn voice(&self) -> &str;
}

/// An image search service.
#[async_trait]
pub trait ImageSearch: Send + Sync {
    /// Search for images matching `query`, best match first.
    async fn search(&self, query: &str) -> SlidecastResult<Vec<ImageHit>>;
}
