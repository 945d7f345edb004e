//! HTTP collaborators for Slidecast.
//!
//! - [`OpenAiClient`] implements `LanguageModel` against any OpenAI-compatible
//!   chat completions endpoint.
//! - [`ElevenLabsClient`] implements `SpeechSynthesizer`.
//! - [`SerpApiClient`] implements `ImageSearch`.
//!
//! Each client reads its API key from the environment variable named in its
//! configuration section and maps failures to `ProviderError` so the fan-out
//! limiter can decide whether to retry.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod elevenlabs;
mod http;
mod openai;
mod serpapi;

pub use elevenlabs::{ElevenLabsClient, SpeechRequest};
pub use openai::{
    ChatCompletionRequest, ChatCompletionResponse, Choice, ChoiceMessage, OpenAiClient,
    ResponseFormat,
};
pub use serpapi::{ImageResult, SearchResponse, SerpApiClient};
