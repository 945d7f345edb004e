//! Fan-out limits, retry and configuration for Slidecast.
//!
//! Deck generation fans out to a speech service and an image search in
//! parallel. Each fan-out runs through a [`RateLimiter`] configured from a
//! [`TierConfig`], which bounds concurrency (five at a time by default),
//! optionally enforces request quotas, and retries transient failures with
//! exponential backoff.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod settings;
mod limiter;
mod tier;

pub use settings::{
    FanOutConfig, ImageSearchConfig, LanguageModelConfig, ServerConfig, SlidecastConfig,
    SpeechConfig, StorageConfig, TierConfig, api_key_from_env, user_config_path,
};
pub use limiter::{RateLimiter, RateLimiterGuard};
pub use tier::{RetryPolicy, Tier};
