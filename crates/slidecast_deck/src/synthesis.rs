//! Narration synthesis fan-out.
//!
//! Each narration unit is rendered to speech and uploaded independently,
//! at most `max_concurrent` at a time. A failed unit is logged and left out
//! of the result; the rest of the deck is unaffected.

use crate::Linearized;
use futures::future::join_all;
use slidecast_core::AudioAsset;
use slidecast_error::{SlidecastError, SlidecastResult};
use slidecast_interface::SpeechSynthesizer;
use slidecast_rate_limit::{RateLimiter, TierConfig};
use slidecast_storage::{BlobMetadata, MediaStorage};
use std::sync::Arc;

/// Storage key of the clip for sequence number `sequence`.
///
/// # Examples
///
/// ```
/// assert_eq!(slidecast_deck::audio_key("abc", 3), "abc/output3.mp3");
/// ```
pub fn audio_key(deck_id: &str, sequence: u32) -> String {
    format!("{}/output{}.mp3", deck_id, sequence)
}

/// Renders and stores narration clips.
///
/// One fan-out slot covers both the speech call and the upload of its clip.
#[derive(Clone, derive_getters::Getters)]
pub struct NarrationSynthesizer {
    speech: Arc<dyn SpeechSynthesizer>,
    storage: Arc<dyn MediaStorage>,
    limiter: RateLimiter<TierConfig>,
}

impl NarrationSynthesizer {
    /// Create a synthesizer limited by `tier`.
    pub fn new(
        speech: Arc<dyn SpeechSynthesizer>,
        storage: Arc<dyn MediaStorage>,
        tier: TierConfig,
    ) -> Self {
        Self {
            speech,
            storage,
            limiter: RateLimiter::new(tier),
        }
    }

    /// Synthesize and store one unit.
    #[tracing::instrument(skip(self, narration), fields(voice = self.speech.voice()))]
    pub async fn synthesize_unit(
        &self,
        deck_id: &str,
        sequence: u32,
        narration: &str,
    ) -> SlidecastResult<AudioAsset> {
        let blob_key = audio_key(deck_id, sequence);
        let key = blob_key.as_str();
        let this = self;
        let asset = self
            .limiter
            .execute(move || async move {
                let clip = this.speech.synthesize(narration).await?;
                let metadata = BlobMetadata {
                    key: key.to_string(),
                    content_type: clip.content_type,
                };
                let reference = this.storage.store(&clip.audio, &metadata).await?;
                let path = this.storage.get_url(&reference).await?;
                Ok::<_, SlidecastError>(AudioAsset::new(sequence, path))
            })
            .await?;

        tracing::debug!(path = %asset.path, "Stored narration clip");
        Ok(asset)
    }

    /// Synthesize every narration of a linearized deck.
    ///
    /// The result is sorted by index and contains only the units that
    /// succeeded.
    #[tracing::instrument(skip(self, linearized), fields(units = linearized.narrations.len()))]
    pub async fn synthesize_all(&self, deck_id: &str, linearized: &Linearized) -> Vec<AudioAsset> {
        let units = linearized
            .narrations
            .iter()
            .enumerate()
            .map(|(position, narration)| {
                let sequence = Linearized::sequence_of(position);
                async move {
                    match self.synthesize_unit(deck_id, sequence, narration).await {
                        Ok(asset) => Some(asset),
                        Err(e) => {
                            tracing::warn!(sequence, error = %e, "Narration synthesis failed");
                            None
                        }
                    }
                }
            });

        let mut assets: Vec<AudioAsset> = join_all(units).await.into_iter().flatten().collect();
        assets.sort();

        tracing::info!(
            synthesized = assets.len(),
            requested = linearized.narrations.len(),
            "Narration synthesis finished"
        );
        assets
    }
}
