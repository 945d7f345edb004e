//! Deck assembly: question in, narrated deck out.

use crate::{IllustrationResolver, NarrationSynthesizer, linearize, parse_slides, slide_request};
use slidecast_core::{Slide, SlideDeck};
use slidecast_error::{GenerationError, GenerationErrorKind, SlidecastResult};
use slidecast_interface::LanguageModel;
use slidecast_rate_limit::LanguageModelConfig;
use std::sync::Arc;

/// Produces a complete deck from a question.
///
/// One language model call, then validation and numbering, then the
/// synthesis and illustration fan-outs running side by side. Only the first
/// two steps can fail the turn; fan-out failures degrade the deck instead.
#[derive(Clone)]
pub struct DeckGenerator {
    model: Arc<dyn LanguageModel>,
    synthesizer: NarrationSynthesizer,
    resolver: IllustrationResolver,
    config: LanguageModelConfig,
}

impl DeckGenerator {
    /// Wire a generator from its collaborators.
    pub fn new(
        model: Arc<dyn LanguageModel>,
        synthesizer: NarrationSynthesizer,
        resolver: IllustrationResolver,
        config: LanguageModelConfig,
    ) -> Self {
        Self {
            model,
            synthesizer,
            resolver,
            config,
        }
    }

    /// The language model used for slide generation.
    pub fn model(&self) -> &Arc<dyn LanguageModel> {
        &self.model
    }

    /// Ask the language model for slides and validate them.
    ///
    /// # Errors
    ///
    /// Provider errors from the call, [`GenerationErrorKind::EmptyCompletion`]
    /// for an empty answer, and any error from [`parse_slides`].
    #[tracing::instrument(skip(self, question), fields(model = %self.config.model))]
    pub async fn draft_slides(&self, question: &str) -> SlidecastResult<Vec<Slide>> {
        let request = slide_request(question, &self.config);
        let response = self.model.generate(&request).await?;

        if response.text.trim().is_empty() {
            tracing::error!("Language model returned an empty completion");
            return Err(GenerationError::new(GenerationErrorKind::EmptyCompletion).into());
        }

        parse_slides(&response.text)
    }

    /// Number `slides` and run both fan-outs.
    ///
    /// Never fails: units whose audio or image could not be produced are
    /// simply missing from the result.
    #[tracing::instrument(skip(self, slides), fields(deck_id = %id, slides = slides.len()))]
    pub async fn assemble(&self, id: &str, slides: Vec<Slide>) -> SlideDeck {
        let linearized = linearize(slides);

        let (audio, slides) = tokio::join!(
            self.synthesizer.synthesize_all(id, &linearized),
            self.resolver.resolve_all(linearized.slides.clone()),
        );

        SlideDeck {
            id: id.to_string(),
            slides,
            audio,
        }
    }

    /// Generate a deck with a fresh id.
    ///
    /// # Errors
    ///
    /// Upstream generation failures and invalid slides. No partial deck is
    /// returned in that case.
    #[tracing::instrument(skip(self, question))]
    pub async fn generate(&self, question: &str) -> SlidecastResult<SlideDeck> {
        let id = uuid::Uuid::new_v4().to_string();
        let slides = self.draft_slides(question).await?;
        let deck = self.assemble(&id, slides).await;

        tracing::info!(
            deck_id = %deck.id,
            slides = deck.slides.len(),
            units = deck.unit_count(),
            audio = deck.audio.len(),
            "Deck generated"
        );
        Ok(deck)
    }
}
