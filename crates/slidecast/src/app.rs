//! Wiring live collaborators from configuration.

use crate::{
    ChatService, DeckGenerator, ElevenLabsClient, FileSystemStorage, IllustrationResolver,
    InMemoryTranscriptRepository, NarrationSynthesizer, OpenAiClient, SerpApiClient,
    SlidecastConfig, SlidecastResult,
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Build a deck generator backed by the configured HTTP services and blob store.
///
/// # Errors
///
/// Missing API keys and an unusable storage directory.
#[instrument(skip(config))]
pub fn deck_generator(config: &SlidecastConfig) -> SlidecastResult<DeckGenerator> {
    let model = OpenAiClient::from_config(config.language_model.clone())?;
    let speech = ElevenLabsClient::from_config(config.speech.clone())?;
    let search = SerpApiClient::from_config(config.images.clone())?;

    let mut storage = FileSystemStorage::new(&config.storage.path)?;
    if let Some(url) = &config.storage.public_url {
        storage = storage.with_public_url(url);
    }

    info!(
        model = %config.language_model.model,
        storage = %config.storage.path.display(),
        "Deck generator ready"
    );
    Ok(DeckGenerator::new(
        Arc::new(model),
        NarrationSynthesizer::new(
            Arc::new(speech),
            Arc::new(storage),
            config.fan_out.synthesis.clone(),
        ),
        IllustrationResolver::new(Arc::new(search), config.fan_out.illustration.clone()),
        config.language_model.clone(),
    ))
}

/// Build a chat service over an in-memory transcript.
///
/// # Errors
///
/// Anything [`deck_generator`] reports.
pub fn chat_service(config: &SlidecastConfig) -> SlidecastResult<ChatService> {
    Ok(ChatService::new(
        Arc::new(InMemoryTranscriptRepository::new()),
        deck_generator(config)?,
        config.language_model.clone(),
    ))
}
