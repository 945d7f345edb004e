//! ElevenLabs text-to-speech client.

use crate::http::{check_status, request_failed};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use slidecast_error::{ProviderError, ProviderErrorKind, SlidecastResult};
use slidecast_interface::{SpeechClip, SpeechSynthesizer};
use slidecast_rate_limit::{SpeechConfig, api_key_from_env};
use tracing::{debug, instrument};

/// Text-to-speech request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechRequest {
    /// Text to speak
    pub text: String,
    /// Synthesis model
    pub model_id: String,
}

/// Client for `POST {base_url}/v1/text-to-speech/{voice_id}`, returning MP3.
#[derive(Debug, Clone)]
pub struct ElevenLabsClient {
    client: reqwest::Client,
    api_key: String,
    config: SpeechConfig,
}

impl ElevenLabsClient {
    /// Create a client with an explicit API key.
    #[instrument(skip(api_key, config), fields(voice = %config.voice_id))]
    pub fn new(api_key: impl Into<String>, config: SpeechConfig) -> Self {
        debug!("Creating speech client");
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            config,
        }
    }

    /// Create a client reading the key from `config.api_key_env`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderErrorKind::MissingApiKey`] when the variable is unset.
    pub fn from_config(config: SpeechConfig) -> SlidecastResult<Self> {
        let api_key = api_key_from_env(&config.api_key_env)?;
        Ok(Self::new(api_key, config))
    }

    /// Settings in use.
    pub fn config(&self) -> &SpeechConfig {
        &self.config
    }

    /// Build the HTTP request without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderErrorKind::ApiRequest`] if the URL is invalid.
    pub fn build_request(&self, text: &str) -> Result<reqwest::Request, ProviderError> {
        let url = format!(
            "{}/v1/text-to-speech/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.voice_id
        );
        self.client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .header("Accept", "audio/mpeg")
            .json(&SpeechRequest {
                text: text.to_string(),
                model_id: self.config.model_id.clone(),
            })
            .build()
            .map_err(request_failed)
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsClient {
    #[instrument(skip(self, text), fields(provider = "elevenlabs", chars = text.len()))]
    async fn synthesize(&self, text: &str) -> SlidecastResult<SpeechClip> {
        let request = self.build_request(text)?;
        let response = self.client.execute(request).await.map_err(request_failed)?;
        let response = check_status(response).await?;
        let audio = response.bytes().await.map_err(request_failed)?;

        if audio.is_empty() {
            return Err(ProviderError::new(ProviderErrorKind::EmptyResponse(
                "elevenlabs".to_string(),
            ))
            .into());
        }

        debug!(bytes = audio.len(), "Speech synthesized");
        Ok(SpeechClip::mp3(audio.to_vec()))
    }

    fn voice(&self) -> &str {
        &self.config.voice_id
    }
}
