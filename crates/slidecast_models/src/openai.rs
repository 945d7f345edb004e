//! OpenAI-compatible chat completions client.

use crate::http::{check_status, invalid_response, request_failed};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use slidecast_core::{GenerateRequest, GenerateResponse, Message};
use slidecast_error::{ProviderError, ProviderErrorKind, SlidecastResult};
use slidecast_interface::LanguageModel;
use slidecast_rate_limit::{LanguageModelConfig, api_key_from_env};
use tracing::{debug, instrument};

/// `response_format` field of a chat completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseFormat {
    /// `json_object` or `text`
    #[serde(rename = "type")]
    pub kind: String,
}

/// Chat completion request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// Conversation
    pub messages: Vec<Message>,
    /// Completion token limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Output format constraint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

/// Message inside a completion choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceMessage {
    /// Generated text; absent for refusals and tool calls
    #[serde(default)]
    pub content: Option<String>,
}

/// One completion choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Generated message
    pub message: ChoiceMessage,
}

/// Chat completion response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    /// Model that answered
    #[serde(default)]
    pub model: Option<String>,
    /// Completion choices
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl ChatCompletionResponse {
    /// Text of the first choice.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderErrorKind::EmptyResponse`] when there is no choice
    /// or the first choice has no content.
    pub fn into_generate_response(self) -> Result<GenerateResponse, ProviderError> {
        let text = self
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                ProviderError::new(ProviderErrorKind::EmptyResponse("openai".to_string()))
            })?;
        Ok(GenerateResponse {
            text,
            model: self.model,
        })
    }
}

/// Client for `POST {base_url}/v1/chat/completions`.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct OpenAiClient {
    #[getter(skip)]
    client: reqwest::Client,
    #[getter(skip)]
    api_key: String,
    config: LanguageModelConfig,
}

impl OpenAiClient {
    /// Create a client with an explicit API key.
    #[instrument(skip(api_key, config), fields(base_url = %config.base_url, model = %config.model))]
    pub fn new(api_key: impl Into<String>, config: LanguageModelConfig) -> Self {
        debug!("Creating chat completions client");
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
    pub fn from_config(config: LanguageModelConfig) -> SlidecastResult<Self> {
        let api_key = api_key_from_env(&config.api_key_env)?;
        Ok(Self::new(api_key, config))
    }

    /// Request body for `req`, with configured defaults filled in.
    pub fn request_body(&self, req: &GenerateRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: req.model.clone().unwrap_or_else(|| self.config.model.clone()),
            messages: req.messages.clone(),
            max_tokens: req.max_tokens.or(Some(self.config.max_tokens)),
            temperature: req.temperature,
            response_format: req.json_mode.then(|| ResponseFormat {
                kind: "json_object".to_string(),
            }),
        }
    }

    /// Build the HTTP request without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderErrorKind::ApiRequest`] if the URL is invalid.
    pub fn build_request(
        &self,
        req: &GenerateRequest,
    ) -> Result<reqwest::Request, ProviderError> {
        let url = format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        self.client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(req))
            .build()
            .map_err(request_failed)
    }
}

#[async_trait]
impl LanguageModel for OpenAiClient {
    #[instrument(skip(self, req), fields(provider = "openai", messages = req.messages.len()))]
    async fn generate(&self, req: &GenerateRequest) -> SlidecastResult<GenerateResponse> {
        let request = self.build_request(req)?;
        debug!(url = %request.url(), "Sending chat completion request");

        let response = self.client.execute(request).await.map_err(request_failed)?;
        let response = check_status(response).await?;
        let body: ChatCompletionResponse = response.json().await.map_err(invalid_response)?;

        debug!("Chat completion successful");
        Ok(body.into_generate_response()?)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
