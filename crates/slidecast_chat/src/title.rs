//! Chat title generation.

use slidecast_core::{GenerateRequest, Message};
use slidecast_interface::LanguageModel;
use slidecast_rate_limit::LanguageModelConfig;

/// Title used when the language model gives nothing back.
pub const FALLBACK_TITLE: &str = "Convo";

/// Completion request asking for a title for `question`.
pub fn title_request(question: &str, config: &LanguageModelConfig) -> GenerateRequest {
    GenerateRequest::new(vec![Message::user(format!(
        "Generate a single sentence short title for the following user query for a chatbot conversation title: {}",
        question
    ))])
    .with_model(config.title_model.clone())
}

/// Ask `model` for a title, falling back to [`FALLBACK_TITLE`].
#[tracing::instrument(skip(model, question, config), fields(model = %config.title_model))]
pub async fn generate_title(
    model: &dyn LanguageModel,
    question: &str,
    config: &LanguageModelConfig,
) -> String {
    match model.generate(&title_request(question, config)).await {
        Ok(response) if !response.text.trim().is_empty() => response.text,
        Ok(_) => FALLBACK_TITLE.to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "Title generation failed");
            FALLBACK_TITLE.to_string()
        }
    }
}
