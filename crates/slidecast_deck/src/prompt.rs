//! Prompt construction for slide generation.

use slidecast_core::{GenerateRequest, Message};
use slidecast_rate_limit::LanguageModelConfig;

/// Instructions describing the four slide templates and narration rules.
pub const SYSTEM_PROMPT: &str = r#"You generate the JSON for a narrated slideshow that teaches the concept in the user's question. Get straight to the point with no introduction or conclusion, keep slides concise, and assume the user has general background knowledge.

Respond with a JSON object of the form {"slides": [...]} where every slide uses one of these templates:

{ "type": "statement", "statement": string, "narration": string }
  text in the center of the slide

{ "type": "title-bullets", "title": { "value": string, "narration": string }, "bullets": [ { "value": string, "narration": string } ] }
  a title with bullets underneath

{ "type": "middle-image", "imageDescription": string, "narration": string }
  one image in the center of the slide

{ "type": "side-by-side-images", "firstImageDescription": { "value": string, "narration": string }, "secondImageDescription": { "value": string, "narration": string } }
  two equally sized images side by side

Narration rules:
- An AI voice reads the narration aloud. Every slide starts blank and each element (the title, each bullet, each image, the statement) appears when its own narration starts, so write each narration for the element it belongs to.
- Do not repeat the narration as slide text unless necessary. Slides are a visual aid, not a transcript.
- Image descriptions are used as image search queries, so make them concrete.
- Choose the template that best fits each part of the narration."#;

/// Build the completion request for `question`.
///
/// # Examples
///
/// ```
/// use slidecast_deck::slide_request;
/// use slidecast_rate_limit::LanguageModelConfig;
///
/// let request = slide_request("How do lifetimes work?", &LanguageModelConfig::default());
/// assert_eq!(request.messages.len(), 2);
/// assert_eq!(request.model.as_deref(), Some("gpt-4o"));
/// assert_eq!(request.max_tokens, Some(4095));
/// assert!(request.json_mode);
/// ```
pub fn slide_request(question: &str, config: &LanguageModelConfig) -> GenerateRequest {
    GenerateRequest::new(vec![Message::system(SYSTEM_PROMPT), Message::user(question)])
        .with_model(config.model.clone())
        .with_max_tokens(config.max_tokens)
        .with_json_mode(config.json_mode)
}
