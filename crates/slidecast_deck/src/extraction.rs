//! Turning a language model completion into validated slides.
//!
//! Completions are noisy: JSON may sit inside a markdown fence or follow a
//! sentence of chatter, strings may carry raw line breaks, and JSON mode
//! forces the slide array into an object envelope whose key varies. Each
//! element is checked against the four known templates before typed
//! decoding so that an unknown shape is reported as such.

use serde_json::Value;
use slidecast_core::{Slide, SlideKind};
use slidecast_error::{
    DeckError, DeckErrorKind, GenerationError, GenerationErrorKind, SlidecastResult,
};
use std::str::FromStr;

/// Object keys that may carry the slide array, checked in order.
pub const ENVELOPE_KEYS: [&str; 3] = ["result", "data", "slides"];

/// Locate the JSON document inside a completion.
///
/// A fenced code block wins; otherwise the first balanced array or object,
/// whichever opens first.
///
/// # Errors
///
/// Returns [`GenerationErrorKind::NoJsonFound`] when neither is present.
///
/// # Examples
///
/// ```
/// use slidecast_deck::extract_json;
///
/// let text = "Sure! Here you go:\n```json\n{\"slides\": []}\n```";
/// assert_eq!(extract_json(text).unwrap(), "{\"slides\": []}");
///
/// let text = "The answer is [1, [2, 3]] and more";
/// assert_eq!(extract_json(text).unwrap(), "[1, [2, 3]]");
/// ```
pub fn extract_json(text: &str) -> Result<&str, GenerationError> {
    if let Some(fenced) = fenced_block(text) {
        return Ok(fenced);
    }

    let (first, second) = match (text.find('['), text.find('{')) {
        (Some(bracket), Some(brace)) if bracket < brace => (('[', ']'), ('{', '}')),
        _ => (('{', '}'), ('[', ']')),
    };

    balanced(text, first.0, first.1)
        .or_else(|| balanced(text, second.0, second.1))
        .ok_or_else(|| {
            tracing::error!(completion_length = text.len(), "No JSON found in completion");
            GenerationError::new(GenerationErrorKind::NoJsonFound(text.len()))
        })
}

fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find("```")?;
    let after_fence = &text[start + 3..];
    let body = after_fence
        .strip_prefix("json")
        .or_else(|| after_fence.strip_prefix("JSON"))
        .unwrap_or(after_fence);
    // A truncated completion may lack the closing fence.
    let end = body.find("```").unwrap_or(body.len());
    let block = body[..end].trim();
    (!block.is_empty()).then_some(block)
}

fn balanced(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Remove every `\r\n`, `\n` and `\r` from `text`.
pub fn strip_line_breaks(text: &str) -> String {
    text.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}

/// Pull the slide array out of a parsed completion.
///
/// Accepts a bare array, or an object carrying the array under one of
/// [`ENVELOPE_KEYS`].
///
/// # Errors
///
/// Returns [`GenerationErrorKind::UnrecognizedEnvelope`] for any other shape.
pub fn unwrap_envelope(value: Value) -> Result<Vec<Value>, GenerationError> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => {
            for key in ENVELOPE_KEYS {
                if let Some(Value::Array(items)) = map.remove(key) {
                    return Ok(items);
                }
            }
            let keys: Vec<&str> = map.keys().map(String::as_str).collect();
            Err(GenerationError::new(
                GenerationErrorKind::UnrecognizedEnvelope(keys.join(", ")),
            ))
        }
        other => Err(GenerationError::new(
            GenerationErrorKind::UnrecognizedEnvelope(json_type_name(&other).to_string()),
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Check one element against the closed set of templates and decode it.
///
/// # Errors
///
/// [`DeckErrorKind::MissingSlideType`] without a string `type`,
/// [`DeckErrorKind::UnknownSlideType`] for a tag outside the four templates,
/// [`DeckErrorKind::MalformedSlide`] when the fields do not fit the tag.
pub fn validate_slide(index: usize, value: Value) -> Result<Slide, DeckError> {
    let tag = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| DeckError::new(DeckErrorKind::MissingSlideType(index)))?;

    SlideKind::from_str(tag).map_err(|_| {
        DeckError::new(DeckErrorKind::UnknownSlideType {
            index,
            found: tag.to_string(),
        })
    })?;

    serde_json::from_value(value).map_err(|e| {
        DeckError::new(DeckErrorKind::MalformedSlide {
            index,
            message: e.to_string(),
        })
    })
}

/// Parse a raw completion into validated, unnumbered slides.
///
/// # Errors
///
/// Generation errors for missing or unparseable JSON, deck errors for
/// invalid slides or an empty list. Either rejects the whole turn.
#[tracing::instrument(skip(completion), fields(completion_length = completion.len()))]
pub fn parse_slides(completion: &str) -> SlidecastResult<Vec<Slide>> {
    if completion.trim().is_empty() {
        return Err(GenerationError::new(GenerationErrorKind::EmptyCompletion).into());
    }

    let json = strip_line_breaks(extract_json(completion)?);
    let value: Value = serde_json::from_str(&json)
        .map_err(|e| GenerationError::new(GenerationErrorKind::MalformedJson(e.to_string())))?;

    let items = unwrap_envelope(value)?;
    if items.is_empty() {
        return Err(DeckError::new(DeckErrorKind::EmptyDeck).into());
    }

    let slides = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| validate_slide(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(slides = slides.len(), "Parsed slides from completion");
    Ok(slides)
}
