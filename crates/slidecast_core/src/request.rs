//! Language model request and response types.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single prompt message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Author of the message
    pub role: Role,
    /// Message text
    pub content: String,
}

impl Message {
    /// A system instruction.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// A user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Completion request sent to a language model.
///
/// Optional settings fall back to the client's configured defaults.
///
/// # Examples
///
/// ```
/// use slidecast_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::new(vec![Message::user("What is Rust?")])
///     .with_max_tokens(4095)
///     .with_json_mode(true);
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.max_tokens, Some(4095));
/// assert!(request.model.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct GenerateRequest {
    /// Conversation to complete
    #[setters(skip)]
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    #[setters(strip_option)]
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    #[setters(strip_option)]
    pub temperature: Option<f32>,
    /// Model override
    #[setters(strip_option, into)]
    pub model: Option<String>,
    /// Ask for a JSON object response
    pub json_mode: bool,
}

impl GenerateRequest {
    /// Create a request with default settings.
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            ..Default::default()
        }
    }
}

/// Completion returned by a language model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated text
    pub text: String,
    /// Model that produced it, when reported
    pub model: Option<String>,
}
