//! Conversation participant roles.

use serde::{Deserialize, Serialize};

/// Who authored a turn.
///
/// The declaration order is also the tie-break order when two transcript
/// turns share a timestamp: a user turn sorts before the assistant's answer.
///
/// # Examples
///
/// ```
/// use slidecast_core::Role;
///
/// assert!(Role::User < Role::Assistant);
/// assert_eq!(Role::Assistant.to_string(), "assistant");
/// assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// Instructions to the language model
    System,
    /// The human asking questions
    User,
    /// The presentation generator
    Assistant,
}
