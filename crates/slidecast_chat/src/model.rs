//! Chats and transcript messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use slidecast_core::Role;

/// Placeholder title given to chats created before their first question.
pub const PLACEHOLDER_TITLE: &str = "New Chat";

/// One conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    /// Chat identifier
    pub id: i64,
    /// Title as generated
    pub title: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last time a question was asked
    pub last_accessed: DateTime<Utc>,
}

impl Chat {
    /// Whether the next question should generate a title.
    pub fn needs_title(&self) -> bool {
        let title = self.title.trim();
        title.is_empty() || title == PLACEHOLDER_TITLE
    }

    /// The title for listings, without quotes or surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use slidecast_chat::Chat;
    ///
    /// let chat = Chat {
    ///     id: 1,
    ///     title: " \"Borrowing in Rust\"\n".to_string(),
    ///     created_at: Utc::now(),
    ///     last_accessed: Utc::now(),
    /// };
    /// assert_eq!(chat.display_title(), "Borrowing in Rust");
    /// ```
    pub fn display_title(&self) -> String {
        self.title.replace('"', "").trim().to_string()
    }
}

/// One turn of a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Message identifier
    pub id: i64,
    /// Owning chat
    pub chat_id: i64,
    /// Author
    pub role: Role,
    /// Question text, serialized deck, or plain answer
    pub text: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Sort turns by time, a user turn before an assistant turn with the same timestamp.
pub fn sort_transcript(messages: &mut [ChatMessage]) {
    messages.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then(a.role.cmp(&b.role))
            .then(a.id.cmp(&b.id))
    });
}
