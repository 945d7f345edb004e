//! Transcript persistence.

use crate::{Chat, ChatMessage, sort_transcript};
use async_trait::async_trait;
use chrono::Utc;
use slidecast_core::Role;
use slidecast_error::{ChatError, ChatErrorKind, SlidecastResult};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Storage for chats and their messages.
///
/// Implementations own id assignment and timestamps.
#[async_trait]
pub trait TranscriptRepository: Send + Sync {
    /// Create a chat and return it.
    async fn create_chat(&self, title: &str) -> SlidecastResult<Chat>;

    /// Load a chat.
    ///
    /// Unknown ids are [`ChatErrorKind::ChatNotFound`].
    async fn get_chat(&self, id: i64) -> SlidecastResult<Chat>;

    /// All chats, most recently accessed first.
    async fn list_chats(&self) -> SlidecastResult<Vec<Chat>>;

    /// Replace a chat's title.
    async fn set_title(&self, id: i64, title: &str) -> SlidecastResult<()>;

    /// Record that a chat was just used.
    async fn touch(&self, id: i64) -> SlidecastResult<()>;

    /// Append a turn to a chat's transcript.
    async fn append_message(
        &self,
        chat_id: i64,
        role: Role,
        text: &str,
    ) -> SlidecastResult<ChatMessage>;

    /// A chat's transcript in display order.
    async fn list_messages(&self, chat_id: i64) -> SlidecastResult<Vec<ChatMessage>>;
}

#[derive(Debug, Default)]
struct Transcripts {
    chats: HashMap<i64, Chat>,
    messages: Vec<ChatMessage>,
    next_chat_id: i64,
    next_message_id: i64,
}

/// In-memory transcript repository.
///
/// All data is lost when the last clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTranscriptRepository {
    inner: Arc<RwLock<Transcripts>>,
}

impl InMemoryTranscriptRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of chats.
    pub async fn len(&self) -> usize {
        self.inner.read().await.chats.len()
    }

    /// Whether no chat exists.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.chats.is_empty()
    }
}

fn not_found(id: i64) -> slidecast_error::SlidecastError {
    ChatError::new(ChatErrorKind::ChatNotFound(id)).into()
}

#[async_trait]
impl TranscriptRepository for InMemoryTranscriptRepository {
    async fn create_chat(&self, title: &str) -> SlidecastResult<Chat> {
        let mut inner = self.inner.write().await;
        inner.next_chat_id += 1;
        let now = Utc::now();
        let chat = Chat {
            id: inner.next_chat_id,
            title: title.to_string(),
            created_at: now,
            last_accessed: now,
        };
        inner.chats.insert(chat.id, chat.clone());
        tracing::debug!(chat_id = chat.id, "Chat created");
        Ok(chat)
    }

    async fn get_chat(&self, id: i64) -> SlidecastResult<Chat> {
        self.inner
            .read()
            .await
            .chats
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn list_chats(&self) -> SlidecastResult<Vec<Chat>> {
        let mut chats: Vec<Chat> = self.inner.read().await.chats.values().cloned().collect();
        chats.sort_by(|a, b| b.last_accessed.cmp(&a.last_accessed).then(b.id.cmp(&a.id)));
        Ok(chats)
    }

    async fn set_title(&self, id: i64, title: &str) -> SlidecastResult<()> {
        let mut inner = self.inner.write().await;
        let chat = inner.chats.get_mut(&id).ok_or_else(|| not_found(id))?;
        chat.title = title.to_string();
        Ok(())
    }

    async fn touch(&self, id: i64) -> SlidecastResult<()> {
        let mut inner = self.inner.write().await;
        let chat = inner.chats.get_mut(&id).ok_or_else(|| not_found(id))?;
        chat.last_accessed = Utc::now();
        Ok(())
    }

    async fn append_message(
        &self,
        chat_id: i64,
        role: Role,
        text: &str,
    ) -> SlidecastResult<ChatMessage> {
        let mut inner = self.inner.write().await;
        if !inner.chats.contains_key(&chat_id) {
            return Err(not_found(chat_id));
        }
        inner.next_message_id += 1;
        let message = ChatMessage {
            id: inner.next_message_id,
            chat_id,
            role,
            text: text.to_string(),
            created_at: Utc::now(),
        };
        inner.messages.push(message.clone());
        Ok(message)
    }

    async fn list_messages(&self, chat_id: i64) -> SlidecastResult<Vec<ChatMessage>> {
        let inner = self.inner.read().await;
        if !inner.chats.contains_key(&chat_id) {
            return Err(not_found(chat_id));
        }
        let mut messages: Vec<ChatMessage> = inner
            .messages
            .iter()
            .filter(|m| m.chat_id == chat_id)
            .cloned()
            .collect();
        sort_transcript(&mut messages);
        Ok(messages)
    }
}
