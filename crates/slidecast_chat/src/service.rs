//! One question in, one deck appended to the transcript.

use crate::{generate_title, render_transcript, Chat, RenderedTurn, TranscriptRepository};
use slidecast_core::{Role, SlideDeck};
use slidecast_deck::DeckGenerator;
use slidecast_error::{ChatError, ChatErrorKind, JsonError, SlidecastResult};
use slidecast_rate_limit::LanguageModelConfig;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Result of a successful question.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Answer {
    chat: Chat,
    deck: SlideDeck,
}

/// Orchestrates a turn: transcript bookkeeping around deck generation.
#[derive(Clone)]
pub struct ChatService {
    repository: Arc<dyn TranscriptRepository>,
    generator: DeckGenerator,
    config: LanguageModelConfig,
}

impl ChatService {
    /// Wire a service.
    pub fn new(
        repository: Arc<dyn TranscriptRepository>,
        generator: DeckGenerator,
        config: LanguageModelConfig,
    ) -> Self {
        Self {
            repository,
            generator,
            config,
        }
    }

    /// The transcript store.
    pub fn repository(&self) -> &Arc<dyn TranscriptRepository> {
        &self.repository
    }

    /// Ask a question in an existing chat, or a new one when `chat_id` is `None`.
    ///
    /// The question is recorded before generation starts. The deck is
    /// appended as the assistant turn only when generation succeeds.
    ///
    /// # Errors
    ///
    /// [`ChatErrorKind::EmptyQuestion`], [`ChatErrorKind::ChatNotFound`],
    /// and any fatal deck generation error.
    #[instrument(skip(self, question), fields(chat_id))]
    pub async fn ask(&self, chat_id: Option<i64>, question: &str) -> SlidecastResult<Answer> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ChatError::new(ChatErrorKind::EmptyQuestion).into());
        }

        let mut chat = match chat_id {
            Some(id) => self.repository.get_chat(id).await?,
            None => {
                let title = self.title_for(question).await;
                self.repository.create_chat(&title).await?
            }
        };
        tracing::Span::current().record("chat_id", chat.id);

        self.repository
            .append_message(chat.id, Role::User, question)
            .await?;

        if chat.needs_title() {
            chat.title = self.title_for(question).await;
            self.repository.set_title(chat.id, &chat.title).await?;
        }
        self.repository.touch(chat.id).await?;

        let deck = match self.generator.generate(question).await {
            Ok(deck) => deck,
            Err(e) => {
                error!(error = %e, "Deck generation failed");
                return Err(e);
            }
        };

        let text = serde_json::to_string(&deck).map_err(|e| JsonError::new(e.to_string()))?;
        self.repository
            .append_message(chat.id, Role::Assistant, &text)
            .await?;

        let chat = self.repository.get_chat(chat.id).await?;
        info!(deck_id = %deck.id, "Turn complete");
        Ok(Answer { chat, deck })
    }

    /// Chats for the sidebar, most recent first, with display titles.
    pub async fn list_chats(&self) -> SlidecastResult<Vec<Chat>> {
        let chats = self.repository.list_chats().await?;
        Ok(chats
            .into_iter()
            .map(|chat| Chat {
                title: chat.display_title(),
                ..chat
            })
            .collect())
    }

    /// A chat's transcript classified for display.
    pub async fn transcript(&self, chat_id: i64) -> SlidecastResult<Vec<RenderedTurn>> {
        let messages = self.repository.list_messages(chat_id).await?;
        Ok(render_transcript(&messages))
    }

    async fn title_for(&self, question: &str) -> String {
        generate_title(self.generator.model().as_ref(), question, &self.config).await
    }
}
