//! How transcript turns are displayed.

use crate::ChatMessage;
use serde::{Deserialize, Serialize};
use slidecast_core::{Role, SlideDeck};

/// A transcript turn classified for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RenderedTurn {
    /// A question
    User {
        /// Question text
        text: String,
    },
    /// An assistant turn holding a deck
    Presentation {
        /// The deck
        deck: SlideDeck,
        /// Start playing on display; otherwise show fully revealed
        autoplay: bool,
    },
    /// Any other assistant text
    Text {
        /// Answer text
        text: String,
    },
}

impl RenderedTurn {
    /// Classify a single turn, without autoplay.
    pub fn classify(message: &ChatMessage) -> Self {
        match message.role {
            Role::User => RenderedTurn::User {
                text: message.text.clone(),
            },
            _ => match SlideDeck::from_transcript_text(&message.text) {
                Some(deck) => RenderedTurn::Presentation {
                    deck,
                    autoplay: false,
                },
                None => RenderedTurn::Text {
                    text: message.text.clone(),
                },
            },
        }
    }
}

/// Classify a transcript in order.
///
/// Only a presentation that is the final turn autoplays; every earlier deck
/// renders at its end state.
pub fn render_transcript(messages: &[ChatMessage]) -> Vec<RenderedTurn> {
    let mut turns: Vec<RenderedTurn> = messages.iter().map(RenderedTurn::classify).collect();
    if let Some(RenderedTurn::Presentation { autoplay, .. }) = turns.last_mut() {
        *autoplay = true;
    }
    turns
}
