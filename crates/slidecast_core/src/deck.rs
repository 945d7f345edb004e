//! Slide decks and their audio association list.

use crate::Slide;
use serde::{Deserialize, Serialize};

/// A rendered narration clip, addressed by global sequence number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AudioAsset {
    /// Global sequence number of the narration unit
    pub index: u32,
    /// URL or storage path of the clip
    pub path: String,
}

impl AudioAsset {
    /// Create an audio asset.
    pub fn new(index: u32, path: impl Into<String>) -> Self {
        Self {
            index,
            path: path.into(),
        }
    }
}

/// One generated presentation: slides plus the audio rendered for them.
///
/// The audio list is sparse and unordered on the wire; consumers should
/// index it once at load time.
///
/// # Examples
///
/// ```
/// use slidecast_core::{AudioAsset, Slide, SlideDeck};
///
/// let deck = SlideDeck {
///     id: "deck-1".to_string(),
///     slides: vec![Slide::Statement {
///         statement: "Hello".to_string(),
///         narration: "Hello there".to_string(),
///         mp3: Some(1),
///     }],
///     audio: vec![AudioAsset::new(1, "deck-1/output1.mp3")],
/// };
///
/// let json = serde_json::to_string(&deck).unwrap();
/// assert!(json.contains("\"audioS3Files\""));
/// assert_eq!(deck.unit_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideDeck {
    /// Deck identifier
    pub id: String,
    /// Slides in presentation order
    pub slides: Vec<Slide>,
    /// Sparse audio association list
    #[serde(rename = "audioS3Files", default)]
    pub audio: Vec<AudioAsset>,
}

impl SlideDeck {
    /// Total number of narration units across all slides.
    pub fn unit_count(&self) -> usize {
        self.slides.iter().map(Slide::unit_count).sum()
    }

    /// Every unit's sequence number, in deck order.
    pub fn sequence_numbers(&self) -> Vec<Option<u32>> {
        self.slides
            .iter()
            .flat_map(|slide| slide.sequence_numbers())
            .collect()
    }

    /// Try to read an assistant turn as a deck.
    ///
    /// Returns `None` for anything that is not the deck JSON shape.
    pub fn from_transcript_text(text: &str) -> Option<Self> {
        serde_json::from_str(text).ok()
    }
}
