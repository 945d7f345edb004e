//! Index over a deck's audio association list.

use slidecast_core::AudioAsset;
use std::collections::HashMap;

/// O(1) lookup from global sequence number to clip location.
///
/// Decks written by older generators numbered their clips from 0 while the
/// slides were numbered from 1. Such lists are recognised by the presence of
/// index 0 and shifted up by one when loaded, so an index always equals the
/// sequence number of the unit it narrates.
///
/// # Examples
///
/// ```
/// use slidecast_core::AudioAsset;
/// use slidecast_playback::AudioIndex;
///
/// let index = AudioIndex::new(&[AudioAsset::new(2, "b.mp3"), AudioAsset::new(1, "a.mp3")]);
/// assert_eq!(index.get(1), Some("a.mp3"));
/// assert_eq!(index.get(3), None);
/// assert_eq!(index.max_index(), Some(2));
///
/// let legacy = AudioIndex::new(&[AudioAsset::new(0, "first.mp3"), AudioAsset::new(1, "second.mp3")]);
/// assert!(legacy.was_shifted());
/// assert_eq!(legacy.get(1), Some("first.mp3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AudioIndex {
    paths: HashMap<u32, String>,
    shifted: bool,
}

impl AudioIndex {
    /// Index an association list.
    pub fn new(assets: &[AudioAsset]) -> Self {
        let shifted = assets.iter().any(|a| a.index == 0);
        if shifted {
            tracing::debug!(clips = assets.len(), "Shifting zero-based audio list");
        }
        let mut index = Self {
            paths: HashMap::with_capacity(assets.len()),
            shifted,
        };
        index.merge(assets);
        index
    }

    /// Add clips that arrived after load. Existing entries are replaced.
    pub fn merge(&mut self, assets: &[AudioAsset]) {
        let offset = u32::from(self.shifted);
        for asset in assets {
            self.paths.insert(asset.index + offset, asset.path.clone());
        }
    }

    /// Clip for a sequence number.
    pub fn get(&self, sequence: u32) -> Option<&str> {
        self.paths.get(&sequence).map(String::as_str)
    }

    /// Highest sequence number with a clip.
    pub fn max_index(&self) -> Option<u32> {
        self.paths.keys().copied().max()
    }

    /// Number of clips.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether there are no clips.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Whether the list was zero-based and has been shifted.
    pub fn was_shifted(&self) -> bool {
        self.shifted
    }
}
