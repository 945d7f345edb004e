//! Values exchanged with collaborators.

use serde::{Deserialize, Serialize};

/// Rendered speech for one narration unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechClip {
    /// Encoded audio bytes
    pub audio: Vec<u8>,
    /// MIME type of the audio, e.g. `audio/mpeg`
    pub content_type: String,
}

impl SpeechClip {
    /// An MP3 clip.
    pub fn mp3(audio: Vec<u8>) -> Self {
        Self {
            audio,
            content_type: "audio/mpeg".to_string(),
        }
    }
}

/// One hit from an image search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageHit {
    /// Full-size image location
    pub original: String,
    /// Page title of the hit, if any
    #[serde(default)]
    pub title: Option<String>,
    /// Thumbnail location, if any
    #[serde(default)]
    pub thumbnail: Option<String>,
}
