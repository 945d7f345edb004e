//! Audio-synchronized playback for Slidecast decks.
//!
//! A deck plays one narration clip at a time. When a clip finishes, the
//! cursor moves to the next unit and every unit whose sequence number is at
//! or below the global counter becomes visible.
//!
//! - [`transition`] is the pure `(cursor, event) -> cursor` step.
//! - [`PlaybackEngine`] pairs it with the deck's audio and reports what to play.
//! - [`PlaybackSession`] runs an engine on its own task behind a queue.
//!
//! # Examples
//!
//! ```
//! use slidecast_core::{AudioAsset, NarratedText, Slide, SlideDeck};
//! use slidecast_playback::{Playback, PlaybackEngine};
//!
//! let mut title = NarratedText::new("Ownership", "Let's talk ownership.");
//! title.mp3 = Some(1);
//! let mut bullet = NarratedText::new("One owner", "Each value has one owner.");
//! bullet.mp3 = Some(2);
//!
//! let deck = SlideDeck {
//!     id: "deck".into(),
//!     slides: vec![Slide::TitleBullets { title, bullets: vec![bullet] }],
//!     audio: vec![AudioAsset::new(1, "a.mp3"), AudioAsset::new(2, "b.mp3")],
//! };
//!
//! let mut engine = PlaybackEngine::new(deck);
//! assert!(engine.start().is_play());
//! assert_eq!(engine.unit_finished(), Playback::Play { sequence: 2, path: "b.mp3".into() });
//! assert_eq!(engine.unit_finished(), Playback::Ended);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod audio;
mod cursor;
mod engine;
mod frame;
mod layout;
mod session;

pub use audio::AudioIndex;
pub use cursor::{Cursor, PlaybackEvent, transition};
pub use engine::{Playback, PlaybackEngine};
pub use frame::{ElementContent, Frame, FrameElement};
pub use layout::DeckLayout;
pub use session::PlaybackSession;
