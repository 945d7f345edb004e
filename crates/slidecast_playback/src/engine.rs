//! Playback engine for a single deck.

use crate::{
    AudioIndex, Cursor, DeckLayout, ElementContent, Frame, FrameElement, PlaybackEvent, transition,
};
use slidecast_core::{AudioAsset, SlideDeck};
use tracing::{debug, info, instrument, warn};

/// What the audio player should do next.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Playback {
    /// Play the clip for `sequence`
    #[display("play {} from {}", sequence, path)]
    Play {
        /// Global unit number
        sequence: u32,
        /// Clip location
        path: String,
    },
    /// No clip exists yet for `sequence`; wait for a refresh or a seek
    #[display("stalled at {}", sequence)]
    Stalled {
        /// Global unit number
        sequence: u32,
    },
    /// Nothing left to play
    #[display("ended")]
    Ended,
}

impl Playback {
    /// Whether this directive plays a clip.
    pub fn is_play(&self) -> bool {
        matches!(self, Playback::Play { .. })
    }
}

/// Drives one deck: owns its cursor and an index over its audio.
///
/// The deck itself is never mutated after load. Events are applied through
/// [`transition`]; the engine only adds audio lookup and logging.
#[derive(Debug, Clone)]
pub struct PlaybackEngine {
    deck: SlideDeck,
    layout: DeckLayout,
    audio: AudioIndex,
    cursor: Cursor,
    last: Option<Playback>,
}

impl PlaybackEngine {
    /// Load a deck with the cursor at the start.
    pub fn new(deck: SlideDeck) -> Self {
        let layout = DeckLayout::new(&deck);
        let audio = AudioIndex::new(&deck.audio);
        Self {
            deck,
            layout,
            audio,
            cursor: Cursor::start(),
            last: None,
        }
    }

    /// Load a deck already at its fully revealed end state.
    pub fn revealed(deck: SlideDeck) -> Self {
        let mut engine = Self::new(deck);
        engine.cursor = Cursor::fully_revealed(&engine.layout);
        engine.last = Some(Playback::Ended);
        engine
    }

    /// The deck being played.
    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    /// Current cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Audio index built from the deck.
    pub fn audio(&self) -> &AudioIndex {
        &self.audio
    }

    /// Most recent directive, if playback has started.
    pub fn last_directive(&self) -> Option<&Playback> {
        self.last.as_ref()
    }

    /// Autoplay the first unit.
    #[instrument(skip(self), fields(deck_id = %self.deck.id))]
    pub fn start(&mut self) -> Playback {
        self.cursor = Cursor::start();
        self.direct()
    }

    /// Apply a "unit audio finished" event.
    ///
    /// `Ended` is reported only after the deck's final unit. When the next
    /// clip has not arrived the engine reports `Stalled` for it and stays
    /// parked until [`refresh_audio`](Self::refresh_audio) or
    /// [`seek`](Self::seek) moves it.
    #[instrument(skip(self), fields(deck_id = %self.deck.id, global = self.cursor.global()))]
    pub fn unit_finished(&mut self) -> Playback {
        match &self.last {
            Some(Playback::Ended) => return Playback::Ended,
            Some(stalled @ Playback::Stalled { .. }) => {
                debug!("Ignoring finish event while stalled");
                return stalled.clone();
            }
            _ => {}
        }
        let before = self.cursor;
        self.cursor = transition(
            before,
            PlaybackEvent::UnitFinished,
            &self.layout,
            self.audio.max_index(),
        );
        if self.cursor == before {
            debug!("No further unit to play");
            self.last = Some(Playback::Ended);
            return Playback::Ended;
        }
        if self.cursor.global() == before.global() {
            let sequence = before.global() + 1;
            info!(sequence, "Next clip not delivered yet, playback stalled");
            let stalled = Playback::Stalled { sequence };
            self.last = Some(stalled.clone());
            return stalled;
        }
        self.check_sync();
        self.direct()
    }

    /// Jump forward to a global unit number and play it.
    #[instrument(skip(self), fields(deck_id = %self.deck.id))]
    pub fn seek(&mut self, target: u32) -> Playback {
        self.cursor = transition(
            self.cursor,
            PlaybackEvent::Seek(target),
            &self.layout,
            self.audio.max_index(),
        );
        self.check_sync();
        self.direct()
    }

    /// Merge clips that arrived after load.
    ///
    /// Returns a new directive when the refresh resumes a stalled position.
    #[instrument(skip(self, assets), fields(deck_id = %self.deck.id, clips = assets.len()))]
    pub fn refresh_audio(&mut self, assets: &[AudioAsset]) -> Option<Playback> {
        self.audio.merge(assets);
        match self.last {
            Some(Playback::Stalled { sequence }) if self.audio.get(sequence).is_some() => {
                info!(sequence, "Resuming stalled playback");
                self.cursor = self.cursor.seek(sequence, &self.layout);
                Some(self.direct())
            }
            _ => None,
        }
    }

    /// The current slide with each element's visibility.
    pub fn frame(&self) -> Option<Frame> {
        let slide = self.deck.slides.get(self.cursor.slide())?;
        let elements = slide
            .units()
            .into_iter()
            .map(|unit| {
                FrameElement::new(
                    unit.element,
                    unit.sequence,
                    self.cursor.is_revealed(unit.sequence),
                    ElementContent::from(unit.content),
                )
            })
            .collect();
        Some(Frame::new(
            self.cursor.slide(),
            slide.kind(),
            self.cursor.global(),
            elements,
        ))
    }

    fn direct(&mut self) -> Playback {
        let sequence = self.cursor.global();
        let directive = match self.audio.get(sequence) {
            Some(path) => {
                debug!(
                    sequence,
                    slide = self.cursor.slide(),
                    unit = self.cursor.unit(),
                    "Playing unit"
                );
                Playback::Play {
                    sequence,
                    path: path.to_string(),
                }
            }
            None => {
                info!(sequence, "No audio for unit, playback stalled");
                Playback::Stalled { sequence }
            }
        };
        self.last = Some(directive.clone());
        directive
    }

    fn check_sync(&self) {
        if let Some(expected) = self.cursor.slide_sequence(&self.layout) {
            if expected != self.cursor.global() {
                warn!(
                    slide = self.cursor.slide(),
                    unit = self.cursor.unit(),
                    expected,
                    global = self.cursor.global(),
                    "Slide position out of step with global unit number"
                );
            }
        }
    }
}
