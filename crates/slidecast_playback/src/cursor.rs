//! Playback cursor and its transition function.

use crate::DeckLayout;

/// Position of playback within a deck.
///
/// `slide` and `unit` locate the narration unit on screen; `global` is the
/// sequence number of the clip being played. Visibility of every unit is a
/// function of `global` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    slide: usize,
    unit: usize,
    global: u32,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::start()
    }
}

impl Cursor {
    /// Slide 0, unit 0, global unit 1.
    pub fn start() -> Self {
        Self {
            slide: 0,
            unit: 0,
            global: 1,
        }
    }

    /// End state with every unit revealed, used for decks shown from history.
    pub fn fully_revealed(layout: &DeckLayout) -> Self {
        let (slide, unit) = layout.final_position();
        Self {
            slide,
            unit,
            global: layout.max_sequence().unwrap_or(1).max(1),
        }
    }

    /// Current slide index.
    pub fn slide(&self) -> usize {
        self.slide
    }

    /// Current unit index within the slide.
    pub fn unit(&self) -> usize {
        self.unit
    }

    /// Current global unit number.
    pub fn global(&self) -> u32 {
        self.global
    }

    /// Whether a unit with the given sequence number is visible.
    ///
    /// Units without a sequence number are never revealed.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidecast_playback::Cursor;
    ///
    /// let cursor = Cursor::start();
    /// assert!(cursor.is_revealed(Some(1)));
    /// assert!(!cursor.is_revealed(Some(2)));
    /// assert!(!cursor.is_revealed(None));
    /// ```
    pub fn is_revealed(&self, sequence: Option<u32>) -> bool {
        sequence.is_some_and(|k| self.global >= k)
    }

    /// Move forward to `target`, clamped to the deck's last sequence number.
    ///
    /// Targets at or behind the current global unit leave the cursor unchanged.
    pub fn seek(self, target: u32, layout: &DeckLayout) -> Self {
        let Some(last) = layout.max_sequence() else {
            return self;
        };
        let target = target.min(last);
        if target <= self.global {
            return self;
        }
        match layout.position_of(target) {
            Some((slide, unit)) => Self {
                slide,
                unit,
                global: target,
            },
            None => self,
        }
    }

    /// Sequence number the slide position points at, if the deck assigns one.
    pub fn slide_sequence(&self, layout: &DeckLayout) -> Option<u32> {
        layout.sequence_at(self.slide, self.unit)
    }
}

/// Events that move the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaybackEvent {
    /// The current clip finished playing
    #[display("unit finished")]
    UnitFinished,
    /// Manual move to a global unit number
    #[display("seek to {}", _0)]
    Seek(u32),
}

/// Compute the next cursor.
///
/// A finished unit always moves the slide position to the next unit (or the
/// first unit of the next slide, clamped to the last slide). The global
/// counter moves with it but never past `last_audio`, the highest clip index
/// available; with no audio at all it holds. Finishing the last unit of the
/// deck leaves the cursor unchanged.
///
/// # Examples
///
/// ```
/// use slidecast_core::{Slide, SlideDeck};
/// use slidecast_playback::{transition, Cursor, DeckLayout, PlaybackEvent};
///
/// let statement = |n| Slide::Statement {
///     statement: format!("s{n}"),
///     narration: format!("n{n}"),
///     mp3: Some(n),
/// };
/// let deck = SlideDeck { id: "d".into(), slides: vec![statement(1), statement(2)], audio: vec![] };
/// let layout = DeckLayout::new(&deck);
///
/// let next = transition(Cursor::start(), PlaybackEvent::UnitFinished, &layout, Some(2));
/// assert_eq!((next.slide(), next.unit(), next.global()), (1, 0, 2));
///
/// let held = transition(Cursor::start(), PlaybackEvent::UnitFinished, &layout, Some(1));
/// assert_eq!((held.slide(), held.unit(), held.global()), (1, 0, 1));
///
/// let end = transition(next, PlaybackEvent::UnitFinished, &layout, Some(2));
/// assert_eq!(end, next);
/// ```
pub fn transition(
    cursor: Cursor,
    event: PlaybackEvent,
    layout: &DeckLayout,
    last_audio: Option<u32>,
) -> Cursor {
    match event {
        PlaybackEvent::UnitFinished => {
            if layout.is_final(cursor.slide, cursor.unit) {
                return cursor;
            }
            let (slide, unit) = if cursor.unit + 1 >= layout.units_in(cursor.slide) {
                (
                    (cursor.slide + 1).min(layout.slide_count().saturating_sub(1)),
                    0,
                )
            } else {
                (cursor.slide, cursor.unit + 1)
            };
            let global = match last_audio {
                Some(last) => (cursor.global + 1).min(last).max(cursor.global),
                None => cursor.global,
            };
            Cursor {
                slide,
                unit,
                global,
            }
        }
        PlaybackEvent::Seek(target) => cursor.seek(target, layout),
    }
}
