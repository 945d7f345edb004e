//! Per-deck unit layout.

use slidecast_core::SlideDeck;

/// Sequence numbers of every unit, grouped by slide.
///
/// Computed once per deck so transitions never walk the slide contents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeckLayout {
    slides: Vec<Vec<Option<u32>>>,
}

impl DeckLayout {
    /// Build the layout of `deck`.
    pub fn new(deck: &SlideDeck) -> Self {
        Self {
            slides: deck.slides.iter().map(|s| s.sequence_numbers()).collect(),
        }
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Number of narration units on slide `slide`, zero when out of range.
    pub fn units_in(&self, slide: usize) -> usize {
        self.slides.get(slide).map_or(0, Vec::len)
    }

    /// Sequence number assigned at a position, if any.
    pub fn sequence_at(&self, slide: usize, unit: usize) -> Option<u32> {
        self.slides.get(slide)?.get(unit).copied().flatten()
    }

    /// Whether the position is the last unit of the last slide.
    pub fn is_final(&self, slide: usize, unit: usize) -> bool {
        !self.slides.is_empty()
            && slide + 1 >= self.slides.len()
            && unit + 1 >= self.units_in(slide)
    }

    /// The last position in the deck.
    pub fn final_position(&self) -> (usize, usize) {
        let slide = self.slides.len().saturating_sub(1);
        (slide, self.units_in(slide).saturating_sub(1))
    }

    /// Highest sequence number assigned anywhere in the deck.
    pub fn max_sequence(&self) -> Option<u32> {
        self.slides.iter().flatten().flatten().copied().max()
    }

    /// The furthest position whose sequence number does not exceed `sequence`.
    pub fn position_of(&self, sequence: u32) -> Option<(usize, usize)> {
        let mut found = None;
        for (slide, units) in self.slides.iter().enumerate() {
            for (unit, assigned) in units.iter().enumerate() {
                match assigned {
                    Some(n) if *n <= sequence => found = Some((slide, unit)),
                    Some(_) => return found,
                    None => {}
                }
            }
        }
        found
    }
}
