//! Narration numbering.
//!
//! Every narration unit in a deck gets a global sequence number, starting at
//! 1 and increasing densely in slide order. Within a slide the order is
//! fixed: title before bullets, first image before second. The number is the
//! join key between a revealed element and its audio clip.

use slidecast_core::{ImageUnit, NarratedText, Slide};

/// Slides with sequence numbers assigned, plus the narration to synthesize.
///
/// `narrations[i]` belongs to sequence number `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Linearized {
    /// Numbered slides
    pub slides: Vec<Slide>,
    /// Narration text in sequence order
    pub narrations: Vec<String>,
}

impl Linearized {
    /// Sequence number of the narration at `position`.
    pub fn sequence_of(position: usize) -> u32 {
        position as u32 + 1
    }
}

/// Number one slide starting at `next`.
///
/// Returns the numbered slide, its narrations in unit order and the counter
/// value for the following slide.
///
/// # Examples
///
/// ```
/// use slidecast_core::{NarratedText, Slide};
/// use slidecast_deck::number_slide;
///
/// let slide = Slide::TitleBullets {
///     title: NarratedText::new("Ownership", "Let's talk ownership."),
///     bullets: vec![
///         NarratedText::new("Move", "Values move."),
///         NarratedText::new("Borrow", "Or are borrowed."),
///         NarratedText::new("Drop", "Then dropped."),
///     ],
/// };
///
/// let (numbered, narrations, next) = number_slide(slide, 4);
/// assert_eq!(numbered.sequence_numbers(), vec![Some(4), Some(5), Some(6), Some(7)]);
/// assert_eq!(narrations.len(), 4);
/// assert_eq!(next, 8);
/// ```
pub fn number_slide(slide: Slide, next: u32) -> (Slide, Vec<String>, u32) {
    match slide {
        Slide::Statement {
            statement,
            narration,
            ..
        } => (
            Slide::Statement {
                statement,
                narration: narration.clone(),
                mp3: Some(next),
            },
            vec![narration],
            next + 1,
        ),
        Slide::TitleBullets { title, bullets } => {
            let mut narrations = Vec::with_capacity(bullets.len() + 1);
            let (title, mut counter) = number_text(title, next, &mut narrations);
            let bullets = bullets
                .into_iter()
                .map(|bullet| {
                    let (bullet, after) = number_text(bullet, counter, &mut narrations);
                    counter = after;
                    bullet
                })
                .collect();
            (Slide::TitleBullets { title, bullets }, narrations, counter)
        }
        Slide::MiddleImage {
            image_description,
            image_url,
            narration,
            ..
        } => (
            Slide::MiddleImage {
                image_description,
                image_url,
                narration: narration.clone(),
                mp3: Some(next),
            },
            vec![narration],
            next + 1,
        ),
        Slide::SideBySideImages {
            first_image_description,
            second_image_description,
        } => {
            let first = number_image(first_image_description, next);
            let second = number_image(second_image_description, next + 1);
            let narrations = vec![first.narration.clone(), second.narration.clone()];
            (
                Slide::SideBySideImages {
                    first_image_description: first,
                    second_image_description: second,
                },
                narrations,
                next + 2,
            )
        }
    }
}

fn number_text(text: NarratedText, next: u32, narrations: &mut Vec<String>) -> (NarratedText, u32) {
    narrations.push(text.narration.clone());
    (
        NarratedText {
            mp3: Some(next),
            ..text
        },
        next + 1,
    )
}

fn number_image(unit: ImageUnit, next: u32) -> ImageUnit {
    ImageUnit {
        mp3: Some(next),
        ..unit
    }
}

/// Number every unit of `slides` and collect their narrations.
///
/// Any sequence numbers already present are overwritten.
pub fn linearize(slides: Vec<Slide>) -> Linearized {
    let (slides, narrations, _) = slides.into_iter().fold(
        (Vec::new(), Vec::new(), 1u32),
        |(mut numbered, mut narrations, next), slide| {
            let (slide, slide_narrations, after) = number_slide(slide, next);
            numbered.push(slide);
            narrations.extend(slide_narrations);
            (numbered, narrations, after)
        },
    );

    tracing::debug!(
        slides = slides.len(),
        units = narrations.len(),
        "Assigned narration sequence numbers"
    );
    Linearized { slides, narrations }
}
