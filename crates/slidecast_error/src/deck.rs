//! Slide deck validation errors.

/// Specific error conditions for slide validation and numbering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DeckErrorKind {
    /// Slide at the given position has no string `type` tag
    #[display("Slide {} has no type tag", _0)]
    MissingSlideType(usize),
    /// Slide at the given position carries a tag outside the four known variants
    #[display("Slide {} has unknown type '{}'", index, found)]
    UnknownSlideType {
        /// Position of the slide in the deck
        index: usize,
        /// The tag that was found
        found: String,
    },
    /// Slide has a known tag but its fields do not match the variant
    #[display("Slide {} is malformed: {}", index, message)]
    MalformedSlide {
        /// Position of the slide in the deck
        index: usize,
        /// Decoder message
        message: String,
    },
    /// The slide list was empty
    #[display("Deck contains no slides")]
    EmptyDeck,
    /// A narration unit has no sequence number where one is required
    #[display("Slide {} has a narration unit without a sequence number", _0)]
    UnassignedSequence(usize),
}

/// Deck error with source location tracking.
///
/// # Examples
///
/// ```
/// use slidecast_error::{DeckError, DeckErrorKind};
///
/// let err = DeckError::new(DeckErrorKind::UnknownSlideType {
///     index: 2,
///     found: "quote".to_string(),
/// });
/// assert!(err.to_string().contains("unknown type 'quote'"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Deck Error: {} at line {} in {}", kind, line, file)]
pub struct DeckError {
    /// The specific error condition
    pub kind: DeckErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl DeckError {
    /// Create a new deck error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DeckErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
