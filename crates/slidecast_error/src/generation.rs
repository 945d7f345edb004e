//! Upstream generation errors.
//!
//! Raised when the language model's answer cannot be turned into a list of
//! slides. These are fatal to the turn.

/// Ways a completion can fail to yield slide JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// The model returned no text at all
    #[display("Language model returned no content")]
    EmptyCompletion,
    /// No JSON object or array could be located in the completion
    #[display("No JSON found in completion ({} bytes)", _0)]
    NoJsonFound(usize),
    /// JSON was found but is syntactically invalid
    #[display("Malformed JSON in completion: {}", _0)]
    MalformedJson(String),
    /// JSON object did not carry the slide list under a known key
    #[display("Unrecognized completion envelope with keys [{}]", _0)]
    UnrecognizedEnvelope(String),
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use slidecast_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::EmptyCompletion);
/// assert!(err.to_string().contains("no content"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The specific error condition
    pub kind: GenerationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new generation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
