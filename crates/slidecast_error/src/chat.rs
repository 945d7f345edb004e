//! Conversation errors.

/// Conversation-level failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ChatErrorKind {
    /// No chat with this id exists
    #[display("Chat {} not found", _0)]
    ChatNotFound(i64),
    /// The submitted question was empty or whitespace
    #[display("Question is empty")]
    EmptyQuestion,
}

/// Chat error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Chat Error: {} at line {} in {}", kind, line, file)]
pub struct ChatError {
    /// The specific error condition
    pub kind: ChatErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ChatError {
    /// Create a new chat error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ChatErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
