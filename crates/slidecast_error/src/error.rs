//! Top-level error wrapper types.

use crate::{
    BackendError, ChatError, ConfigError, DeckError, GenerationError, HttpError, JsonError,
    ProviderError, RetryableError, StorageError,
};

/// Every failure a Slidecast operation can surface.
///
/// # Examples
///
/// ```
/// use slidecast_error::{SlidecastError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: SlidecastError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SlidecastErrorKind {
    /// HTTP transport error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Generic backend error
    #[from(BackendError)]
    Backend(BackendError),
    /// Blob storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// External service error
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Completion could not be turned into slides
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Slide validation error
    #[from(DeckError)]
    Deck(DeckError),
    /// Conversation error
    #[from(ChatError)]
    Chat(ChatError),
}

/// Slidecast error with kind discrimination.
///
/// # Examples
///
/// ```
/// use slidecast_error::{SlidecastResult, ConfigError};
///
/// fn might_fail() -> SlidecastResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Slidecast Error: {}", _0)]
pub struct SlidecastError(Box<SlidecastErrorKind>);

impl SlidecastError {
    /// Create a new error from a kind.
    pub fn new(kind: SlidecastErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SlidecastErrorKind {
        &self.0
    }
}

impl<T> From<T> for SlidecastError
where
    T: Into<SlidecastErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

impl RetryableError for SlidecastError {
    fn is_retryable(&self) -> bool {
        match self.kind() {
            SlidecastErrorKind::Provider(e) => e.is_retryable(),
            SlidecastErrorKind::Http(_) => true,
            _ => false,
        }
    }

    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        match self.kind() {
            SlidecastErrorKind::Provider(e) => e.retry_strategy_params(),
            _ => (2000, 5, 60),
        }
    }
}

/// Result type for Slidecast operations.
pub type SlidecastResult<T> = std::result::Result<T, SlidecastError>;
