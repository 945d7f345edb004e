//! External collaborator errors and retry classification.

/// Failure conditions of a third-party service call (language model, speech,
/// image search).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProviderErrorKind {
    /// API key environment variable is not set
    #[display("{} environment variable not set", _0)]
    MissingApiKey(String),
    /// Request could not be sent or the body could not be read
    #[display("API request failed: {}", _0)]
    ApiRequest(String),
    /// Service answered with a non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason phrase
        message: String,
    },
    /// Service answered successfully but without usable content
    #[display("Empty response from {}", _0)]
    EmptyResponse(String),
    /// Response body did not have the expected shape
    #[display("Invalid response: {}", _0)]
    InvalidResponse(String),
}

impl ProviderErrorKind {
    /// Whether a retry may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderErrorKind::HttpStatus { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            ProviderErrorKind::ApiRequest(_) => true,
            _ => false,
        }
    }

    /// Retry parameters as `(initial_backoff_ms, max_retries, max_delay_secs)`.
    pub fn retry_strategy_params(&self) -> (u64, usize, u64) {
        match self {
            ProviderErrorKind::HttpStatus { status_code, .. } => match *status_code {
                429 => (5000, 3, 40),
                503 => (2000, 5, 60),
                500 | 502 | 504 => (1000, 3, 8),
                408 => (2000, 4, 30),
                _ => (2000, 5, 60),
            },
            ProviderErrorKind::ApiRequest(_) => (1000, 3, 10),
            _ => (2000, 5, 60),
        }
    }
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use slidecast_error::{ProviderError, ProviderErrorKind, RetryableError};
///
/// let err = ProviderError::new(ProviderErrorKind::HttpStatus {
///     status_code: 429,
///     message: "Too Many Requests".to_string(),
/// });
/// assert!(err.is_retryable());
/// assert_eq!(err.retry_strategy_params(), (5000, 3, 40));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new provider error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Errors that know whether they are worth retrying.
///
/// Transient failures (rate limiting, overloaded upstream, dropped
/// connections) return `true`; permanent ones (bad request, bad credentials,
/// malformed content) return `false`.
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    fn is_retryable(&self) -> bool;

    /// Returns `(initial_backoff_ms, max_retries, max_delay_secs)`.
    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        (2000, 5, 60)
    }
}

impl RetryableError for ProviderError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        self.kind.retry_strategy_params()
    }
}
