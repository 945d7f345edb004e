//! Message-only error types.
//!
//! These errors carry a free-form message plus the source location where they
//! were raised. They cover concerns that have no interesting sub-kinds.

macro_rules! message_error {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
        #[display("{}: {} at line {} in {}", $label, message, line, file)]
        pub struct $name {
            /// Human-readable description of the failure
            pub message: String,
            /// Line number where the error was raised
            pub line: u32,
            /// File where the error was raised
            pub file: &'static str,
        }

        impl $name {
            /// Create the error at the caller's location.
            #[track_caller]
            pub fn new(message: impl Into<String>) -> Self {
                let location = std::panic::Location::caller();
                Self {
                    message: message.into(),
                    line: location.line(),
                    file: location.file(),
                }
            }
        }
    };
}

message_error!(
    /// Transport-level HTTP failure (connection refused, timeout, TLS).
    ///
    /// # Examples
    ///
    /// ```
    /// use slidecast_error::HttpError;
    ///
    /// let err = HttpError::new("connection refused");
    /// assert!(err.to_string().starts_with("HTTP Error: connection refused"));
    /// ```
    HttpError,
    "HTTP Error"
);

message_error!(
    /// JSON serialization or deserialization failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidecast_error::JsonError;
    ///
    /// let err = JsonError::new("expected value at line 1 column 1");
    /// assert!(err.message.contains("expected value"));
    /// ```
    JsonError,
    "JSON Error"
);

message_error!(
    /// Configuration could not be loaded or is invalid.
    ConfigError,
    "Configuration Error"
);

message_error!(
    /// Catch-all failure inside an in-process backend (repository, task).
    BackendError,
    "Backend Error"
);
