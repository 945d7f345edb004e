//! Tier trait describing the limits of one outbound fan-out.

use std::time::Duration;

/// Backoff settings for retrying transient failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Delay before the first retry
    pub initial_backoff: Duration,
    /// Multiplier applied to each subsequent delay
    pub factor: u64,
    /// Upper bound on any single delay
    pub max_delay: Duration,
    /// Number of retries after the first attempt
    pub max_retries: usize,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial_backoff: Duration::from_millis(2000),
            factor: 2,
            max_delay: Duration::from_secs(60),
            max_retries: 5,
        }
    }
}

/// Rate limiting constraints for an outbound service.
///
/// All limits return `Option` where `None` means unlimited.
///
/// # Example
///
/// ```
/// use slidecast_rate_limit::Tier;
///
/// struct FiveAtATime;
///
/// impl Tier for FiveAtATime {
///     fn rpm(&self) -> Option<u32> { None }
///     fn rpd(&self) -> Option<u32> { None }
///     fn max_concurrent(&self) -> Option<u32> { Some(5) }
///     fn name(&self) -> &str { "five" }
/// }
///
/// assert_eq!(FiveAtATime.max_concurrent(), Some(5));
/// ```
pub trait Tier: Send + Sync {
    /// Requests per minute limit.
    fn rpm(&self) -> Option<u32>;

    /// Requests per day limit.
    fn rpd(&self) -> Option<u32>;

    /// Maximum simultaneous operations.
    fn max_concurrent(&self) -> Option<u32>;

    /// Name of the tier.
    fn name(&self) -> &str;

    /// How transient failures are retried.
    fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::default()
    }
}
