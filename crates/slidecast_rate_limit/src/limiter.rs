//! Rate limiter built on governor and a Tokio semaphore.
//!
//! Request quotas (per minute, per day) use governor's GCRA limiters; the
//! fan-out limit is a semaphore whose permit is held for the duration of one
//! operation.

use crate::Tier;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use slidecast_error::RetryableError;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio_retry2::strategy::{ExponentialBackoff, jitter};
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, warn};

type DirectRateLimiter = GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Enforces the limits of a [`Tier`] on a stream of operations.
///
/// Cloning is cheap and clones share the same quotas and permits, so one
/// limiter can be handed to every unit of a fan-out.
///
/// # Example
///
/// ```
/// use slidecast_rate_limit::{RateLimiter, TierConfig};
///
/// let limiter = RateLimiter::new(TierConfig::fan_out("synthesis", 5));
/// assert_eq!(limiter.available_permits(), 5);
/// let guard = limiter.try_acquire().unwrap();
/// assert_eq!(limiter.available_permits(), 4);
/// drop(guard);
/// assert_eq!(limiter.available_permits(), 5);
/// ```
#[derive(Clone)]
pub struct RateLimiter<T: Tier> {
    inner: Arc<T>,
    rpm_limiter: Option<Arc<DirectRateLimiter>>,
    rpd_limiter: Option<Arc<DirectRateLimiter>>,
    concurrent_semaphore: Arc<Semaphore>,
}

impl<T: Tier> RateLimiter<T> {
    /// Create a limiter enforcing every non-`None` limit of `tier`.
    pub fn new(tier: T) -> Self {
        let rpm_limiter = tier
            .rpm()
            .and_then(NonZeroU32::new)
            .map(|n| Arc::new(GovernorRateLimiter::direct(Quota::per_minute(n))));

        // Daily quota replenishes evenly over the day, with a full day's burst.
        let rpd_limiter = tier.rpd().and_then(NonZeroU32::new).and_then(|n| {
            Quota::with_period(Duration::from_secs(86_400) / n.get())
                .map(|quota| Arc::new(GovernorRateLimiter::direct(quota.allow_burst(n))))
        });

        // A zero limit would park every operation forever.
        let max_concurrent = tier
            .max_concurrent()
            .map(|n| n.max(1) as usize)
            .unwrap_or(Semaphore::MAX_PERMITS);
        let concurrent_semaphore = Arc::new(Semaphore::new(max_concurrent));

        Self {
            inner: Arc::new(tier),
            rpm_limiter,
            rpd_limiter,
            concurrent_semaphore,
        }
    }

    /// The tier this limiter enforces.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Free fan-out slots right now.
    pub fn available_permits(&self) -> usize {
        self.concurrent_semaphore.available_permits()
    }

    /// Wait until every limit admits one more operation.
    ///
    /// The returned guard holds a fan-out slot until dropped.
    pub async fn acquire(&self) -> RateLimiterGuard {
        if let Some(limiter) = &self.rpm_limiter {
            limiter.until_ready().await;
        }
        if let Some(limiter) = &self.rpd_limiter {
            limiter.until_ready().await;
        }

        // The semaphore is never closed, so this only fails on shutdown.
        let permit = self.concurrent_semaphore.clone().acquire_owned().await.ok();

        RateLimiterGuard { _permit: permit }
    }

    /// Admit one operation without waiting, or `None` if any limit would block.
    pub fn try_acquire(&self) -> Option<RateLimiterGuard> {
        if let Some(limiter) = &self.rpm_limiter {
            limiter.check().ok()?;
        }
        if let Some(limiter) = &self.rpd_limiter {
            limiter.check().ok()?;
        }

        let permit = self.concurrent_semaphore.clone().try_acquire_owned().ok()?;
        Some(RateLimiterGuard {
            _permit: Some(permit),
        })
    }

    /// Run `operation` under the limits, retrying transient failures.
    ///
    /// Each attempt acquires its own slot. Errors whose
    /// [`RetryableError::is_retryable`] is false end the loop immediately.
    pub async fn execute<F, Fut, R, E>(&self, operation: F) -> Result<R, E>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<R, E>>,
        E: RetryableError + std::fmt::Display,
    {
        let policy = self.inner.retry_policy();
        let initial_ms = (policy.initial_backoff.as_millis() as u64).max(1);
        let retry_strategy = ExponentialBackoff::from_millis(initial_ms)
            .factor(policy.factor.max(1))
            .max_delay(policy.max_delay)
            .map(jitter)
            .take(policy.max_retries);

        let operation = &operation;
        Retry::spawn(retry_strategy, move || async move {
            let _guard = self.acquire().await;

            match operation().await {
                Ok(value) => Ok(value),
                Err(e) if e.is_retryable() => {
                    warn!(tier = self.inner.name(), "Transient error, will retry: {}", e);
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => {
                    debug!(tier = self.inner.name(), "Permanent error, not retrying: {}", e);
                    Err(RetryError::Permanent(e))
                }
            }
        })
        .await
    }
}

/// Holds one fan-out slot; releases it on drop.
pub struct RateLimiterGuard {
    _permit: Option<OwnedSemaphorePermit>,
}
