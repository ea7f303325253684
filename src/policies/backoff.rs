//! # Backoff policy for retrying unprocessed items.
//!
//! [`BackoffPolicy`] controls how the delay between retries of the **same batch**
//! grows. It is parameterized by:
//! - [`BackoffPolicy::increment`] the delay before the first retry;
//! - [`BackoffPolicy::jitter`] the randomization applied to each sleep.
//!
//! The base delay doubles on every retry: `increment, 2·increment, 4·increment, …`.
//! Jitter is applied to the base when sleeping, but the jittered value is never
//! fed back into the next base computation, so delays cannot shrink over time.
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use batchvisor::{BackoffPolicy, JitterPolicy};
//!
//! let backoff = BackoffPolicy {
//!     increment: Duration::from_millis(100),
//!     jitter: JitterPolicy::None,
//! };
//!
//! // First retry — uses 'increment'
//! let d1 = backoff.next(Duration::ZERO);
//! assert_eq!(d1, Duration::from_millis(100));
//!
//! // Later retries double the previous base delay
//! let d2 = backoff.next(d1);
//! assert_eq!(d2, Duration::from_millis(200));
//! assert_eq!(backoff.next(d2), Duration::from_millis(400));
//! ```

use std::time::Duration;

use crate::core::BatchConfig;
use crate::policies::jitter::JitterPolicy;

/// Retry backoff policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackoffPolicy {
    /// Delay before the first retry of a batch.
    pub increment: Duration,
    /// Jitter policy to prevent thundering herd.
    pub jitter: JitterPolicy,
}

impl From<&BatchConfig> for BackoffPolicy {
    fn from(cfg: &BatchConfig) -> Self {
        Self {
            increment: cfg.delay_increment,
            jitter: cfg.jitter,
        }
    }
}

impl BackoffPolicy {
    /// Computes the base delay that follows `prev`.
    ///
    /// `prev == 0` means no retry happened yet and yields [`BackoffPolicy::increment`];
    /// anything else is doubled, saturating at [`Duration::MAX`].
    pub fn next(&self, prev: Duration) -> Duration {
        if prev.is_zero() {
            self.increment
        } else {
            prev.saturating_mul(2)
        }
    }

    /// Returns how long to actually sleep for the given base delay.
    #[inline]
    pub fn sleep_for(&self, base: Duration) -> Duration {
        self.jitter.apply(base)
    }
}
