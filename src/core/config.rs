//! # Executor configuration.
//!
//! Provides [`BatchConfig`], the resolved settings of one `execute` call, and
//! [`BatchOverrides`], a partial record used to override instance defaults per call.
//!
//! ## Resolution order
//! ```text
//! BatchOverrides (per call)  ──►  Batcher defaults  ──►  BatchConfig::default()
//!        (wins)                                             (hardcoded)
//! ```
//!
//! ## Validation
//! - `batch_size = 0` → [`ConfigError::ZeroBatchSize`]
//! - `throttle = 0`   → [`ConfigError::ZeroThrottle`]
//!
//! Validation runs when a [`Batcher`](crate::Batcher) is built and again after
//! overrides are applied, always before any batch work starts.

use std::time::Duration;

use crate::error::ConfigError;
use crate::policies::JitterPolicy;

/// Settings for one batch execution.
///
/// ## Field semantics
/// - `batch_size`: Maximum number of items handed to one handler invocation
/// - `delay_increment`: Delay before the first retry of a batch; doubled on each further retry
/// - `max_retries`: Retries allowed per batch before the whole call fails
/// - `throttle`: Maximum number of batches processed concurrently
/// - `jitter`: Randomization applied to each backoff sleep
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Maximum number of items per batch (must be positive).
    pub batch_size: usize,

    /// Base delay before the first retry of a batch.
    ///
    /// Subsequent retries of the same batch double the previous delay.
    pub delay_increment: Duration,

    /// Maximum number of retries per batch.
    ///
    /// - `0` = a batch reporting unprocessed items fails immediately
    /// - `n` = at most `n + 1` handler invocations per batch
    pub max_retries: u32,

    /// Maximum number of batches in flight at once (must be positive).
    pub throttle: usize,

    /// Jitter applied to backoff sleeps (`None` keeps the exact doubling sequence).
    pub jitter: JitterPolicy,
}

impl BatchConfig {
    /// Checks that the configuration can drive an execution.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }
        if self.throttle == 0 {
            return Err(ConfigError::ZeroThrottle);
        }
        Ok(())
    }

    /// Returns a copy of `self` with every field set in `overrides` replaced.
    ///
    /// The result is validated.
    pub fn merge(&self, overrides: &BatchOverrides) -> Result<BatchConfig, ConfigError> {
        let cfg = BatchConfig {
            batch_size: overrides.batch_size.unwrap_or(self.batch_size),
            delay_increment: overrides.delay_increment.unwrap_or(self.delay_increment),
            max_retries: overrides.max_retries.unwrap_or(self.max_retries),
            throttle: overrides.throttle.unwrap_or(self.throttle),
            jitter: overrides.jitter.unwrap_or(self.jitter),
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

impl Default for BatchConfig {
    /// Default configuration:
    ///
    /// - `batch_size = 25`
    /// - `delay_increment = 100ms`
    /// - `max_retries = 5`
    /// - `throttle = 10`
    /// - `jitter = JitterPolicy::None`
    fn default() -> Self {
        Self {
            batch_size: 25,
            delay_increment: Duration::from_millis(100),
            max_retries: 5,
            throttle: 10,
            jitter: JitterPolicy::None,
        }
    }
}

/// Partial [`BatchConfig`]: unset fields fall back to the executor's defaults.
///
/// # Example
/// ```rust
/// use batchvisor::BatchOverrides;
///
/// let per_call = BatchOverrides::default().batch_size(2).throttle(1);
/// assert_eq!(per_call.batch_size, Some(2));
/// assert_eq!(per_call.max_retries, None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchOverrides {
    pub batch_size: Option<usize>,
    pub delay_increment: Option<Duration>,
    pub max_retries: Option<u32>,
    pub throttle: Option<usize>,
    pub jitter: Option<JitterPolicy>,
}

impl BatchOverrides {
    #[must_use]
    pub fn batch_size(mut self, n: usize) -> Self {
        self.batch_size = Some(n);
        self
    }

    #[must_use]
    pub fn delay_increment(mut self, d: Duration) -> Self {
        self.delay_increment = Some(d);
        self
    }

    #[must_use]
    pub fn max_retries(mut self, n: u32) -> Self {
        self.max_retries = Some(n);
        self
    }

    #[must_use]
    pub fn throttle(mut self, n: usize) -> Self {
        self.throttle = Some(n);
        self
    }

    #[must_use]
    pub fn jitter(mut self, jitter: JitterPolicy) -> Self {
        self.jitter = Some(jitter);
        self
    }
}
