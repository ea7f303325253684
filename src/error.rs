//! Error types used by the batch executor.
//!
//! This module defines two error enums:
//!
//! - [`ConfigError`] — invalid options, raised before any batch work begins.
//! - [`BatchError`] — failures of an `execute` call as a whole.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging/metrics.
//! Handler failures are carried as a [`BoxError`] so callers can use any error type.

use thiserror::Error;

/// Boxed error returned by batch handlers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// # Invalid executor configuration.
///
/// Produced by [`BatchConfig::validate`](crate::BatchConfig::validate), by
/// [`Batcher::new`](crate::Batcher::new) and when per-call overrides resolve to
/// an unusable configuration.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `batch_size` must be at least 1.
    #[error("batch size must be positive")]
    ZeroBatchSize,

    /// `throttle` must be at least 1.
    #[error("throttle must be positive")]
    ZeroThrottle,
}

impl ConfigError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use batchvisor::ConfigError;
    ///
    /// assert_eq!(ConfigError::ZeroThrottle.as_label(), "config_zero_throttle");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ConfigError::ZeroBatchSize => "config_zero_batch_size",
            ConfigError::ZeroThrottle => "config_zero_throttle",
        }
    }
}

/// # Errors produced by batch execution.
///
/// Any of these aborts the enclosing `execute` call. Batches already in flight
/// when the first error is observed are allowed to finish; their outputs are
/// discarded and their errors (if any) are not reported a second time.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum BatchError {
    /// A batch still had unprocessed items after `max_retries` retries.
    #[error("max retries exceeded")]
    MaxRetriesExceeded {
        /// Index of the batch in partition order.
        batch: usize,
        /// Number of retries performed before giving up.
        retries: u32,
        /// Number of items still unprocessed.
        remaining: usize,
    },

    /// The handler itself returned an error. Handler errors are never retried.
    #[error("batch {batch} handler failed on attempt {attempt}: {source}")]
    Handler {
        /// Index of the batch in partition order.
        batch: usize,
        /// Attempt number (1-based).
        attempt: u32,
        /// Error returned by the handler.
        #[source]
        source: BoxError,
    },

    /// The handler panicked while processing a batch.
    #[error("batch {batch} handler panicked: {info}")]
    Panicked {
        /// Index of the batch in partition order.
        batch: usize,
        /// Panic payload, if it was a string.
        info: String,
    },

    /// Per-call options resolved to an invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Execution was cancelled through the caller's token.
    #[error("batch execution cancelled")]
    Canceled,
}

impl BatchError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use batchvisor::BatchError;
    ///
    /// let err = BatchError::MaxRetriesExceeded { batch: 0, retries: 5, remaining: 1 };
    /// assert_eq!(err.as_label(), "batch_max_retries_exceeded");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            BatchError::MaxRetriesExceeded { .. } => "batch_max_retries_exceeded",
            BatchError::Handler { .. } => "batch_handler_failed",
            BatchError::Panicked { .. } => "batch_handler_panicked",
            BatchError::Config(e) => e.as_label(),
            BatchError::Canceled => "batch_canceled",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            BatchError::MaxRetriesExceeded {
                batch,
                retries,
                remaining,
            } => format!("batch {batch}: {remaining} item(s) unprocessed after {retries} retries"),
            BatchError::Handler {
                batch,
                attempt,
                source,
            } => format!("batch {batch} attempt {attempt}: {source}"),
            BatchError::Panicked { batch, info } => format!("batch {batch} panicked: {info}"),
            BatchError::Config(e) => format!("config: {e}"),
            BatchError::Canceled => "cancelled".to_string(),
        }
    }

    /// Indicates whether the failed call is worth repeating as a whole.
    ///
    /// The executor retries unprocessed items on its own and never retries
    /// errors, so only handler failures are candidates for a caller-level retry.
    ///
    /// # Example
    /// ```
    /// use batchvisor::{BatchError, ConfigError};
    ///
    /// let err = BatchError::Handler { batch: 0, attempt: 1, source: "boom".into() };
    /// assert!(err.is_retryable());
    ///
    /// let cfg = BatchError::Config(ConfigError::ZeroBatchSize);
    /// assert!(!cfg.is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        matches!(self, BatchError::Handler { .. })
    }
}
