//! # Diagnostic records emitted by the batch executor.
//!
//! The [`EventKind`] enum classifies records across two categories:
//! - **Attempt events**: one handler invocation and what follows it (executed, backoff, completed)
//! - **Terminal failures**: the reason an execution is aborted (max retries, handler error, panic)
//!
//! The [`Event`] struct carries the context of the record: batch index, attempt,
//! retry count, delay and item counts. Events are handed to a
//! [`Logger`](crate::Logger) together with a short message and never influence
//! control flow.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases monotonically.
//! Use `seq` to restore the exact order when records from concurrent batches interleave.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use batchvisor::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::BatchExecuted)
//!     .with_batch(3)
//!     .with_attempt(2)
//!     .with_delay(Duration::from_millis(100))
//!     .with_items(25);
//!
//! assert_eq!(ev.kind, EventKind::BatchExecuted);
//! assert_eq!(ev.batch, Some(3));
//! assert_eq!(ev.delay_ms, Some(100));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::{Duration, SystemTime};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of executor events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Execution events ===
    /// An `execute` call partitioned its items and is about to dispatch batches.
    ///
    /// Sets:
    /// - `items`: total number of input items
    /// - `batches`: number of batches produced
    ExecutionStarted,

    /// Every batch of an `execute` call completed.
    ///
    /// Sets:
    /// - `batches`: number of batches
    /// - `outputs`: number of collected outputs
    ExecutionFinished,

    // === Attempt events ===
    /// The handler returned for one attempt of a batch.
    ///
    /// Sets:
    /// - `batch`: batch index (partition order)
    /// - `attempt`: attempt number (1-based)
    /// - `retry`: retries performed before this attempt
    /// - `delay_ms`: delay slept before this attempt (0 on the first attempt)
    /// - `items`: items handed to the handler
    /// - `unprocessed`: items the extractor reported back
    /// - `batch_items`, `batch_output`: rendered contents, when renderers are attached
    BatchExecuted,

    /// Unprocessed items of a batch will be retried after a delay.
    ///
    /// Sets:
    /// - `batch`, `attempt` (of the attempt that is going to run)
    /// - `retry`: retry number about to run
    /// - `delay_ms`: delay before that attempt
    /// - `items`: items carried into the retry
    BackoffScheduled,

    /// A batch has no unprocessed items left.
    ///
    /// Sets:
    /// - `batch`, `attempt` (last attempt)
    BatchCompleted,

    // === Terminal failures ===
    /// A batch exhausted `max_retries` with items still unprocessed.
    ///
    /// Sets:
    /// - `batch`, `attempt`, `retry`
    /// - `unprocessed`: items left
    MaxRetriesExceeded,

    /// The handler returned an error.
    ///
    /// Sets:
    /// - `batch`, `attempt`
    /// - `reason`: handler error message
    HandlerFailed,

    /// The handler panicked.
    ///
    /// Sets:
    /// - `batch`
    /// - `reason`: panic payload
    HandlerPanicked,
}

impl EventKind {
    /// Short stable label for log lines.
    pub fn as_label(&self) -> &'static str {
        match self {
            EventKind::ExecutionStarted => "execution_started",
            EventKind::ExecutionFinished => "execution_finished",
            EventKind::BatchExecuted => "batch_executed",
            EventKind::BackoffScheduled => "backoff_scheduled",
            EventKind::BatchCompleted => "batch_completed",
            EventKind::MaxRetriesExceeded => "max_retries_exceeded",
            EventKind::HandlerFailed => "handler_failed",
            EventKind::HandlerPanicked => "handler_panicked",
        }
    }
}

/// Executor event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,

    /// Batch index in partition order.
    pub batch: Option<usize>,
    /// Attempt count (starting from 1).
    pub attempt: Option<u32>,
    /// Retries performed so far for the batch.
    pub retry: Option<u32>,
    /// Backoff delay in milliseconds (compact).
    pub delay_ms: Option<u32>,
    /// Number of items involved.
    pub items: Option<usize>,
    /// Number of items reported unprocessed.
    pub unprocessed: Option<usize>,
    /// Number of batches (execution-level events).
    pub batches: Option<usize>,
    /// Number of outputs collected (execution-level events).
    pub outputs: Option<usize>,
    /// Human-readable reason (errors, panic payloads).
    pub reason: Option<Arc<str>>,
    /// Rendered items of one attempt (see [`Unprocessed::describe_items`](crate::Unprocessed::describe_items)).
    pub batch_items: Option<Arc<str>>,
    /// Rendered handler output of one attempt (see [`Unprocessed::describe_output`](crate::Unprocessed::describe_output)).
    pub batch_output: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            batch: None,
            attempt: None,
            retry: None,
            delay_ms: None,
            items: None,
            unprocessed: None,
            batches: None,
            outputs: None,
            reason: None,
            batch_items: None,
            batch_output: None,
        }
    }

    #[inline]
    pub fn with_batch(mut self, index: usize) -> Self {
        self.batch = Some(index);
        self
    }

    #[inline]
    pub fn with_attempt(mut self, n: u32) -> Self {
        self.attempt = Some(n);
        self
    }

    #[inline]
    pub fn with_retry(mut self, n: u32) -> Self {
        self.retry = Some(n);
        self
    }

    /// Attaches a delay (stored as milliseconds).
    #[inline]
    pub fn with_delay(mut self, d: Duration) -> Self {
        let ms = d.as_millis().min(u128::from(u32::MAX)) as u32;
        self.delay_ms = Some(ms);
        self
    }

    #[inline]
    pub fn with_items(mut self, n: usize) -> Self {
        self.items = Some(n);
        self
    }

    #[inline]
    pub fn with_unprocessed(mut self, n: usize) -> Self {
        self.unprocessed = Some(n);
        self
    }

    #[inline]
    pub fn with_batches(mut self, n: usize) -> Self {
        self.batches = Some(n);
        self
    }

    #[inline]
    pub fn with_outputs(mut self, n: usize) -> Self {
        self.outputs = Some(n);
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    #[inline]
    pub fn with_batch_items(mut self, text: impl Into<Arc<str>>) -> Self {
        self.batch_items = Some(text.into());
        self
    }

    #[inline]
    pub fn with_batch_output(mut self, text: impl Into<Arc<str>>) -> Self {
        self.batch_output = Some(text.into());
        self
    }
}
