//! # Batcher: throttled batch execution with retry of unprocessed items.
//!
//! The [`Batcher`] holds resolved default options and a [`Logger`]. Each call to
//! [`Batcher::execute`] partitions its items, runs the handler over every batch
//! with at most `throttle` batches in flight, and retries the items the handler
//! reports as unprocessed with exponential backoff.
//!
//! ## High-level flow
//! ```text
//! execute(items, handler, unprocessed, overrides)
//!   ├─► cfg = defaults.merge(overrides)            (ConfigError → fail before any work)
//!   ├─► batches = partition(items, cfg.batch_size)
//!   ├─► logger.debug(ExecutionStarted)
//!   └─► Schedule::run(batches)
//!          ├─ BatchActor #0 ─┐
//!          ├─ BatchActor #1 ─┼──► Outputs (shared, append-only)
//!          └─ BatchActor #N ─┘
//!       ──► Ok(outputs) | Err(first failure)
//! ```
//!
//! ## Example
//! ```rust
//! use batchvisor::{BatchConfig, BatchOverrides, Batcher, BoxError, HandlerFn, Unprocessed};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let batcher = Batcher::new(BatchConfig::default())?;
//!
//!     let sums = batcher
//!         .execute(
//!             (1..=10u32).collect(),
//!             HandlerFn::new(|batch: Vec<u32>| async move {
//!                 Ok::<_, BoxError>(batch.iter().sum::<u32>())
//!             }),
//!             Unprocessed::none(),
//!             BatchOverrides::default().batch_size(5),
//!         )
//!         .await?;
//!
//!     assert_eq!(sums.len(), 2);
//!     assert_eq!(sums.iter().sum::<u32>(), 55);
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::{
    batches::{BatchHandler, HandlerRef, Unprocessed, partition},
    core::{
        builder::BatcherBuilder,
        config::{BatchConfig, BatchOverrides},
        scheduler::Schedule,
    },
    error::{BatchError, ConfigError},
    events::{Event, EventKind},
    loggers::{Logger, TracingLogger},
};

/// Executes handlers over batches of items with throttling and retries.
#[derive(Clone)]
pub struct Batcher {
    cfg: BatchConfig,
    logger: Arc<dyn Logger>,
}

impl Batcher {
    /// Creates a batcher with the default [`TracingLogger`].
    pub fn new(cfg: BatchConfig) -> Result<Self, ConfigError> {
        Self::builder(cfg).build()
    }

    /// Returns a builder to customize the logger.
    pub fn builder(cfg: BatchConfig) -> BatcherBuilder {
        BatcherBuilder::new(cfg)
    }

    pub(crate) fn new_internal(cfg: BatchConfig, logger: Arc<dyn Logger>) -> Self {
        Self { cfg, logger }
    }

    /// Instance-level defaults applied to every call.
    pub fn config(&self) -> &BatchConfig {
        &self.cfg
    }

    /// Logger receiving execution events.
    pub fn logger(&self) -> &Arc<dyn Logger> {
        &self.logger
    }

    /// Processes `items` in throttled batches.
    ///
    /// `unprocessed` extracts the items of an output that must be retried;
    /// pass [`Unprocessed::none`] when every invocation fully processes its batch.
    /// `overrides` replace instance defaults for this call only.
    ///
    /// Returns one output per handler invocation (retries included), in no
    /// particular order across batches.
    ///
    /// # Errors
    /// - [`BatchError::Config`] if the merged options are invalid (no batch runs)
    /// - [`BatchError::MaxRetriesExceeded`] if a batch keeps reporting unprocessed items
    /// - [`BatchError::Handler`] / [`BatchError::Panicked`] if the handler fails
    pub async fn execute<I, O, H>(
        &self,
        items: Vec<I>,
        handler: H,
        unprocessed: Unprocessed<I, O>,
        overrides: BatchOverrides,
    ) -> Result<Vec<O>, BatchError>
    where
        I: Send + 'static,
        O: Send + 'static,
        H: BatchHandler<I, O>,
    {
        self.execute_with_cancel(
            items,
            handler,
            unprocessed,
            overrides,
            CancellationToken::new(),
        )
        .await
    }

    /// Same as [`Batcher::execute`], stopping early when `token` is cancelled.
    ///
    /// Cancellation is observed while a batch waits for a throttle slot or sleeps
    /// before a retry; handler invocations already running are not interrupted.
    /// A cancelled execution fails with [`BatchError::Canceled`] unless another
    /// batch failed first.
    pub async fn execute_with_cancel<I, O, H>(
        &self,
        items: Vec<I>,
        handler: H,
        unprocessed: Unprocessed<I, O>,
        overrides: BatchOverrides,
        token: CancellationToken,
    ) -> Result<Vec<O>, BatchError>
    where
        I: Send + 'static,
        O: Send + 'static,
        H: BatchHandler<I, O>,
    {
        let cfg = self.cfg.merge(&overrides)?;

        let count = items.len();
        let batches = partition(items, cfg.batch_size);
        self.logger.debug(
            "batch execution started",
            &Event::new(EventKind::ExecutionStarted)
                .with_items(count)
                .with_batches(batches.len()),
        );

        let handler: HandlerRef<I, O> = Arc::new(handler);
        Schedule {
            cfg,
            handler,
            unprocessed,
            logger: Arc::clone(&self.logger),
            token,
        }
        .run(batches)
        .await
    }
}

impl Default for Batcher {
    /// Default options with the [`TracingLogger`].
    fn default() -> Self {
        Self::new_internal(BatchConfig::default(), Arc::new(TracingLogger::new()))
    }
}

impl std::fmt::Debug for Batcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Batcher")
            .field("cfg", &self.cfg)
            .field("logger", &self.logger.name())
            .finish()
    }
}
