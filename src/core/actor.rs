//! # BatchActor: single-batch retry loop.
//!
//! Drives one batch through repeated handler invocations until nothing is left
//! unprocessed or the retry ceiling is reached.
//!
//! ## States
//! ```text
//! Pending ──► Executing ──► Complete                      (nothing unprocessed)
//!                 │
//!                 ├──────► Failed                         (handler error, or
//!                 │                                        retry == max_retries)
//!                 ▼
//!           AwaitingRetry ── sleep(delay) ──► Executing   (items = unprocessed)
//! ```
//!
//! ## Loop
//! ```text
//! delay = 0, retry = 0
//! loop {
//!   ├─► output = run_once(handler, items)          (error → Failed)
//!   ├─► remaining = unprocessed.extract(&output)
//!   ├─► logger.debug("executed batch", ..)         (contents if renderers are attached)
//!   ├─► outputs.push(output)                       (every attempt is kept)
//!   ├─► remaining empty        → Complete
//!   ├─► retry == max_retries   → Failed(MaxRetriesExceeded)
//!   └─► delay = backoff.next(delay), retry += 1, items = remaining
//!       sleep(delay) (cancellable)
//! }
//! ```
//!
//! ## Rules
//! - Attempts run **sequentially** within one actor (never parallel)
//! - No delay before the first attempt
//! - Cancellation is observed only while sleeping; a running handler is never interrupted

use std::{sync::Arc, time::Duration};

use tokio::{select, time};
use tokio_util::sync::CancellationToken;

use crate::{
    batches::{HandlerRef, Unprocessed},
    core::{outputs::Outputs, runner::run_once},
    error::BatchError,
    events::{Event, EventKind},
    loggers::Logger,
    policies::BackoffPolicy,
};

/// Retry parameters of a batch actor, extracted from the resolved
/// [`BatchConfig`](crate::BatchConfig).
#[derive(Clone, Copy, Debug)]
pub struct BatchActorParams {
    /// How to compute retry delays.
    pub backoff: BackoffPolicy,
    /// Retries allowed before the batch fails.
    pub max_retries: u32,
}

/// Runs one batch to completion with retries, backoff and logging.
pub struct BatchActor<I, O> {
    /// Batch index in partition order.
    pub index: usize,
    pub handler: HandlerRef<I, O>,
    pub unprocessed: Unprocessed<I, O>,
    pub params: BatchActorParams,
    /// Shared output aggregator.
    pub outputs: Arc<Outputs<O>>,
    pub logger: Arc<dyn Logger>,
}

impl<I, O> BatchActor<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    pub fn new(
        index: usize,
        handler: HandlerRef<I, O>,
        unprocessed: Unprocessed<I, O>,
        params: BatchActorParams,
        outputs: Arc<Outputs<O>>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            index,
            handler,
            unprocessed,
            params,
            outputs,
            logger,
        }
    }

    /// Runs the retry loop for `items` until the batch completes or fails.
    ///
    /// ### Exit conditions
    /// - Extractor reports nothing left → `Ok(())`
    /// - Handler returns an error → [`BatchError::Handler`]
    /// - Items left after `max_retries` retries → [`BatchError::MaxRetriesExceeded`]
    /// - `token` cancelled during a backoff sleep → [`BatchError::Canceled`]
    pub async fn run(self, items: Vec<I>, token: CancellationToken) -> Result<(), BatchError> {
        let mut items = items;
        let mut delay = Duration::ZERO;
        let mut retry: u32 = 0;

        loop {
            let attempt = retry.saturating_add(1);
            let count = items.len();
            let rendered = self.unprocessed.render_items(&items);

            let output = run_once(
                self.handler.as_ref(),
                self.index,
                items,
                attempt,
                self.logger.as_ref(),
            )
            .await?;

            let remaining = self.unprocessed.extract(&output);
            let mut executed = Event::new(EventKind::BatchExecuted)
                .with_batch(self.index)
                .with_attempt(attempt)
                .with_retry(retry)
                .with_delay(delay)
                .with_items(count)
                .with_unprocessed(remaining.len());
            if let Some(text) = rendered {
                executed = executed.with_batch_items(text);
            }
            if let Some(text) = self.unprocessed.render_output(&output) {
                executed = executed.with_batch_output(text);
            }
            self.logger.debug("executed batch", &executed);
            self.outputs.push(output);

            if remaining.is_empty() {
                self.logger.debug(
                    "batch completed",
                    &Event::new(EventKind::BatchCompleted)
                        .with_batch(self.index)
                        .with_attempt(attempt),
                );
                return Ok(());
            }

            if retry >= self.params.max_retries {
                self.logger.error(
                    "max retries exceeded",
                    &Event::new(EventKind::MaxRetriesExceeded)
                        .with_batch(self.index)
                        .with_attempt(attempt)
                        .with_retry(retry)
                        .with_unprocessed(remaining.len()),
                );
                return Err(BatchError::MaxRetriesExceeded {
                    batch: self.index,
                    retries: retry,
                    remaining: remaining.len(),
                });
            }

            delay = self.params.backoff.next(delay);
            retry += 1;
            items = remaining;

            self.logger.debug(
                "backoff scheduled",
                &Event::new(EventKind::BackoffScheduled)
                    .with_batch(self.index)
                    .with_attempt(retry + 1)
                    .with_retry(retry)
                    .with_delay(delay)
                    .with_items(items.len()),
            );

            let sleep = time::sleep(self.params.backoff.sleep_for(delay));
            tokio::pin!(sleep);
            select! {
                _ = &mut sleep => {}
                _ = token.cancelled() => { return Err(BatchError::Canceled); }
            }
        }
    }
}
