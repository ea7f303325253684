//! # Run a single attempt of a batch.
//!
//! Invokes the handler once with the current items and turns a handler error
//! into [`BatchError::Handler`], reporting it to the logger.
//!
//! ## Rules
//! - Handler errors are **never** retried: they end the batch and the execution
//! - Exactly one `HandlerFailed` record is emitted per failed attempt
//! - Successful outputs are returned untouched; interpreting them is the actor's job

use crate::{
    batches::BatchHandler,
    error::BatchError,
    events::{Event, EventKind},
    loggers::Logger,
};

/// Executes one handler invocation for batch `batch`.
pub async fn run_once<I, O>(
    handler: &dyn BatchHandler<I, O>,
    batch: usize,
    items: Vec<I>,
    attempt: u32,
    logger: &dyn Logger,
) -> Result<O, BatchError>
where
    I: Send + 'static,
    O: Send + 'static,
{
    let count = items.len();
    match handler.handle(items).await {
        Ok(output) => Ok(output),
        Err(source) => {
            logger.error(
                "batch handler failed",
                &Event::new(EventKind::HandlerFailed)
                    .with_batch(batch)
                    .with_attempt(attempt)
                    .with_items(count)
                    .with_reason(source.to_string()),
            );
            Err(BatchError::Handler {
                batch,
                attempt,
                source,
            })
        }
    }
}
