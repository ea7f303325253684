//! # Concurrency scheduler: runs batch actors under the throttle limit.
//!
//! ## Architecture
//! ```text
//! batches[0] batches[1] ... batches[N-1]
//!     │          │               │
//!     └──► JoinSet::spawn(async {
//!              permit = semaphore.acquire_owned()   (throttle slots; cancellable)
//!              BatchActor::run(items, token)        (holds the permit to the end)
//!          })
//!
//! failing batch task:
//!   └─ semaphore.close() before releasing its permit → batches still waiting never start
//!
//! join loop:
//!   ├─ Ok            → keep waiting
//!   └─ first Err     → remember error      → batches in flight finish naturally
//!
//! all joined:
//!   ├─ no error      → Ok(outputs.take())
//!   └─ first error   → Err(first error)    (reported exactly once)
//! ```
//!
//! ## Rules
//! - At most `throttle` actors (and so handler invocations) are in flight
//! - A permit is held for a whole retry loop, backoff sleeps included
//! - Never more permits than batches, so any positive `throttle` is accepted
//! - Panics inside a batch task are reported as [`BatchError::Panicked`], also
//!   when they escape the task (e.g. from a custom logger)
//! - No completion order guarantee across batches

use std::{collections::HashMap, panic::AssertUnwindSafe, sync::Arc};

use futures::FutureExt;
use tokio::{
    select,
    sync::Semaphore,
    task::{self, JoinError, JoinSet},
};
use tokio_util::sync::CancellationToken;

use crate::{
    batches::{HandlerRef, Unprocessed},
    core::{
        actor::{BatchActor, BatchActorParams},
        config::BatchConfig,
        outputs::Outputs,
    },
    error::BatchError,
    events::{Event, EventKind},
    loggers::Logger,
    policies::BackoffPolicy,
};

/// Everything one execution needs besides its batches.
pub struct Schedule<I, O> {
    pub cfg: BatchConfig,
    pub handler: HandlerRef<I, O>,
    pub unprocessed: Unprocessed<I, O>,
    pub logger: Arc<dyn Logger>,
    pub token: CancellationToken,
}

impl<I, O> Schedule<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    /// Runs every batch and collects all handler outputs.
    pub async fn run(self, batches: Vec<Vec<I>>) -> Result<Vec<O>, BatchError> {
        let total = batches.len();
        let outputs = Arc::new(Outputs::new());
        let permits = self.cfg.throttle.min(total).clamp(1, Semaphore::MAX_PERMITS);
        let semaphore = Arc::new(Semaphore::new(permits));

        let mut set = JoinSet::new();
        let ids = self.spawn_batch_actors(&mut set, &semaphore, &outputs, batches);

        let mut first_err: Option<BatchError> = None;
        while let Some(joined) = set.join_next_with_id().await {
            let res = match joined {
                Ok((_, res)) => res,
                Err(err) => Err(join_failure(err, &ids)),
            };
            if let Err(e) = res {
                if first_err.is_none() {
                    semaphore.close();
                    first_err = Some(e);
                }
            }
        }

        if let Some(e) = first_err {
            return Err(e);
        }

        let outputs = outputs.take();
        self.logger.debug(
            "batch execution finished",
            &Event::new(EventKind::ExecutionFinished)
                .with_batches(total)
                .with_outputs(outputs.len()),
        );
        Ok(outputs)
    }

    /// Spawns one task per batch; each waits for a throttle slot before running its actor.
    ///
    /// Returns the batch index of every spawned task.
    fn spawn_batch_actors(
        &self,
        set: &mut JoinSet<Result<(), BatchError>>,
        semaphore: &Arc<Semaphore>,
        outputs: &Arc<Outputs<O>>,
        batches: Vec<Vec<I>>,
    ) -> HashMap<task::Id, usize> {
        let mut ids = HashMap::with_capacity(batches.len());
        let params = BatchActorParams {
            backoff: BackoffPolicy::from(&self.cfg),
            max_retries: self.cfg.max_retries,
        };

        for (index, items) in batches.into_iter().enumerate() {
            let actor = BatchActor::new(
                index,
                Arc::clone(&self.handler),
                self.unprocessed.clone(),
                params,
                Arc::clone(outputs),
                Arc::clone(&self.logger),
            );
            let semaphore = Arc::clone(semaphore);
            let logger = Arc::clone(&self.logger);
            let token = self.token.clone();

            let handle = set.spawn(async move {
                let _permit = select! {
                    biased;
                    _ = token.cancelled() => return Err(BatchError::Canceled),
                    res = Arc::clone(&semaphore).acquire_owned() => match res {
                        Ok(permit) => permit,
                        // Closed after another batch failed: this one never starts.
                        Err(_closed) => return Ok(()),
                    },
                };

                let res = match AssertUnwindSafe(actor.run(items, token)).catch_unwind().await {
                    Ok(res) => res,
                    Err(panic_err) => Err(BatchError::Panicked {
                        batch: index,
                        info: panic_info(&*panic_err),
                    }),
                };

                // Close while still holding the permit so no waiter can take it.
                if res.is_err() {
                    semaphore.close();
                }
                if let Err(BatchError::Panicked { info, .. }) = &res {
                    logger.error(
                        "batch handler panicked",
                        &Event::new(EventKind::HandlerPanicked)
                            .with_batch(index)
                            .with_reason(info.as_str()),
                    );
                }
                res
            });
            ids.insert(handle.id(), index);
        }
        ids
    }
}

/// Maps a task that did not return normally to the error of its batch.
///
/// Aborts only happen when the runtime shuts down underneath us.
fn join_failure(err: JoinError, ids: &HashMap<task::Id, usize>) -> BatchError {
    let batch = ids.get(&err.id()).copied().unwrap_or_default();
    match err.try_into_panic() {
        Ok(payload) => BatchError::Panicked {
            batch,
            info: panic_info(&*payload),
        },
        Err(_) => BatchError::Canceled,
    }
}

fn panic_info(any: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = any.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = any.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
