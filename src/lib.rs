//! # batchvisor
//!
//! **Batchvisor** is a small batch-execution engine for async Rust.
//!
//! Given a flat collection of work items, it partitions them into fixed-size
//! batches, runs a caller-supplied handler against each batch under a
//! concurrency cap, and retries the part of each batch the handler reports as
//! unprocessed, with exponential backoff, until everything is processed or a
//! retry ceiling is hit.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   items ──► partition(batch_size) ──► [batch 0] [batch 1] ... [batch N-1]
//!                                           │         │              │
//! ┌─────────────────────────────────────────▼─────────▼──────────────▼────┐
//! │  Schedule (one execute call)                                          │
//! │  - Semaphore (throttle slots)                                         │
//! │  - JoinSet (one task per batch)                                       │
//! │  - first failure closes the semaphore; in-flight batches finish       │
//! └──────┬──────────────────┬──────────────────┬──────────────────────────┘
//!        ▼                  ▼                  ▼
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │  BatchActor  │   │  BatchActor  │   │  BatchActor  │
//!     │ (retry loop) │   │ (retry loop) │   │ (retry loop) │
//!     └┬─────────┬───┘   └┬─────────┬───┘   └┬─────────┬───┘
//!      │         │        │         │        │         │
//!      │ push    │ debug  │ push    │ debug  │ push    │ debug/error
//!      ▼         ▼        ▼         ▼        ▼         ▼
//!  ┌─────────────────┐  ┌──────────────────────────────────┐
//!  │ Outputs (mutex) │  │ Logger (TracingLogger, custom..) │
//!  └─────────────────┘  └──────────────────────────────────┘
//! ```
//!
//! ### Lifecycle of one batch
//! ```text
//! acquire throttle slot (cancellable)
//! loop {
//!   ├─► [sleep(delay) unless first attempt]        (cancellable)
//!   ├─► output = handler.handle(items)             (Err → HandlerFailed, abort)
//!   ├─► remaining = unprocessed.extract(&output)
//!   ├─► logger.debug("executed batch")
//!   ├─► outputs.push(output)
//!   ├─► remaining empty      → done
//!   ├─► retry == max_retries → MaxRetriesExceeded, abort
//!   └─► delay = delay == 0 ? delay_increment : delay × 2; retry += 1
//! }
//! ```
//!
//! ## Features
//! | Area              | Description                                                  | Key types / traits                          |
//! |-------------------|--------------------------------------------------------------|---------------------------------------------|
//! | **Execution**     | Partition, throttle, retry and collect outputs.              | [`Batcher`], [`BatchConfig`]                |
//! | **Handlers**      | Define batch handlers as functions or trait impls.           | [`BatchHandler`], [`HandlerFn`]             |
//! | **Retries**       | Report unprocessed items; exponential backoff with jitter.   | [`Unprocessed`], [`BackoffPolicy`]          |
//! | **Logging**       | Plug diagnostics into every attempt.                         | [`Logger`], [`TracingLogger`], [`Event`]    |
//! | **Errors**        | Typed errors for configuration and execution.                | [`BatchError`], [`ConfigError`]             |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in `LogWriter` _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use batchvisor::{BatchConfig, BatchOverrides, Batcher, BoxError, HandlerFn, Unprocessed};
//!
//! #[derive(Clone)]
//! struct Row { id: u32, ok: bool }
//!
//! struct Written { rejected: Vec<Row> }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let batcher = Batcher::new(BatchConfig::default())?;
//!
//!     let rows: Vec<Row> = (0..60).map(|id| Row { id, ok: id % 7 != 0 }).collect();
//!
//!     // Rows that were not ok are "fixed" by the time they are retried.
//!     let written = batcher
//!         .execute(
//!             rows,
//!             HandlerFn::new(|batch: Vec<Row>| async move {
//!                 let rejected = batch
//!                     .into_iter()
//!                     .filter(|r| !r.ok)
//!                     .map(|r| Row { id: r.id, ok: true })
//!                     .collect();
//!                 Ok::<_, BoxError>(Written { rejected })
//!             }),
//!             Unprocessed::with(|out: &Written| out.rejected.clone()),
//!             BatchOverrides::default()
//!                 .delay_increment(std::time::Duration::from_millis(1)),
//!         )
//!         .await?;
//!
//!     // 3 batches, each with one retry.
//!     assert_eq!(written.len(), 6);
//!     Ok(())
//! }
//! ```
mod batches;
mod core;
mod error;
mod events;
mod loggers;
mod policies;

// ---- Public re-exports ----

pub use batches::{BatchHandler, HandlerFn, HandlerRef, Unprocessed, partition};
pub use crate::core::{BatchConfig, BatchOverrides, Batcher, BatcherBuilder};
pub use error::{BatchError, BoxError, ConfigError};
pub use events::{Event, EventKind};
pub use loggers::{Logger, TracingLogger};
pub use policies::{BackoffPolicy, JitterPolicy};

// Optional: expose a simple built-in stdout logger (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use loggers::LogWriter;
