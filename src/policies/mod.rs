//! Retry delay policies.
//!
//! This module groups the knobs that control **how long** a batch waits before
//! its unprocessed items are handed to the handler again.
//!
//! ## Contents
//! - [`BackoffPolicy`] how retry delays evolve (first = increment, then doubling)
//! - [`JitterPolicy`]  randomization strategy to avoid thundering herd
//!
//! ## Quick wiring
//! ```text
//! BatchConfig { delay_increment, jitter, .. }
//!      └─► BackoffPolicy::from(&cfg)
//!           └─► core::actor::BatchActor uses:
//!                - backoff.next(prev_delay) to compute the base delay
//!                - backoff.sleep_for(delay) to get the (jittered) sleep
//! ```
//!
//! ## Defaults
//! - `BackoffPolicy::from(&BatchConfig::default())` → increment=100ms, jitter=None.
//! - `JitterPolicy::None` by default; consider `Equal` when many batches retry together.

mod backoff;
mod jitter;

pub use backoff::BackoffPolicy;
pub use jitter::JitterPolicy;
