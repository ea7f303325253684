//! Executor core: partitioned, throttled batch execution with retries.
//!
//! The public API from this module is [`Batcher`] (plus its builder and options).
//!
//! Internal modules:
//! - [`scheduler`]: runs batch actors under the throttle limit, first failure wins;
//! - [`actor`]: runs a single batch through its retry/backoff loop;
//! - [`runner`]: executes one handler invocation;
//! - [`outputs`]: shared append-only output collection;
//! - [`config`]: options, per-call overrides and validation.

mod actor;
mod batcher;
mod builder;
mod config;
mod outputs;
mod runner;
mod scheduler;

pub use batcher::Batcher;
pub use builder::BatcherBuilder;
pub use config::{BatchConfig, BatchOverrides};
