//! Executor events: diagnostic records handed to the logger.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//!
//! ## Quick reference
//! - **Producers**: `core::scheduler` (execution-level), `core::actor` and
//!   `core::runner` (per attempt).
//! - **Consumers**: the [`Logger`](crate::Logger) configured on the
//!   [`Batcher`](crate::Batcher).

mod event;

pub use event::{Event, EventKind};
