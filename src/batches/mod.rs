//! # Batch-level abstractions.
//!
//! This module provides the caller-facing pieces of one execution:
//! - [`partition`] - splits items into ordered, bounded batches
//! - [`BatchHandler`] - trait for processing one batch asynchronously
//! - [`HandlerFn`] - function-based handler implementation
//! - [`HandlerRef`] - shared reference to a handler (`Arc<dyn BatchHandler>`)
//! - [`Unprocessed`] - optional extractor of items that need a retry

mod handler;
mod partition;
mod unprocessed;

pub use handler::{BatchHandler, HandlerFn, HandlerRef};
pub use partition::partition;
pub use unprocessed::Unprocessed;
