//! # Batch handler abstraction and function-backed implementation.
//!
//! This module defines the [`BatchHandler`] trait and a convenient function-backed
//! implementation [`HandlerFn`]. The common handle type is [`HandlerRef`], an
//! `Arc<dyn BatchHandler<I, O>>` shared by every batch task of one execution.
//!
//! A handler receives the items of one batch (or, on retry, the unprocessed
//! subset reported for it) and returns an opaque output. Returning `Err`
//! aborts the whole execution; items that merely need another pass should be
//! reported through the output and an [`Unprocessed`](crate::Unprocessed) extractor.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::BoxError;

/// Shared handle to a batch handler.
pub type HandlerRef<I, O> = Arc<dyn BatchHandler<I, O>>;

/// # Asynchronous batch processor.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use batchvisor::{BatchHandler, BoxError};
///
/// struct Count;
///
/// #[async_trait]
/// impl BatchHandler<u32, usize> for Count {
///     async fn handle(&self, batch: Vec<u32>) -> Result<usize, BoxError> {
///         Ok(batch.len())
///     }
/// }
/// ```
#[async_trait]
pub trait BatchHandler<I, O>: Send + Sync + 'static {
    /// Processes one batch attempt.
    async fn handle(&self, batch: Vec<I>) -> Result<O, BoxError>;
}

/// Function-backed handler.
///
/// Wraps a closure that *creates* a new future per invocation.
///
/// ## Example
/// ```rust
/// use batchvisor::{BoxError, HandlerFn};
///
/// let h = HandlerFn::new(|batch: Vec<u32>| async move {
///     Ok::<_, BoxError>(batch.iter().sum::<u32>())
/// });
/// # let _ = h;
/// ```
#[derive(Debug, Clone)]
pub struct HandlerFn<F> {
    f: F,
}

impl<F> HandlerFn<F> {
    /// Creates a new function-backed handler.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<I, O, E, F, Fut> BatchHandler<I, O> for HandlerFn<F>
where
    I: Send + 'static,
    O: Send + 'static,
    E: Into<BoxError>,
    F: Fn(Vec<I>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<O, E>> + Send + 'static,
{
    async fn handle(&self, batch: Vec<I>) -> Result<O, BoxError> {
        (self.f)(batch).await.map_err(Into::into)
    }
}
