//! # Output aggregator.
//!
//! [`Outputs`] is the one piece of state shared by every batch task of an
//! execution: an append-only collection receiving exactly one entry per handler
//! invocation.
//!
//! ## Rules
//! - Appends are serialized by a mutex and never held across an `.await`
//! - Within one batch, entries appear in attempt order
//! - Across batches, order reflects completion interleaving only

use std::sync::{Mutex, MutexGuard};

/// Append-only, thread-safe collection of handler outputs.
#[derive(Debug)]
pub struct Outputs<O> {
    inner: Mutex<Vec<O>>,
}

impl<O> Outputs<O> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Vec::new()),
        }
    }

    /// Appends one handler output.
    pub fn push(&self, output: O) {
        self.lock().push(output);
    }

    /// Moves every collected output out, leaving the collection empty.
    pub fn take(&self) -> Vec<O> {
        std::mem::take(&mut *self.lock())
    }

    // A panic while holding the lock cannot leave a half-pushed Vec behind.
    fn lock(&self) -> MutexGuard<'_, Vec<O>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<O> Default for Outputs<O> {
    fn default() -> Self {
        Self::new()
    }
}
