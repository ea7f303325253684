//! # TracingLogger — forwards events to `tracing`
//!
//! The default logger. Each [`Event`] becomes one `tracing` record with the
//! event fields attached as structured key/values, under the `batchvisor` target.
//! Without an installed subscriber the records are discarded at near-zero cost.

use crate::events::Event;
use crate::loggers::Logger;

/// Logger backed by the `tracing` macros.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl TracingLogger {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn debug(&self, message: &str, e: &Event) {
        tracing::debug!(
            target: "batchvisor",
            seq = e.seq,
            kind = e.kind.as_label(),
            batch = e.batch,
            attempt = e.attempt,
            retry = e.retry,
            delay_ms = e.delay_ms,
            items = e.items,
            unprocessed = e.unprocessed,
            batches = e.batches,
            outputs = e.outputs,
            batch_items = e.batch_items.as_deref(),
            batch_output = e.batch_output.as_deref(),
            "{message}"
        );
    }

    fn error(&self, message: &str, e: &Event) {
        tracing::error!(
            target: "batchvisor",
            seq = e.seq,
            kind = e.kind.as_label(),
            batch = e.batch,
            attempt = e.attempt,
            retry = e.retry,
            unprocessed = e.unprocessed,
            reason = e.reason.as_deref(),
            "{message}"
        );
    }

    fn name(&self) -> &'static str {
        "TracingLogger"
    }
}
