//! # Core logger trait
//!
//! `Logger` is the extension point for plugging diagnostics into the executor.
//! Every [`Event`] is delivered together with a short message at one of two
//! levels: `debug` for per-attempt records and `error` for the failure that
//! aborts an execution.
//!
//! ## Contract
//! - Calls happen **inline** on the batch task that produced the event; keep
//!   implementations cheap and non-blocking (hand off to a channel or a
//!   non-blocking writer if I/O is involved).
//! - Logging is observability only: the executor ignores whatever a logger does.
//!
//! ## Example (skeleton)
//! ```rust
//! use batchvisor::{Event, Logger};
//!
//! struct Audit;
//!
//! impl Logger for Audit {
//!     fn debug(&self, _message: &str, _event: &Event) {}
//!     fn error(&self, message: &str, event: &Event) {
//!         eprintln!("{message}: {:?}", event.reason);
//!     }
//!     fn name(&self) -> &'static str { "audit" }
//! }
//! ```

use crate::events::Event;

/// Contract for diagnostic sinks.
pub trait Logger: Send + Sync + 'static {
    /// Record a debug-level event.
    fn debug(&self, message: &str, event: &Event);

    /// Record an error-level event.
    fn error(&self, message: &str, event: &Event);

    /// Human-readable name (for logs/metrics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
