//! # Loggers for the batch executor.
//!
//! This module provides the [`Logger`] trait and built-in implementations
//! receiving the [`Event`](crate::Event)s produced while batches run.
//!
//! ## Architecture
//! ```text
//! BatchActor / scheduler ── Logger::debug(msg, &Event) ──┬──► TracingLogger (default)
//!                        ── Logger::error(msg, &Event) ──┼──► LogWriter (feature "logging")
//!                                                        └──► Custom
//! ```

#[cfg(feature = "logging")]
mod embedded;
mod logger;
mod trace;

#[cfg(feature = "logging")]
pub use embedded::LogWriter;
pub use logger::Logger;
pub use trace::TracingLogger;
