//! # Built-in loggers
//!
//! Small, self-contained implementations useful for demos.
//!
//! - [`LogWriter`]: prints events in a human-readable form (demo/debug).

mod log;

pub use log::LogWriter;
