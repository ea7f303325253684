//! # LogWriter — simple event printer
//!
//! A minimal logger that prints incoming [`Event`]s to stdout (errors to stderr).
//! Use it for tests or demos.
//!
//! ## Example output
//! ```text
//! [started] items=3 batches=2
//! [executed] batch=1 attempt=1 retry=0 delay=0ms items=1 unprocessed=1
//! [backoff] batch=1 retry=1 delay=100ms items=1
//! [completed] batch=1 attempt=2
//! [max-retries] batch=0 retry=5 unprocessed=1
//! [failed] batch=0 attempt=1 err="connection refused"
//! [finished] batches=2 outputs=3
//! ```

use crate::events::{Event, EventKind};
use crate::loggers::Logger;

/// Event writer logger.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn render(e: &Event) -> String {
        let batch = e.batch.unwrap_or_default();
        match e.kind {
            EventKind::ExecutionStarted => format!(
                "[started] items={} batches={}",
                e.items.unwrap_or_default(),
                e.batches.unwrap_or_default()
            ),
            EventKind::ExecutionFinished => format!(
                "[finished] batches={} outputs={}",
                e.batches.unwrap_or_default(),
                e.outputs.unwrap_or_default()
            ),
            EventKind::BatchExecuted => {
                let mut line = format!(
                    "[executed] batch={batch} attempt={} retry={} delay={}ms items={} unprocessed={}",
                    e.attempt.unwrap_or_default(),
                    e.retry.unwrap_or_default(),
                    e.delay_ms.unwrap_or_default(),
                    e.items.unwrap_or_default(),
                    e.unprocessed.unwrap_or_default()
                );
                if let Some(items) = e.batch_items.as_deref() {
                    line.push_str(&format!(" contents={items}"));
                }
                if let Some(output) = e.batch_output.as_deref() {
                    line.push_str(&format!(" output={output}"));
                }
                line
            }
            EventKind::BackoffScheduled => format!(
                "[backoff] batch={batch} retry={} delay={}ms items={}",
                e.retry.unwrap_or_default(),
                e.delay_ms.unwrap_or_default(),
                e.items.unwrap_or_default()
            ),
            EventKind::BatchCompleted => format!(
                "[completed] batch={batch} attempt={}",
                e.attempt.unwrap_or_default()
            ),
            EventKind::MaxRetriesExceeded => format!(
                "[max-retries] batch={batch} retry={} unprocessed={}",
                e.retry.unwrap_or_default(),
                e.unprocessed.unwrap_or_default()
            ),
            EventKind::HandlerFailed => format!(
                "[failed] batch={batch} attempt={} err={:?}",
                e.attempt.unwrap_or_default(),
                e.reason.as_deref().unwrap_or("unknown")
            ),
            EventKind::HandlerPanicked => format!(
                "[panicked] batch={batch} info={}",
                e.reason.as_deref().unwrap_or("unknown")
            ),
        }
    }
}

impl Logger for LogWriter {
    fn debug(&self, _message: &str, e: &Event) {
        println!("{}", Self::render(e));
    }

    fn error(&self, _message: &str, e: &Event) {
        eprintln!("{}", Self::render(e));
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_render_backoff() {
        let ev = Event::new(EventKind::BackoffScheduled)
            .with_batch(1)
            .with_retry(1)
            .with_delay(Duration::from_millis(100))
            .with_items(1);
        assert_eq!(
            LogWriter::render(&ev),
            "[backoff] batch=1 retry=1 delay=100ms items=1"
        );
    }

    #[test]
    fn test_render_executed_with_contents() {
        let ev = Event::new(EventKind::BatchExecuted)
            .with_batch(0)
            .with_attempt(1)
            .with_retry(0)
            .with_delay(Duration::ZERO)
            .with_items(2)
            .with_unprocessed(0)
            .with_batch_items("[1, 2]")
            .with_batch_output("ok");
        assert_eq!(
            LogWriter::render(&ev),
            "[executed] batch=0 attempt=1 retry=0 delay=0ms items=2 unprocessed=0 contents=[1, 2] output=ok"
        );
    }

    #[test]
    fn test_render_failure_without_reason() {
        let ev = Event::new(EventKind::HandlerFailed).with_batch(0).with_attempt(1);
        assert_eq!(
            LogWriter::render(&ev),
            "[failed] batch=0 attempt=1 err=\"unknown\""
        );
    }
}
