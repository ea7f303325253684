#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use batchvisor::{
    BatchConfig, BatchHandler, Batcher, BoxError, Event, EventKind, HandlerFn, Logger,
    Unprocessed,
};

/// Work item that needs `max_retries` retries before it counts as processed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub max_retries: u32,
    pub retry: u32,
}

impl Item {
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            retry: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchOutput {
    pub processed: usize,
    pub unprocessed: Vec<Item>,
}

impl BatchOutput {
    pub fn done(processed: usize) -> Self {
        Self {
            processed,
            unprocessed: Vec::new(),
        }
    }
}

/// Processes every item whose retry counter reached its target; the rest come
/// back with their counter bumped.
pub async fn batch_handler(items: Vec<Item>) -> Result<BatchOutput, BoxError> {
    tokio::time::sleep(Duration::from_millis(100)).await;

    let mut out = BatchOutput::done(0);
    for item in items {
        if item.retry == item.max_retries {
            out.processed += 1;
        } else {
            out.unprocessed.push(Item {
                max_retries: item.max_retries,
                retry: item.retry + 1,
            });
        }
    }
    Ok(out)
}

pub fn handler() -> impl BatchHandler<Item, BatchOutput> {
    HandlerFn::new(batch_handler)
}

pub fn extract_unprocessed() -> Unprocessed<Item, BatchOutput> {
    Unprocessed::with(|out: &BatchOutput| out.unprocessed.clone())
}

/// Logger that keeps every record for later inspection.
#[derive(Default)]
pub struct RecordingLogger {
    records: Mutex<Vec<(&'static str, String, Event)>>,
}

impl RecordingLogger {
    pub fn kinds(&self) -> Vec<EventKind> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|(_, _, e)| e.kind)
            .collect()
    }

    pub fn errors(&self) -> Vec<(String, Event)> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, _, _)| *level == "error")
            .map(|(_, msg, e)| (msg.clone(), e.clone()))
            .collect()
    }

    pub fn events(&self, kind: EventKind) -> Vec<Event> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, _, e)| e.kind == kind)
            .map(|(_, _, e)| e.clone())
            .collect()
    }
}

impl Logger for RecordingLogger {
    fn debug(&self, message: &str, event: &Event) {
        self.records
            .lock()
            .unwrap()
            .push(("debug", message.to_string(), event.clone()));
    }

    fn error(&self, message: &str, event: &Event) {
        self.records
            .lock()
            .unwrap()
            .push(("error", message.to_string(), event.clone()));
    }

    fn name(&self) -> &'static str {
        "RecordingLogger"
    }
}

pub fn recording_batcher(cfg: BatchConfig) -> (Batcher, Arc<RecordingLogger>) {
    let logger = Arc::new(RecordingLogger::default());
    let batcher = Batcher::builder(cfg)
        .with_logger(logger.clone())
        .build()
        .unwrap();
    (batcher, logger)
}

/// Order-insensitive comparison of collected outputs.
pub fn assert_same_members(mut actual: Vec<BatchOutput>, mut expected: Vec<BatchOutput>) {
    let key = |o: &BatchOutput| (o.processed, o.unprocessed.len());
    actual.sort_by_key(key);
    expected.sort_by_key(key);
    assert_eq!(actual, expected);
}
