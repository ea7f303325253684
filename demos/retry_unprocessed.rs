//! # Example: retry_unprocessed
//!
//! Demonstrates how [`Batcher`] retries the items a handler reports as
//! unprocessed, with exponential backoff, while throttling batches.
//!
//! A fake "bulk write" accepts each record only after it has been offered a
//! number of times, the way a throttled backend returns partial failures.
//!
//! ## Flow
//! ```text
//! Batcher::execute(records, batch_size=4, throttle=2)
//!   ├─► batch #0 attempt 1 → 3 written, 1 rejected
//!   ├─► backoff 50ms
//!   ├─► batch #0 attempt 2 → 1 written
//!   ├─► batch #1 ...
//!   └─► Ok(outputs)   (one per attempt)
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=batchvisor=debug cargo run --example retry_unprocessed
//! ```

use std::time::Duration;

use batchvisor::{BatchConfig, BatchOverrides, Batcher, BoxError, HandlerFn, Unprocessed};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug)]
struct Record {
    id: u32,
    offers_needed: u32,
}

#[derive(Debug)]
struct WriteResult {
    written: Vec<u32>,
    rejected: Vec<Record>,
}

async fn bulk_write(batch: Vec<Record>) -> Result<WriteResult, BoxError> {
    tokio::time::sleep(Duration::from_millis(20)).await;

    let mut result = WriteResult {
        written: Vec::new(),
        rejected: Vec::new(),
    };
    for rec in batch {
        if rec.offers_needed == 0 {
            result.written.push(rec.id);
        } else {
            result.rejected.push(Record {
                id: rec.id,
                offers_needed: rec.offers_needed - 1,
            });
        }
    }
    Ok(result)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("batchvisor=debug")),
        )
        .init();

    let cfg = BatchConfig {
        batch_size: 4,
        throttle: 2,
        delay_increment: Duration::from_millis(50),
        ..BatchConfig::default()
    };
    let batcher = Batcher::new(cfg)?;

    let records: Vec<Record> = (0..10)
        .map(|id| Record {
            id,
            offers_needed: id % 3,
        })
        .collect();

    let outputs = batcher
        .execute(
            records,
            HandlerFn::new(bulk_write),
            Unprocessed::with(|out: &WriteResult| out.rejected.clone()),
            BatchOverrides::default(),
        )
        .await?;

    let written: usize = outputs.iter().map(|o| o.written.len()).sum();
    println!("{} attempts, {written} records written", outputs.len());
    Ok(())
}
