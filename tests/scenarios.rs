mod common;

use batchvisor::{BatchConfig, BatchError, BatchOverrides, Batcher};
use common::{BatchOutput, Item, assert_same_members, extract_unprocessed, handler};

fn batcher(batch_size: usize, throttle: usize) -> Batcher {
    Batcher::new(BatchConfig {
        batch_size,
        throttle,
        ..BatchConfig::default()
    })
    .unwrap()
}

#[tokio::test(start_paused = true)]
async fn processes_single_batch() {
    let items = vec![Item::new(0), Item::new(0), Item::new(0)];

    let output = Batcher::default()
        .execute(
            items,
            handler(),
            extract_unprocessed(),
            BatchOverrides::default(),
        )
        .await
        .unwrap();

    assert_eq!(output, vec![BatchOutput::done(3)]);
}

#[tokio::test(start_paused = true)]
async fn processes_single_batch_with_retry() {
    let items = vec![Item::new(0), Item::new(1), Item::new(0)];

    let output = Batcher::default()
        .execute(
            items,
            handler(),
            extract_unprocessed(),
            BatchOverrides::default(),
        )
        .await
        .unwrap();

    // One batch: attempt outputs are recorded in attempt order.
    assert_eq!(
        output,
        vec![
            BatchOutput {
                processed: 2,
                unprocessed: vec![Item {
                    max_retries: 1,
                    retry: 1
                }],
            },
            BatchOutput::done(1),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn fails_single_batch_exceeding_max_retries() {
    let items = vec![Item::new(0), Item::new(4), Item::new(0)];

    let err = Batcher::default()
        .execute(
            items,
            handler(),
            extract_unprocessed(),
            BatchOverrides::default().max_retries(3),
        )
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "max retries exceeded");
    assert!(matches!(
        err,
        BatchError::MaxRetriesExceeded {
            batch: 0,
            retries: 3,
            remaining: 1
        }
    ));
}

#[tokio::test(start_paused = true)]
async fn fails_with_default_ceiling() {
    // Needs 6 retries; the default ceiling is 5.
    let items = vec![Item::new(0), Item::new(6), Item::new(0)];

    let err = Batcher::default()
        .execute(
            items,
            handler(),
            extract_unprocessed(),
            BatchOverrides::default(),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BatchError::MaxRetriesExceeded { retries: 5, .. }
    ));
}

#[tokio::test(start_paused = true)]
async fn succeeds_at_exactly_the_ceiling() {
    let items = vec![Item::new(5)];

    let output = Batcher::default()
        .execute(
            items,
            handler(),
            extract_unprocessed(),
            BatchOverrides::default(),
        )
        .await
        .unwrap();

    assert_eq!(output.len(), 6);
    assert_eq!(output.last(), Some(&BatchOutput::done(1)));
}

#[tokio::test(start_paused = true)]
async fn processes_many_batches() {
    let items = vec![Item::new(0), Item::new(0), Item::new(0)];

    let output = batcher(2, 10)
        .execute(
            items,
            handler(),
            extract_unprocessed(),
            BatchOverrides::default(),
        )
        .await
        .unwrap();

    assert_same_members(output, vec![BatchOutput::done(2), BatchOutput::done(1)]);
}

#[tokio::test(start_paused = true)]
async fn processes_many_batches_with_retry() {
    let items = vec![Item::new(0), Item::new(0), Item::new(1)];

    let output = batcher(2, 10)
        .execute(
            items,
            handler(),
            extract_unprocessed(),
            BatchOverrides::default(),
        )
        .await
        .unwrap();

    assert_same_members(
        output,
        vec![
            BatchOutput::done(2),
            BatchOutput {
                processed: 0,
                unprocessed: vec![Item {
                    max_retries: 1,
                    retry: 1,
                }],
            },
            BatchOutput::done(1),
        ],
    );
}

#[tokio::test(start_paused = true)]
async fn processes_many_batches_with_retry_and_throttling() {
    let items = vec![Item::new(0), Item::new(0), Item::new(1)];

    let output = batcher(2, 1)
        .execute(
            items,
            handler(),
            extract_unprocessed(),
            BatchOverrides::default(),
        )
        .await
        .unwrap();

    assert_same_members(
        output,
        vec![
            BatchOutput::done(2),
            BatchOutput {
                processed: 0,
                unprocessed: vec![Item {
                    max_retries: 1,
                    retry: 1,
                }],
            },
            BatchOutput::done(1),
        ],
    );
}

#[tokio::test(start_paused = true)]
async fn per_call_overrides_beat_instance_defaults() {
    let items = vec![Item::new(0), Item::new(0), Item::new(0)];

    // Instance default would put everything into one batch.
    let output = batcher(25, 10)
        .execute(
            items,
            handler(),
            extract_unprocessed(),
            BatchOverrides::default().batch_size(1),
        )
        .await
        .unwrap();

    assert_eq!(output, vec![BatchOutput::done(1); 3]);
}
