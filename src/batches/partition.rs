//! # Partitioner
//!
//! Splits an ordered item collection into ordered batches of bounded size.
//!
//! ```text
//! [a, b, c, d, e]  ── partition(_, 2) ──►  [[a, b], [c, d], [e]]
//! ```
//!
//! - `ceil(N / batch_size)` batches, all full except possibly the last
//! - item order is preserved within and across batches
//! - `N = 0` yields no batches

/// Splits `items` into batches of at most `batch_size` items.
///
/// A `batch_size` of 0 is rejected by config validation before execution; here
/// it is treated as 1.
///
/// # Example
/// ```rust
/// use batchvisor::partition;
///
/// let batches = partition(vec![1, 2, 3], 2);
/// assert_eq!(batches, vec![vec![1, 2], vec![3]]);
/// ```
pub fn partition<I>(items: Vec<I>, batch_size: usize) -> Vec<Vec<I>> {
    let size = batch_size.max(1);
    let mut batches = Vec::with_capacity(items.len().div_ceil(size));

    let mut iter = items.into_iter().peekable();
    while iter.peek().is_some() {
        batches.push(iter.by_ref().take(size).collect());
    }
    batches
}
