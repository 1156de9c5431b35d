//! Fixed-size batch execution of pending async operations.
//!
//! Bounds the number of in-flight requests against the database: operations
//! are dispatched in contiguous groups, and a group is only started once every
//! operation in the previous group has resolved.

use crate::log_debug;
use crate::shared::errors::SeedResult;
use futures::future::try_join_all;
use std::future::Future;

/// Run `ops` in groups of `batch_size`, awaiting each group before the next
/// one starts. Results come back in dispatch order. The first failing
/// operation aborts the run; groups after the failing one are never polled.
pub async fn run_in_batches<T, F>(ops: Vec<F>, batch_size: usize) -> SeedResult<Vec<T>>
where
    F: Future<Output = SeedResult<T>>,
{
    let batch_size = batch_size.max(1);
    let mut results = Vec::with_capacity(ops.len());
    let mut pending = ops.into_iter();

    loop {
        let batch: Vec<F> = pending.by_ref().take(batch_size).collect();
        if batch.is_empty() {
            break;
        }
        let done = try_join_all(batch).await?;
        log_debug!("Completed batch of {}", done.len());
        results.extend(done);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::SeedError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn counting_op(
        i: usize,
        in_flight: Arc<AtomicUsize>,
        max_in_flight: Arc<AtomicUsize>,
        started: Arc<Mutex<Vec<usize>>>,
    ) -> impl Future<Output = SeedResult<usize>> {
        async move {
            started.lock().unwrap().push(i);
            let current = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            max_in_flight.fetch_max(current, Ordering::SeqCst);
            // Yield so every operation in the group is actually in flight at once
            tokio::task::yield_now().await;
            in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(i)
        }
    }

    #[tokio::test]
    async fn returns_all_results_in_dispatch_order() {
        let in_flight = Arc::new(AtomicUsize::new(0));
        let max = Arc::new(AtomicUsize::new(0));
        let started = Arc::new(Mutex::new(Vec::new()));

        let ops: Vec<_> = (0..7)
            .map(|i| counting_op(i, in_flight.clone(), max.clone(), started.clone()))
            .collect();

        let results = run_in_batches(ops, 3).await.unwrap();
        assert_eq!(results, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[tokio::test]
    async fn in_flight_operations_never_exceed_batch_size() {
        let in_flight = Arc::new(AtomicUsize::new(0));
        let max = Arc::new(AtomicUsize::new(0));
        let started = Arc::new(Mutex::new(Vec::new()));

        let ops: Vec<_> = (0..10)
            .map(|i| counting_op(i, in_flight.clone(), max.clone(), started.clone()))
            .collect();

        run_in_batches(ops, 4).await.unwrap();
        assert!(max.load(Ordering::SeqCst) <= 4);
    }

    #[tokio::test]
    async fn later_group_starts_only_after_earlier_group_resolves() {
        let in_flight = Arc::new(AtomicUsize::new(0));
        let max = Arc::new(AtomicUsize::new(0));
        let started = Arc::new(Mutex::new(Vec::new()));

        let ops: Vec<_> = (0..6)
            .map(|i| counting_op(i, in_flight.clone(), max.clone(), started.clone()))
            .collect();

        run_in_batches(ops, 2).await.unwrap();

        // Start order must respect group boundaries: {0,1} before {2,3} before {4,5}
        let order = started.lock().unwrap().clone();
        assert_eq!(order.len(), 6);
        for (pos, i) in order.iter().enumerate() {
            assert_eq!(pos / 2, i / 2, "operation {} started in the wrong group", i);
        }
    }

    #[tokio::test]
    async fn failure_suppresses_subsequent_groups() {
        let started = Arc::new(Mutex::new(Vec::new()));

        let ops: Vec<_> = (0..6)
            .map(|i| {
                let started = started.clone();
                async move {
                    started.lock().unwrap().push(i);
                    if i == 3 {
                        Err(SeedError::Database("boom".to_string()))
                    } else {
                        Ok(i)
                    }
                }
            })
            .collect();

        let result = run_in_batches(ops, 2).await;
        assert!(result.is_err());

        // Groups {0,1} and {2,3} ran, group {4,5} never started
        let order = started.lock().unwrap().clone();
        assert_eq!(order.len(), 4);
        assert!(!order.contains(&4));
        assert!(!order.contains(&5));
    }

    #[tokio::test]
    async fn short_final_group_and_zero_ops_are_handled() {
        let empty: Vec<std::future::Ready<SeedResult<usize>>> = Vec::new();
        let results = run_in_batches(empty, 3).await.unwrap();
        assert!(results.is_empty());

        let ops: Vec<_> = (0..5).map(|i| async move { Ok(i) }).collect();
        let results = run_in_batches(ops, 3).await.unwrap();
        assert_eq!(results, vec![0, 1, 2, 3, 4]);
    }
}
