//! Integration tests for the bounded parallel detail fetch
//!
//! Verify the in-flight bound actually holds under load and that a single
//! failure aborts the whole fetch without draining the input set.

use anyhow::anyhow;
use nimbusctl::cloud::fanout::fetch_concurrent;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use uuid::Uuid;

fn arbitrary_ids(count: usize) -> Vec<String> {
    (0..count).map(|_| Uuid::new_v4().to_string()).collect()
}

/// With 25 ids and a pool of 10, no more than 10 fetches may ever be in
/// flight at once.
#[tokio::test]
async fn test_in_flight_bound_holds() {
    let ids = arbitrary_ids(25);
    let in_flight = AtomicUsize::new(0);
    let max_seen = AtomicUsize::new(0);

    let results = fetch_concurrent(&ids, 10, |id| {
        let in_flight = &in_flight;
        let max_seen = &max_seen;
        async move {
            let current = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            max_seen.fetch_max(current, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(10)).await;
            in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(id)
        }
    })
    .await
    .expect("all fetches succeed");

    assert_eq!(results.len(), 25);
    let max = max_seen.load(Ordering::SeqCst);
    assert!(max <= 10, "in-flight bound exceeded: {}", max);
    assert!(max > 1, "fetches did not overlap at all");
}

/// An injected failure must surface without waiting for all 25 fetches.
#[tokio::test]
async fn test_fail_fast_skips_remaining_fetches() {
    let ids = arbitrary_ids(25);
    let failing_id = ids[3].clone();
    let started = AtomicUsize::new(0);

    let result = fetch_concurrent(&ids, 10, |id| {
        let started = &started;
        let failing_id = &failing_id;
        async move {
            started.fetch_add(1, Ordering::SeqCst);
            if &id == failing_id {
                return Err(anyhow!("MOCKERROR"));
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok(id)
        }
    })
    .await;

    assert_eq!(
        result.expect_err("must fail").to_string(),
        "MOCKERROR",
        "first error is returned as-is"
    );
    assert!(
        started.load(Ordering::SeqCst) < 25,
        "fetch aborted before dispatching the whole input set"
    );
}

/// Result order follows completion, not input; callers must not rely on it.
#[tokio::test]
async fn test_results_unordered() {
    let ids: Vec<String> = (0..4).map(|n| n.to_string()).collect();
    let results = fetch_concurrent(&ids, 4, |id| async move {
        // later ids finish first
        let delay = 40 - id.parse::<u64>().unwrap() * 10;
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok(id)
    })
    .await
    .expect("all fetches succeed");

    assert_eq!(results, vec!["3", "2", "1", "0"]);
}
