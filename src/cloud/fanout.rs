//! Bounded parallel detail fetch
//!
//! When a resolved resource references a set of other resources by id
//! (e.g. a router's attached networks), each one needs its own detail
//! call. This fans those calls out with a fixed in-flight bound and fails
//! fast on the first error.

use anyhow::Result;
use futures::stream::{self, StreamExt};
use std::future::Future;

/// Maximum number of detail fetches in flight at once.
pub const MAX_CONCURRENT_FETCHES: usize = 10;

/// Fetch details for every id with at most `limit` calls in flight.
///
/// Results are collected in completion order, not input order. The first
/// error observed is returned immediately; remaining fetches are not
/// awaited. An empty id set returns an empty result with no calls made.
pub async fn fetch_concurrent<T, F, Fut>(ids: &[String], limit: usize, fetch: F) -> Result<Vec<T>>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut results = Vec::with_capacity(ids.len());
    let mut in_flight = stream::iter(ids.iter().cloned().map(|id| fetch(id)))
        .buffer_unordered(limit.max(1));
    while let Some(result) = in_flight.next().await {
        results.push(result?);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[tokio::test]
    async fn test_empty_input_makes_no_calls() {
        let results: Vec<String> = fetch_concurrent(&[], 10, |_id| async move {
            panic!("fetch must not be called for an empty input set")
        })
        .await
        .expect("empty input should succeed");
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_collects_all_results() {
        let ids: Vec<String> = (0..25).map(|n| format!("id-{}", n)).collect();
        let mut results = fetch_concurrent(&ids, 10, |id| async move { Ok(id) })
            .await
            .expect("all fetches succeed");
        results.sort();
        let mut expected = ids.clone();
        expected.sort();
        assert_eq!(results, expected);
    }

    #[tokio::test]
    async fn test_first_error_wins() {
        let ids: Vec<String> = (0..5).map(|n| format!("id-{}", n)).collect();
        let result: Result<Vec<String>> = fetch_concurrent(&ids, 2, |id| async move {
            if id == "id-3" {
                Err(anyhow!("MOCKERROR"))
            } else {
                Ok(id)
            }
        })
        .await;
        assert_eq!(result.expect_err("must fail").to_string(), "MOCKERROR");
    }
}
