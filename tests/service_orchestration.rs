// tests/service_orchestration.rs
//! Cache-or-fetch orchestration against mock sources: hit/miss behavior,
//! single-fetch guarantee, interregnum filtering, and failure propagation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use monarch_stats::cache::SnapshotCache;
use monarch_stats::service::{MonarchService, INTERREGNUM_HOUSE};
use monarch_stats::source::MonarchSource;
use monarch_stats::types::{FetchOutcome, Monarch};

fn mk(id: u32, name: &str, house: &str, start: i32, end: i32) -> Monarch {
    Monarch {
        id,
        name: name.to_string(),
        country: "United Kingdom".to_string(),
        house: house.to_string(),
        years_raw: format!("{start}-{end}"),
        start_year: start,
        end_year: end,
    }
}

/// Mock source that counts invocations and replays a canned outcome.
struct CountingSource {
    calls: Arc<AtomicUsize>,
    outcome: FetchOutcome<Vec<Monarch>>,
}

impl CountingSource {
    fn new(outcome: FetchOutcome<Vec<Monarch>>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                calls: calls.clone(),
                outcome,
            },
            calls,
        )
    }
}

#[async_trait]
impl MonarchSource for CountingSource {
    async fn fetch(&self) -> FetchOutcome<Vec<Monarch>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }

    fn name(&self) -> &'static str {
        "counting-mock"
    }
}

fn five_min_cache() -> SnapshotCache {
    SnapshotCache::with_ttl(Duration::from_secs(300))
}

#[tokio::test]
async fn cache_hit_never_invokes_the_source() {
    let cache = five_min_cache();
    let cached = vec![mk(1, "Victoria", "House of Hanover", 1837, 1901)];
    cache.store(cached.clone());

    let (source, calls) = CountingSource::new(FetchOutcome::success(vec![], "unused"));
    let service = MonarchService::new(cache, Box::new(source));

    let outcome = service.get_monarchs().await;
    assert!(outcome.ok);
    assert_eq!(outcome.message, "from cache");
    assert_eq!(outcome.payload, Some(cached));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn cache_miss_fetches_once_then_serves_from_cache() {
    let fetched = vec![
        mk(1, "Henry VII", "House of Tudor", 1485, 1509),
        mk(2, "Henry VIII", "House of Tudor", 1509, 1547),
    ];
    let (source, calls) = CountingSource::new(FetchOutcome::success(fetched.clone(), "fetched"));
    let service = MonarchService::new(five_min_cache(), Box::new(source));

    let first = service.get_monarchs().await;
    assert!(first.ok);
    assert_eq!(first.message, "fetched");
    assert_eq!(first.payload, Some(fetched.clone()));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // Second call inside the window: served from the stored snapshot.
    let second = service.get_monarchs().await;
    assert_eq!(second.message, "from cache");
    assert_eq!(second.payload, Some(fetched));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn interregnum_records_are_filtered_and_the_filtered_list_is_cached() {
    let fetched = vec![
        mk(1, "Charles I", "House of Stuart", 1625, 1649),
        mk(2, "Oliver Cromwell", INTERREGNUM_HOUSE, 1653, 1658),
        mk(3, "Richard Cromwell", INTERREGNUM_HOUSE, 1658, 1659),
        mk(4, "Charles II", "House of Stuart", 1660, 1685),
    ];
    let (source, calls) = CountingSource::new(FetchOutcome::success(fetched, "fetched"));
    let service = MonarchService::new(five_min_cache(), Box::new(source));

    let first = service.get_monarchs().await;
    let list = first.payload.expect("payload");
    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|m| m.house != INTERREGNUM_HOUSE));

    // The cached snapshot is the filtered list, not the raw fetch.
    let second = service.get_monarchs().await;
    assert_eq!(second.payload.expect("payload").len(), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn fetch_failure_propagates_and_nothing_is_cached() {
    let (source, calls) =
        CountingSource::new(FetchOutcome::failure("There was a parsing error"));
    let service = MonarchService::new(five_min_cache(), Box::new(source));

    let first = service.get_monarchs().await;
    assert!(!first.ok);
    assert!(first.payload.is_none());
    assert_eq!(first.message, "There was a parsing error");

    // No snapshot was stored, so the next call fetches again.
    let second = service.get_monarchs().await;
    assert!(!second.ok);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn expired_snapshot_triggers_a_refetch() {
    let fetched = vec![mk(1, "Victoria", "House of Hanover", 1837, 1901)];
    let (source, calls) = CountingSource::new(FetchOutcome::success(fetched, "fetched"));

    // Zero-width window: every snapshot is expired on arrival.
    let cache = SnapshotCache::with_ttl(Duration::from_secs(0));
    let service = MonarchService::new(cache, Box::new(source));

    service.get_monarchs().await;
    service.get_monarchs().await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
