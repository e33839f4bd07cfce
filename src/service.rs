// src/service.rs
//! Cache-or-fetch orchestration for the monarch list.
//!
//! A valid snapshot short-circuits the source entirely; otherwise one fetch
//! runs, interregnum records are dropped, and the filtered list is stored
//! for the next call within the window.

use metrics::{counter, describe_counter};
use once_cell::sync::OnceCell;

use crate::cache::SnapshotCache;
use crate::source::MonarchSource;
use crate::types::{FetchOutcome, Monarch};

/// House label marking the non-dynastic interregnum period; those records
/// are not monarchs and never reach the statistics.
pub const INTERREGNUM_HOUSE: &str = "Commonwealth";

/// One-time metrics registration.
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "monarch_cache_hits_total",
            "get_monarchs calls served from the snapshot cache."
        );
        describe_counter!(
            "monarch_cache_misses_total",
            "get_monarchs calls that had to fetch."
        );
    });
}

pub struct MonarchService {
    cache: SnapshotCache,
    source: Box<dyn MonarchSource>,
}

impl MonarchService {
    pub fn new(cache: SnapshotCache, source: Box<dyn MonarchSource>) -> Self {
        Self { cache, source }
    }

    /// Return the monarch list, from cache when fresh, otherwise via one
    /// fetch from the source.
    pub async fn get_monarchs(&self) -> FetchOutcome<Vec<Monarch>> {
        ensure_metrics_described();

        if let Some(snapshot) = self.cache.try_get() {
            counter!("monarch_cache_hits_total").increment(1);
            tracing::info!(records = snapshot.len(), "serving monarchs from cache");
            return FetchOutcome::success(snapshot, "from cache");
        }

        counter!("monarch_cache_misses_total").increment(1);
        tracing::info!(source = self.source.name(), "snapshot cache miss");
        let mut outcome = self.source.fetch().await;

        // The filter only runs when a payload is present; failure outcomes
        // pass through untouched.
        if let Some(list) = outcome.payload.take() {
            let before = list.len();
            let filtered: Vec<Monarch> = list
                .into_iter()
                .filter(|m| m.house != INTERREGNUM_HOUSE)
                .collect();
            if filtered.len() < before {
                tracing::debug!(
                    dropped = before - filtered.len(),
                    "dropped interregnum records"
                );
            }
            outcome.payload = Some(filtered);
        }

        if outcome.ok {
            if let Some(list) = outcome.payload.as_ref() {
                self.cache.store(list.clone());
            }
        }

        outcome
    }
}
