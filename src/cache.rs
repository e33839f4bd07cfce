//! # Snapshot Cache
//! Single-slot cache for the fetched monarch list (default 5 minutes).
//!
//! Holds one snapshot plus its capture time and answers freshness against
//! the configured duration. An expired snapshot is logically absent even
//! though the slot is not cleared until the next `store`. Whole-replacement
//! only: no per-item expiry, no capacity bound.

use std::{
    sync::Mutex,
    time::{Duration, Instant},
};

use crate::types::Monarch;

#[derive(Debug)]
pub struct SnapshotCache {
    inner: Mutex<Inner>,
    ttl: Duration,
}

#[derive(Debug)]
struct Inner {
    snapshot: Option<Snapshot>,
}

#[derive(Debug)]
struct Snapshot {
    monarchs: Vec<Monarch>,
    captured_at: Instant,
}

impl SnapshotCache {
    /// Create a cache with the given validity window.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(Inner { snapshot: None }),
            ttl,
        }
    }

    /// Convenience constructor for the default 5-minute window.
    pub fn new_5m() -> Self {
        Self::with_ttl(Duration::from_secs(5 * 60))
    }

    /// Replace the snapshot wholesale and stamp "now".
    pub fn store(&self, monarchs: Vec<Monarch>) {
        self.store_at(monarchs, Instant::now());
    }

    /// Replace the snapshot wholesale with an explicit capture time.
    pub fn store_at(&self, monarchs: Vec<Monarch>, now: Instant) {
        let mut inner = self.inner.lock().expect("snapshot cache mutex poisoned");
        inner.snapshot = Some(Snapshot {
            monarchs,
            captured_at: now,
        });
    }

    /// Return a copy of the snapshot while it is still fresh; `None` once
    /// expired or when nothing was stored yet.
    pub fn try_get(&self) -> Option<Vec<Monarch>> {
        self.try_get_at(Instant::now())
    }

    /// Same as [`SnapshotCache::try_get`] with an explicit "now", for
    /// deterministic expiry tests.
    pub fn try_get_at(&self, now: Instant) -> Option<Vec<Monarch>> {
        let inner = self.inner.lock().expect("snapshot cache mutex poisoned");
        inner.snapshot.as_ref().and_then(|s| {
            if now.duration_since(s.captured_at) < self.ttl {
                Some(s.monarchs.clone())
            } else {
                None
            }
        })
    }

    /// Validity window in seconds (useful for diagnostics).
    pub fn ttl_secs(&self) -> u64 {
        self.ttl.as_secs()
    }
}
