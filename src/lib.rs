// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod cache;
pub mod config;
pub mod report;
pub mod service;
pub mod source;
pub mod stats;
pub mod types;
pub mod years;

// ---- Re-exports for stable public API ----
pub use crate::cache::SnapshotCache;
pub use crate::config::Settings;
pub use crate::service::{MonarchService, INTERREGNUM_HOUSE};
pub use crate::source::{HttpMonarchSource, MonarchSource};
pub use crate::types::{FetchOutcome, Monarch};
