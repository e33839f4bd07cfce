// src/stats.rs
//! # Reign Statistics
//! Pure aggregate queries over an in-memory monarch list. No I/O, no hidden
//! state; each query is a deterministic function of its input.
//!
//! Ties break toward the earliest record in input order regardless of the
//! execution strategy: the parallel path below only accelerates duration
//! computation, selection always runs sequentially over the in-order
//! duration vector.

use std::collections::HashMap;

use crate::types::Monarch;

/// Sentinel returned by the max-selection queries on empty input.
pub const NONE_LABEL: &str = "None";

pub fn total_count(monarchs: &[Monarch]) -> usize {
    monarchs.len()
}

/// `(name, reign length)` of the longest-ruling monarch; the first record in
/// input order wins ties. Empty input yields the sentinel.
pub fn longest_reign(monarchs: &[Monarch], parallel_threshold: usize) -> (String, i32) {
    let durations = reign_durations(monarchs, parallel_threshold);

    let mut best: Option<(usize, i32)> = None;
    for (idx, &d) in durations.iter().enumerate() {
        match best {
            Some((_, b)) if d <= b => {}
            _ => best = Some((idx, d)),
        }
    }

    match best {
        Some((idx, d)) => (monarchs[idx].name.clone(), d),
        None => (NONE_LABEL.to_string(), 0),
    }
}

/// `(house, summed reign length)` of the longest-ruling house. Grouping is
/// exact string match on the house label; negative per-record durations from
/// malformed data reduce the sum. First-seen house wins ties.
pub fn longest_ruling_house(monarchs: &[Monarch], parallel_threshold: usize) -> (String, i32) {
    let durations = reign_durations(monarchs, parallel_threshold);

    // (first-seen index, summed duration) per house label.
    let mut totals: HashMap<&str, (usize, i32)> = HashMap::new();
    for (idx, m) in monarchs.iter().enumerate() {
        let entry = totals.entry(m.house.as_str()).or_insert((idx, 0));
        entry.1 += durations[idx];
    }

    let mut best: Option<(&str, usize, i32)> = None;
    for (&house, &(first_idx, total)) in totals.iter() {
        let replace = match best {
            None => true,
            Some((_, best_idx, best_total)) => {
                total > best_total || (total == best_total && first_idx < best_idx)
            }
        };
        if replace {
            best = Some((house, first_idx, total));
        }
    }

    match best {
        Some((house, _, total)) => (house.to_string(), total),
        None => (NONE_LABEL.to_string(), 0),
    }
}

/// Most frequent first token of the name field (split on a single space).
/// First-seen token wins ties; `None` for empty input.
pub fn most_common_first_name(monarchs: &[Monarch]) -> Option<String> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (idx, m) in monarchs.iter().enumerate() {
        let first = m.name.split(' ').next().unwrap_or_default();
        let entry = counts.entry(first).or_insert((idx, 0));
        entry.1 += 1;
    }

    let mut best: Option<(&str, usize, usize)> = None;
    for (&name, &(first_idx, count)) in counts.iter() {
        let replace = match best {
            None => true,
            Some((_, best_idx, best_count)) => {
                count > best_count || (count == best_count && first_idx < best_idx)
            }
        };
        if replace {
            best = Some((name, first_idx, count));
        }
    }

    best.map(|(name, _, _)| name.to_string())
}

/// Per-record reign durations in input order. Above the threshold the vector
/// is filled by chunked worker threads; order is preserved so the callers'
/// first-seen tie-breaks are unaffected either way.
fn reign_durations(monarchs: &[Monarch], parallel_threshold: usize) -> Vec<i32> {
    if monarchs.len() <= parallel_threshold {
        return monarchs.iter().map(Monarch::reign_years).collect();
    }

    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    let chunk = monarchs.len().div_ceil(workers).max(1);

    let mut durations = vec![0i32; monarchs.len()];
    std::thread::scope(|scope| {
        for (src, dst) in monarchs.chunks(chunk).zip(durations.chunks_mut(chunk)) {
            scope.spawn(move || {
                for (m, d) in src.iter().zip(dst.iter_mut()) {
                    *d = m.reign_years();
                }
            });
        }
    });
    durations
}
