//! Counter recording behind the optional `metrics` feature.
//!
//! When the feature is enabled the algorithms emit:
//!
//! - `mst_edges_accepted` (counter)
//! - `mst_edges_rejected` (counter)
//! - `frontier_relaxations` (counter)
//! - `frontier_stale_entries_skipped` (counter)
//!
//! Without the feature every recorder is a no-op.

pub(crate) const MST_EDGES_ACCEPTED: &str = "mst_edges_accepted";
pub(crate) const MST_EDGES_REJECTED: &str = "mst_edges_rejected";
pub(crate) const FRONTIER_RELAXATIONS: &str = "frontier_relaxations";
pub(crate) const FRONTIER_STALE_ENTRIES_SKIPPED: &str = "frontier_stale_entries_skipped";

#[cfg(feature = "metrics")]
pub(crate) fn record(counter: &'static str, count: u64) {
    if count > 0 {
        metrics::counter!(counter).increment(count);
    }
}

#[cfg(not(feature = "metrics"))]
pub(crate) const fn record(_counter: &'static str, _count: u64) {}
