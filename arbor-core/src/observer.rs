//! Checkpoint observers for the graph algorithms.
//!
//! The algorithms never print. Callers that want a step-by-step narration
//! (edge accepted, vertex settled, cycle found) pass an observer to the
//! `*_observed` entry points; every hook defaults to doing nothing, so an
//! observer only implements the checkpoints it cares about.

use tracing::debug;

use crate::{graph::Edge, redundant::ParentEdge};

/// Hooks invoked while building a minimum spanning forest.
pub trait MstObserver<V> {
    /// Called after `edge` joins the forest; `total_weight` includes it.
    fn edge_accepted(&mut self, _edge: &Edge<V>, _total_weight: i64) {}

    /// Called when `edge` is skipped because its endpoints are already
    /// connected.
    fn edge_rejected(&mut self, _edge: &Edge<V>) {}
}

/// Hooks invoked during frontier relaxation.
pub trait FrontierObserver<V> {
    /// Called when `vertex` is settled at its final `distance`.
    fn vertex_settled(&mut self, _vertex: &V, _distance: i64) {}

    /// Called when relaxing `from -> to` improves the best known distance.
    fn distance_improved(&mut self, _from: &V, _to: &V, _distance: i64) {}

    /// Called when a superseded frontier entry for `vertex` is discarded.
    fn stale_entry_skipped(&mut self, _vertex: &V) {}
}

/// Hooks invoked while resolving a redundant parent edge.
pub trait ResolverObserver {
    /// Called for every input edge as it is added to the adjacency list.
    fn edge_added(&mut self, _edge: ParentEdge) {}

    /// Called when a vertex gains its second parent.
    fn two_parents_found(&mut self, _first: ParentEdge, _second: ParentEdge) {}

    /// Called when the depth-first search closes a directed cycle.
    fn cycle_found(&mut self, _closing: ParentEdge) {}
}

/// Observer that ignores every checkpoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl<V> MstObserver<V> for Silent {}
impl<V> FrontierObserver<V> for Silent {}
impl ResolverObserver for Silent {}

/// Observer that narrates every checkpoint as a `debug` tracing event.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, TracingNarrator, kruskal_observed};
///
/// let edges = [Edge::new("a", "b", 1)];
/// let forest = kruskal_observed(&edges, &mut TracingNarrator)?;
/// assert_eq!(forest.total_weight(), 1);
/// # Ok::<(), arbor_core::MstError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNarrator;

impl<V: std::fmt::Display> MstObserver<V> for TracingNarrator {
    fn edge_accepted(&mut self, edge: &Edge<V>, total_weight: i64) {
        debug!(edge = %edge, total_weight, "edge accepted into forest");
    }

    fn edge_rejected(&mut self, edge: &Edge<V>) {
        debug!(edge = %edge, "edge would close a cycle; skipped");
    }
}

impl<V: std::fmt::Display> FrontierObserver<V> for TracingNarrator {
    fn vertex_settled(&mut self, vertex: &V, distance: i64) {
        debug!(vertex = %vertex, distance, "vertex settled");
    }

    fn distance_improved(&mut self, from: &V, to: &V, distance: i64) {
        debug!(from = %from, to = %to, distance, "distance improved");
    }

    fn stale_entry_skipped(&mut self, vertex: &V) {
        debug!(vertex = %vertex, "stale frontier entry skipped");
    }
}

impl ResolverObserver for TracingNarrator {
    fn edge_added(&mut self, edge: ParentEdge) {
        debug!(edge = %edge, "parent edge added");
    }

    fn two_parents_found(&mut self, first: ParentEdge, second: ParentEdge) {
        debug!(first = %first, second = %second, "vertex with two parents detected");
    }

    fn cycle_found(&mut self, closing: ParentEdge) {
        debug!(edge = %closing, "directed cycle detected");
    }
}
