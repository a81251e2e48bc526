//! Minimum spanning forest construction (Kruskal).
//!
//! Edges are visited in ascending weight order, with a stable sort so equal
//! weights keep their input order. An edge joins the forest when its
//! endpoints sit in different [`DisjointSet`] classes; otherwise it would
//! close a cycle and is skipped. A disconnected input yields one tree per
//! connected component rather than an error.

use std::{collections::HashSet, sync::Arc};

use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

use crate::{
    disjoint_set::{DisjointSet, DisjointSetError},
    error::define_error_codes,
    graph::{Edge, Vertex},
    observer::{MstObserver, Silent},
    telemetry,
};

/// Errors returned while computing a minimum spanning forest.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// Adding the edge's weight overflowed the running `i64` total.
    ///
    /// The total is accumulated in ascending weight order, so a run of large
    /// negative weights can overflow before later positive weights would
    /// bring the final sum back into range.
    #[error("total weight overflowed after accumulating {accumulated} when adding edge {edge}")]
    WeightOverflow {
        /// Rendered edge whose weight could not be added.
        edge: Arc<str>,
        /// Total weight accumulated before the failing edge.
        accumulated: i64,
    },
    /// The working disjoint set rejected a vertex.
    #[error(transparent)]
    DisjointSet(#[from] DisjointSetError),
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// Adding an edge weight overflowed the accumulator.
        WeightOverflow => [WeightOverflow { .. }] => "MST_WEIGHT_OVERFLOW",
        /// The working disjoint set rejected a vertex.
        DisjointSet => [DisjointSet(..)] => "MST_DISJOINT_SET",
    }
}

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningForest<V> {
    edges: Vec<Edge<V>>,
    total_weight: i64,
    vertex_count: usize,
    component_count: usize,
}

impl<V> SpanningForest<V> {
    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<V>] { &self.edges }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> i64 { self.total_weight }

    /// Returns the number of distinct vertices mentioned by the input.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of trees in the forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Consumes the forest and returns its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge<V>> {
        self.edges
    }
}

/// Computes a minimum spanning forest of the undirected graph `edges`.
///
/// The vertex set is every vertex mentioned by at least one edge.
/// Self-loops are never accepted. Negative weights are allowed.
///
/// # Errors
/// Returns [`MstError::WeightOverflow`] when the running total of accepted
/// weights, summed in ascending weight order, leaves the `i64` range.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, kruskal};
///
/// let edges = [Edge::new(1, 2, 1), Edge::new(1, 3, 2), Edge::new(2, 3, 3)];
/// let forest = kruskal(&edges)?;
/// assert_eq!(forest.edges(), &[Edge::new(1, 2, 1), Edge::new(1, 3, 2)]);
/// assert_eq!(forest.total_weight(), 3);
/// assert!(forest.is_tree());
/// # Ok::<(), arbor_core::MstError>(())
/// ```
pub fn kruskal<V: Vertex>(edges: &[Edge<V>]) -> Result<SpanningForest<V>, MstError> {
    kruskal_observed(edges, &mut Silent)
}

/// Computes a minimum spanning forest, reporting each accepted or rejected
/// edge to `observer`.
///
/// Edges sorted after the point where the forest already spans every vertex
/// are neither visited nor reported.
///
/// # Errors
/// Returns [`MstError::WeightOverflow`] when the running total of accepted
/// weights, summed in ascending weight order, leaves the `i64` range.
#[instrument(
    name = "mst.kruskal",
    skip_all,
    fields(edges = edges.len(), vertices = field::Empty),
)]
pub fn kruskal_observed<V, O>(
    edges: &[Edge<V>],
    observer: &mut O,
) -> Result<SpanningForest<V>, MstError>
where
    V: Vertex,
    O: MstObserver<V> + ?Sized,
{
    let vertices = vertex_universe(edges);
    let vertex_count = vertices.len();
    Span::current().record("vertices", vertex_count);

    let mut sorted: Vec<&Edge<V>> = edges.iter().collect();
    sorted.sort_by_key(|edge| edge.weight());

    let mut set = DisjointSet::new();
    set.make_set(vertices);

    let mut accepted = Vec::with_capacity(vertex_count.saturating_sub(1));
    let mut total_weight = 0_i64;
    let mut rejected = 0_u64;

    for edge in sorted {
        if set.set_count() <= 1 {
            break;
        }
        if !set.union(edge.source(), edge.target())? {
            rejected = rejected.saturating_add(1);
            observer.edge_rejected(edge);
            continue;
        }
        total_weight = total_weight.checked_add(edge.weight()).ok_or_else(|| {
            warn!(edge = %edge, accumulated = total_weight, "total weight overflowed");
            MstError::WeightOverflow {
                edge: Arc::from(edge.to_string()),
                accumulated: total_weight,
            }
        })?;
        accepted.push(edge.clone());
        observer.edge_accepted(edge, total_weight);
    }

    telemetry::record(telemetry::MST_EDGES_ACCEPTED, accepted.len() as u64);
    telemetry::record(telemetry::MST_EDGES_REJECTED, rejected);

    let forest = SpanningForest {
        edges: accepted,
        total_weight,
        vertex_count,
        component_count: set.set_count(),
    };
    info!(
        accepted = forest.edges.len(),
        rejected,
        total_weight = forest.total_weight,
        components = forest.component_count,
        "spanning forest built"
    );
    Ok(forest)
}

/// Collects every vertex mentioned by `edges`, in first-appearance order.
fn vertex_universe<V: Vertex>(edges: &[Edge<V>]) -> Vec<V> {
    let mut seen = HashSet::new();
    let mut vertices = Vec::new();
    for vertex in edges.iter().flat_map(|edge| [edge.source(), edge.target()]) {
        if seen.insert(vertex) {
            vertices.push(vertex.clone());
        }
    }
    vertices
}


#[cfg(test)]
mod property;
