//! Single-source shortest paths by frontier relaxation (Dijkstra).
//!
//! The solver settles vertices in ascending distance order from a
//! min-priority [`frontier`]. Improving a distance pushes a fresh entry
//! instead of updating the old one; superseded entries are skipped when they
//! surface. Equal distances leave the frontier in insertion order, so paths
//! are reproducible run to run.
//!
//! A vertex that cannot be reached is a defined outcome
//! ([`Distance::Unreached`], [`Route::Unreachable`]), never an error.

mod adjacency;
mod frontier;

use std::{collections::HashMap, fmt, sync::Arc};

use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

use crate::{
    error::define_error_codes,
    graph::{Vertex, label},
    observer::{FrontierObserver, Silent},
    telemetry,
};

pub use self::adjacency::Adjacency;
use self::frontier::Frontier;

/// Errors returned by the shortest-path solver.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ShortestPathError {
    /// The query names a vertex the adjacency structure does not hold.
    #[error("vertex {vertex} is not part of the graph")]
    UnknownVertex {
        /// Rendered label of the missing vertex.
        vertex: Arc<str>,
    },
    /// An edge carries a negative weight.
    #[error("edge {from} -> {to} has negative weight {weight}")]
    NegativeWeight {
        /// Rendered label of the edge's origin.
        from: Arc<str>,
        /// Rendered label of the edge's destination.
        to: Arc<str>,
        /// Offending weight.
        weight: i64,
    },
    /// The first path found to a vertex is longer than `i64::MAX`.
    ///
    /// An overflowing candidate for a vertex that already has a distance is
    /// never an improvement and is ignored.
    #[error("distance to {vertex} overflowed: {distance} + {weight}")]
    DistanceOverflow {
        /// Rendered label of the vertex being relaxed.
        vertex: Arc<str>,
        /// Settled distance of the predecessor.
        distance: i64,
        /// Weight of the edge being relaxed.
        weight: i64,
    },
}

define_error_codes! {
    /// Stable codes describing [`ShortestPathError`] variants.
    enum ShortestPathErrorCode for ShortestPathError {
        /// The query referenced an unregistered vertex.
        UnknownVertex => [UnknownVertex { .. }] => "SHORTEST_PATH_UNKNOWN_VERTEX",
        /// The graph contains a negative edge weight.
        NegativeWeight => [NegativeWeight { .. }] => "SHORTEST_PATH_NEGATIVE_WEIGHT",
        /// A path length exceeded `i64::MAX`.
        DistanceOverflow => [DistanceOverflow { .. }] => "SHORTEST_PATH_DISTANCE_OVERFLOW",
    }
}

/// Configuration for a single solver run.
///
/// # Examples
/// ```
/// use arbor_core::ShortestPathQuery;
///
/// let query = ShortestPathQuery::new("A").with_target("B");
/// assert_eq!(query.source(), &"A");
/// assert_eq!(query.target(), Some(&"B"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPathQuery<V> {
    source: V,
    target: Option<V>,
}

impl<V> ShortestPathQuery<V> {
    /// Starts a query rooted at `source` that settles every reachable vertex.
    #[must_use]
    pub const fn new(source: V) -> Self {
        Self {
            source,
            target: None,
        }
    }

    /// Stops the run as soon as `target` is settled.
    #[must_use]
    pub fn with_target(mut self, target: V) -> Self {
        self.target = Some(target);
        self
    }

    /// Returns the source vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> &V { &self.source }

    /// Returns the target vertex, if one was set.
    #[must_use]
    pub const fn target(&self) -> Option<&V> {
        self.target.as_ref()
    }
}

/// Best known distance from the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Distance {
    /// The vertex was reached with the given total weight.
    Reached(i64),
    /// No path from the source has been found.
    Unreached,
}

impl Distance {
    /// Returns the distance value when reached.
    #[must_use]
    pub const fn value(self) -> Option<i64> {
        match self {
            Self::Reached(distance) => Some(distance),
            Self::Unreached => None,
        }
    }

    /// Returns `true` for [`Distance::Reached`].
    #[must_use]
    pub const fn is_reached(self) -> bool {
        matches!(self, Self::Reached(_))
    }
}

impl From<Option<i64>> for Distance {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Self::Unreached, Self::Reached)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reached(distance) => write!(f, "{distance}"),
            Self::Unreached => f.write_str("unreached"),
        }
    }
}

/// Ordered vertex sequence from the source to a destination.
///
/// # Examples
/// ```
/// use arbor_core::{Adjacency, shortest_route};
///
/// let mut roads = Adjacency::new();
/// roads.add_edge("A", "B", 5);
/// let route = shortest_route(&roads, "A", "B")?;
/// let path = route.path().expect("B is reachable");
/// assert_eq!(path.to_string(), "A → B");
/// assert_eq!(path.distance(), 5);
/// # Ok::<(), arbor_core::ShortestPathError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<V> {
    vertices: Vec<V>,
    distance: i64,
}

impl<V> Path<V> {
    /// Returns the vertices from source to destination, inclusive.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &[V] { &self.vertices }

    /// Returns the summed edge weight along the path.
    #[must_use]
    #[rustfmt::skip]
    pub const fn distance(&self) -> i64 { self.distance }

    /// Returns the number of edges on the path.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Consumes the path and returns its vertices.
    #[must_use]
    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }
}

impl<V: fmt::Display> fmt::Display for Path<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, vertex) in self.vertices.iter().enumerate() {
            if index > 0 {
                f.write_str(" → ")?;
            }
            write!(f, "{vertex}")?;
        }
        Ok(())
    }
}

/// Outcome of asking for the route to a specific vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route<V> {
    /// A path exists.
    Reachable(Path<V>),
    /// The vertex is not reachable from the source.
    Unreachable,
}

impl<V> Route<V> {
    /// Returns the path when reachable.
    #[must_use]
    pub const fn path(&self) -> Option<&Path<V>> {
        match self {
            Self::Reachable(path) => Some(path),
            Self::Unreachable => None,
        }
    }

    /// Returns the route distance, or [`Distance::Unreached`].
    #[must_use]
    pub const fn distance(&self) -> Distance {
        match self {
            Self::Reachable(path) => Distance::Reached(path.distance),
            Self::Unreachable => Distance::Unreached,
        }
    }

    /// Returns `true` when a path exists.
    #[must_use]
    pub const fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable(_))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Record {
    distance: Option<i64>,
    predecessor: Option<usize>,
    settled: bool,
}

/// Distance table and predecessor map produced by a solver run.
///
/// Every vertex of the adjacency structure has an entry. When the query had
/// a target the run may stop early; [`ShortestPaths::is_settled`] tells which
/// distances are final.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPaths<V: Vertex> {
    labels: Vec<V>,
    slots: HashMap<V, usize>,
    records: Vec<Record>,
    source: V,
    target: Option<usize>,
}

impl<V: Vertex> ShortestPaths<V> {
    /// Returns the source vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> &V { &self.source }

    /// Returns the best known distance to `vertex`, or `None` when the
    /// vertex is not part of the graph.
    ///
    /// After a run that stopped at its target, unsettled vertices report a
    /// tentative distance; check [`Self::is_settled`] before treating it as
    /// final.
    #[must_use]
    pub fn distance(&self, vertex: &V) -> Option<Distance> {
        self.record(vertex).map(|record| record.distance.into())
    }

    /// Returns `true` when the distance to `vertex` is final.
    #[must_use]
    pub fn is_settled(&self, vertex: &V) -> bool {
        self.record(vertex).is_some_and(|record| record.settled)
    }

    /// Returns the vertex `vertex` was last improved from.
    #[must_use]
    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.record(vertex)?
            .predecessor
            .and_then(|slot| self.labels.get(slot))
    }

    /// Returns the number of settled vertices.
    #[must_use]
    pub fn settled_count(&self) -> usize {
        self.records.iter().filter(|record| record.settled).count()
    }

    /// Iterates over every vertex and its distance, in adjacency insertion
    /// order.
    ///
    /// Distances of unsettled vertices are tentative when the run stopped at
    /// its target. Use [`Self::settled_distances`] for final values only.
    pub fn distances(&self) -> impl Iterator<Item = (&V, Distance)> {
        self.labels
            .iter()
            .zip(&self.records)
            .map(|(vertex, record)| (vertex, record.distance.into()))
    }

    /// Iterates over settled vertices and their final distances, in
    /// adjacency insertion order.
    pub fn settled_distances(&self) -> impl Iterator<Item = (&V, i64)> {
        self.labels
            .iter()
            .zip(&self.records)
            .filter(|(_, record)| record.settled)
            .filter_map(|(vertex, record)| record.distance.map(|distance| (vertex, distance)))
    }

    /// Reconstructs the route to `vertex` by walking predecessors back to
    /// the source.
    ///
    /// Returns `None` when `vertex` is not part of the graph.
    #[must_use]
    pub fn route_to(&self, vertex: &V) -> Option<Route<V>> {
        let slot = self.slots.get(vertex).copied()?;
        Some(self.route_from_slot(slot))
    }

    /// Returns the route to the query's target, if the query had one.
    #[must_use]
    pub fn target_route(&self) -> Option<Route<V>> {
        self.target.map(|slot| self.route_from_slot(slot))
    }

    fn record(&self, vertex: &V) -> Option<&Record> {
        self.slots
            .get(vertex)
            .and_then(|slot| self.records.get(*slot))
    }

    fn route_from_slot(&self, slot: usize) -> Route<V> {
        let Some(distance) = self.records.get(slot).and_then(|record| record.distance) else {
            return Route::Unreachable;
        };
        let mut slots: Vec<usize> = std::iter::successors(Some(slot), |current| {
            self.records.get(*current).and_then(|record| record.predecessor)
        })
        .take(self.records.len())
        .collect();
        slots.reverse();
        let vertices = slots
            .into_iter()
            .filter_map(|slot| self.labels.get(slot).cloned())
            .collect();
        Route::Reachable(Path { vertices, distance })
    }
}

/// Computes shortest distances from the query's source.
///
/// # Errors
/// - [`ShortestPathError::NegativeWeight`] when any edge weight is negative;
///   the check runs before traversal.
/// - [`ShortestPathError::UnknownVertex`] when the source or target is not
///   registered.
/// - [`ShortestPathError::DistanceOverflow`] when the first path found to a
///   vertex is longer than `i64::MAX`.
///
/// # Examples
/// ```
/// use arbor_core::{Adjacency, Distance, ShortestPathQuery, dijkstra};
///
/// let mut graph = Adjacency::new();
/// graph.add_edge("A", "B", 5);
/// graph.add_edge("B", "A", 5);
/// graph.add_vertex("C");
///
/// let paths = dijkstra(&graph, &ShortestPathQuery::new("A"))?;
/// assert_eq!(paths.distance(&"B"), Some(Distance::Reached(5)));
/// assert_eq!(paths.distance(&"C"), Some(Distance::Unreached));
/// # Ok::<(), arbor_core::ShortestPathError>(())
/// ```
pub fn dijkstra<V: Vertex>(
    adjacency: &Adjacency<V>,
    query: &ShortestPathQuery<V>,
) -> Result<ShortestPaths<V>, ShortestPathError> {
    dijkstra_observed(adjacency, query, &mut Silent)
}

/// Computes the route from `source` to `target`, stopping once `target` is
/// settled.
///
/// # Errors
/// Same conditions as [`dijkstra`].
pub fn shortest_route<V: Vertex>(
    adjacency: &Adjacency<V>,
    source: V,
    target: V,
) -> Result<Route<V>, ShortestPathError> {
    let query = ShortestPathQuery::new(source).with_target(target);
    let paths = dijkstra(adjacency, &query)?;
    Ok(paths.target_route().unwrap_or(Route::Unreachable))
}

/// Computes shortest distances, reporting every settled vertex, improved
/// distance and skipped stale entry to `observer`.
///
/// # Errors
/// Same conditions as [`dijkstra`].
#[instrument(
    name = "shortest_path.dijkstra",
    skip_all,
    fields(
        vertices = adjacency.len(),
        edges = adjacency.edge_count(),
        settled = field::Empty,
    ),
)]
pub fn dijkstra_observed<V, O>(
    adjacency: &Adjacency<V>,
    query: &ShortestPathQuery<V>,
    observer: &mut O,
) -> Result<ShortestPaths<V>, ShortestPathError>
where
    V: Vertex,
    O: FrontierObserver<V> + ?Sized,
{
    reject_negative_weights(adjacency)?;
    let source = resolve(adjacency, query.source())?;
    let target = query
        .target()
        .map(|target| resolve(adjacency, target))
        .transpose()?;

    let labels = adjacency.vertices();
    let mut records = vec![Record::default(); labels.len()];
    if let Some(record) = records.get_mut(source) {
        record.distance = Some(0);
    }

    let mut frontier = Frontier::default();
    frontier.push(source, 0);
    let mut relaxations = 0_u64;
    let mut stale = 0_u64;

    while let Some(entry) = frontier.pop() {
        let Some(record) = records.get_mut(entry.slot) else {
            continue;
        };
        if record.settled {
            stale = stale.saturating_add(1);
            if let Some(vertex) = labels.get(entry.slot) {
                observer.stale_entry_skipped(vertex);
            }
            continue;
        }
        record.settled = true;
        let Some(from) = labels.get(entry.slot) else {
            continue;
        };
        observer.vertex_settled(from, entry.distance);
        if target == Some(entry.slot) {
            break;
        }

        for link in adjacency.links(entry.slot) {
            let Some(neighbour) = records.get_mut(link.target) else {
                continue;
            };
            if neighbour.settled {
                continue;
            }
            // An overflowing sum can never beat a distance that fits in `i64`.
            let Some(candidate) = entry.distance.checked_add(link.weight) else {
                if neighbour.distance.is_some() {
                    continue;
                }
                let vertex = labels.get(link.target).map_or_else(|| Arc::from(""), label);
                warn!(%vertex, distance = entry.distance, weight = link.weight, "distance overflowed");
                return Err(ShortestPathError::DistanceOverflow {
                    vertex,
                    distance: entry.distance,
                    weight: link.weight,
                });
            };
            if neighbour.distance.is_none_or(|current| candidate < current) {
                neighbour.distance = Some(candidate);
                neighbour.predecessor = Some(entry.slot);
                frontier.push(link.target, candidate);
                relaxations = relaxations.saturating_add(1);
                if let Some(to) = labels.get(link.target) {
                    observer.distance_improved(from, to, candidate);
                }
            }
        }
    }

    telemetry::record(telemetry::FRONTIER_RELAXATIONS, relaxations);
    telemetry::record(telemetry::FRONTIER_STALE_ENTRIES_SKIPPED, stale);

    let paths = ShortestPaths {
        labels: labels.to_vec(),
        slots: adjacency.slot_map().clone(),
        records,
        source: query.source().clone(),
        target,
    };
    let settled = paths.settled_count();
    let target_reached = paths.target_route().is_some_and(|route| route.is_reachable());
    Span::current().record("settled", settled);
    info!(
        settled,
        relaxations,
        stale_skipped = stale,
        target_reached,
        "shortest paths computed"
    );
    Ok(paths)
}

fn resolve<V: Vertex>(adjacency: &Adjacency<V>, vertex: &V) -> Result<usize, ShortestPathError> {
    adjacency.slot_of(vertex).ok_or_else(|| {
        warn!(vertex = %vertex, "query vertex is not part of the graph");
        ShortestPathError::UnknownVertex {
            vertex: label(vertex),
        }
    })
}

fn reject_negative_weights<V: Vertex>(adjacency: &Adjacency<V>) -> Result<(), ShortestPathError> {
    let Some((from, link)) = adjacency.all_links().find(|(_, link)| link.weight < 0) else {
        return Ok(());
    };
    let render = |slot: usize| adjacency.label(slot).map_or_else(|| Arc::from(""), label);
    let error = ShortestPathError::NegativeWeight {
        from: render(from),
        to: render(link.target),
        weight: link.weight,
    };
    warn!(error = %error, "negative edge weight rejected");
    Err(error)
}


#[cfg(test)]
mod property;
