//! Caller-owned adjacency structure for the shortest-path solver.

use std::collections::HashMap;

use crate::graph::{Edge, Vertex};

/// Directed link stored in an [`Adjacency`] slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Link {
    pub(crate) target: usize,
    pub(crate) weight: i64,
}

/// Mapping from each vertex to its ordered list of `(neighbour, weight)`
/// pairs.
///
/// Vertices are kept in first-insertion order and neighbour lists in the
/// order links were added, which makes every traversal over the structure
/// deterministic. Adding a link registers both endpoints, so a vertex that
/// only ever appears as a neighbour is still part of the graph.
///
/// # Examples
/// ```
/// use arbor_core::Adjacency;
///
/// let mut roads = Adjacency::new();
/// roads.add_edge("A", "B", 5);
/// roads.add_edge("B", "A", 5);
/// assert_eq!(roads.vertices(), &["A", "B"]);
/// assert_eq!(roads.neighbours(&"A").collect::<Vec<_>>(), vec![(&"B", 5)]);
/// assert_eq!(roads.edge_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Adjacency<V> {
    slots: HashMap<V, usize>,
    labels: Vec<V>,
    links: Vec<Vec<Link>>,
}

impl<V> Default for Adjacency<V> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
            labels: Vec::new(),
            links: Vec::new(),
        }
    }
}

impl<V: Vertex> Adjacency<V> {
    /// Creates an empty adjacency structure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `vertex` without any outgoing links.
    pub fn add_vertex(&mut self, vertex: V) {
        self.intern(vertex);
    }

    /// Appends the directed link `from -> to` with `weight`.
    ///
    /// Weights are stored as given; negative weights are rejected when a
    /// search runs, not here.
    pub fn add_edge(&mut self, from: V, to: V, weight: i64) {
        let from_slot = self.intern(from);
        let target = self.intern(to);
        if let Some(links) = self.links.get_mut(from_slot) {
            links.push(Link { target, weight });
        }
    }

    /// Appends links in both directions between `left` and `right`.
    pub fn add_undirected_edge(&mut self, left: V, right: V, weight: i64) {
        self.add_edge(left.clone(), right.clone(), weight);
        self.add_edge(right, left, weight);
    }

    /// Returns every registered vertex in first-insertion order.
    #[must_use]
    pub fn vertices(&self) -> &[V] {
        &self.labels
    }

    /// Returns the number of registered vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` when no vertex is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns `true` when `vertex` is registered.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.slots.contains_key(vertex)
    }

    /// Returns the total number of directed links.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.links.iter().map(Vec::len).sum()
    }

    /// Iterates over the outgoing `(neighbour, weight)` pairs of `vertex`.
    ///
    /// Unknown vertices have no neighbours.
    pub fn neighbours<'a>(&'a self, vertex: &V) -> impl Iterator<Item = (&'a V, i64)> + use<'a, V> {
        self.slot_of(vertex)
            .and_then(|slot| self.links.get(slot))
            .into_iter()
            .flatten()
            .filter_map(|link| Some((self.labels.get(link.target)?, link.weight)))
    }

    pub(crate) fn slot_of(&self, vertex: &V) -> Option<usize> {
        self.slots.get(vertex).copied()
    }

    pub(crate) fn label(&self, slot: usize) -> Option<&V> {
        self.labels.get(slot)
    }

    pub(crate) fn links(&self, slot: usize) -> &[Link] {
        self.links.get(slot).map(Vec::as_slice).unwrap_or_default()
    }

    pub(crate) fn slot_map(&self) -> &HashMap<V, usize> {
        &self.slots
    }

    /// Iterates over every link as `(from_slot, link)`.
    pub(crate) fn all_links(&self) -> impl Iterator<Item = (usize, Link)> + '_ {
        self.links
            .iter()
            .enumerate()
            .flat_map(|(from, links)| links.iter().map(move |link| (from, *link)))
    }

    fn intern(&mut self, vertex: V) -> usize {
        if let Some(slot) = self.slots.get(&vertex) {
            return *slot;
        }
        let slot = self.labels.len();
        self.slots.insert(vertex.clone(), slot);
        self.labels.push(vertex);
        self.links.push(Vec::new());
        slot
    }
}

impl<V: Vertex> FromIterator<Edge<V>> for Adjacency<V> {
    /// Builds an adjacency structure with one directed link per edge,
    /// pointing from `source` to `target`.
    fn from_iter<I: IntoIterator<Item = Edge<V>>>(iter: I) -> Self {
        let mut adjacency = Self::new();
        for edge in iter {
            let weight = edge.weight();
            let (source, target) = edge.into_endpoints();
            adjacency.add_edge(source, target, weight);
        }
        adjacency
    }
}
