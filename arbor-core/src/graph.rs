//! Shared graph vocabulary: the vertex bound and the weighted edge record.

use std::{fmt, hash::Hash, sync::Arc};

/// Identity-only vertex label.
///
/// Vertices are compared by equality and hashing alone; no ordering is
/// implied. `Display` is used when a label has to appear in an error or a
/// rendered path. Any `Clone + Eq + Hash + Display + Debug` type qualifies,
/// so both `&str`/`String` and integer labels work.
pub trait Vertex: Clone + Eq + Hash + fmt::Display + fmt::Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + fmt::Display + fmt::Debug {}

/// Renders a vertex label for storage inside an error value.
pub(crate) fn label<V: Vertex>(vertex: &V) -> Arc<str> {
    Arc::from(vertex.to_string())
}

/// A weighted edge between two vertices.
///
/// The minimum spanning forest treats edges as undirected, so `source` and
/// `target` carry no meaning beyond naming the endpoints.
///
/// # Examples
/// ```
/// use arbor_core::Edge;
///
/// let edge = Edge::new("A", "B", 5);
/// assert_eq!(edge.source(), &"A");
/// assert_eq!(edge.target(), &"B");
/// assert_eq!(edge.weight(), 5);
/// assert_eq!(edge.to_string(), "A - B : 5");
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Edge<V> {
    source: V,
    target: V,
    weight: i64,
}

impl<V> Edge<V> {
    /// Creates a new edge.
    #[must_use]
    pub const fn new(source: V, target: V, weight: i64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> &V { &self.source }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> &V { &self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i64 { self.weight }

    /// Consumes the edge and returns `(source, target)`.
    #[must_use]
    pub fn into_endpoints(self) -> (V, V) {
        (self.source, self.target)
    }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub fn is_self_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.source == self.target
    }
}

impl<V> From<(V, V, i64)> for Edge<V> {
    fn from((source, target, weight): (V, V, i64)) -> Self {
        Self::new(source, target, weight)
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} : {}", self.source, self.target, self.weight)
    }
}
