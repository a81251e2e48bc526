//! Seeded synthetic graphs for benchmarking.
//!
//! Weighted graphs are a random spanning tree over `0..vertex_count` plus a
//! configurable number of extra edges, so every vertex is reachable from `0`.
//! Almost-trees are random rooted trees over `1..=vertex_count` with one
//! extra edge pointing back into the root.

use arbor_core::{Adjacency, Edge, ParentEdge};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The requested maximum weight was not positive.
    #[error("maximum weight must be positive, got {got}")]
    NonPositiveMaxWeight {
        /// Rejected maximum weight.
        got: i64,
    },
}

/// Configuration for synthetic weighted graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices to generate.
    pub vertex_count: usize,
    /// Number of edges added on top of the spanning tree.
    pub extra_edges: usize,
    /// Weights are drawn from `0..=max_weight`.
    pub max_weight: i64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Weighted undirected graph generated from a [`SyntheticGraphConfig`].
///
/// # Examples
///
/// ```
/// use arbor_benches::source::{SyntheticGraph, SyntheticGraphConfig};
///
/// let config = SyntheticGraphConfig { vertex_count: 10, extra_edges: 5, max_weight: 100, seed: 42 };
/// let graph = SyntheticGraph::generate(&config).expect("valid config");
/// assert_eq!(graph.edges().len(), 14);
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    vertex_count: usize,
    edges: Vec<Edge<usize>>,
}

impl SyntheticGraph {
    /// Generates the graph eagerly from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::ZeroVertices`] if `vertex_count` is zero,
    /// or [`SyntheticError::NonPositiveMaxWeight`] if `max_weight < 1`.
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, SyntheticError> {
        if config.vertex_count == 0 {
            return Err(SyntheticError::ZeroVertices);
        }
        if config.max_weight < 1 {
            return Err(SyntheticError::NonPositiveMaxWeight {
                got: config.max_weight,
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let n = config.vertex_count;
        let mut edges = Vec::with_capacity(n.saturating_sub(1).saturating_add(config.extra_edges));
        for vertex in 1..n {
            let parent = rng.gen_range(0..vertex);
            edges.push(Edge::new(parent, vertex, rng.gen_range(0..=config.max_weight)));
        }
        for _ in 0..config.extra_edges {
            let source = rng.gen_range(0..n);
            let target = rng.gen_range(0..n);
            edges.push(Edge::new(source, target, rng.gen_range(0..=config.max_weight)));
        }

        Ok(Self {
            vertex_count: n,
            edges,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the generated edges.
    #[must_use]
    pub fn edges(&self) -> &[Edge<usize>] {
        &self.edges
    }

    /// Builds an adjacency structure with a link in both directions for
    /// every edge.
    #[must_use]
    pub fn adjacency(&self) -> Adjacency<usize> {
        let mut adjacency = Adjacency::new();
        for vertex in 0..self.vertex_count {
            adjacency.add_vertex(vertex);
        }
        for edge in &self.edges {
            adjacency.add_undirected_edge(*edge.source(), *edge.target(), edge.weight());
        }
        adjacency
    }
}

/// Generates a rooted tree over `1..=vertex_count` with one extra edge
/// closing a cycle through the root.
///
/// Edge order is parent-before-child except for the extra edge, which is
/// appended last.
///
/// # Errors
///
/// Returns [`SyntheticError::ZeroVertices`] if `vertex_count` is zero.
///
/// # Examples
///
/// ```
/// use arbor_benches::source::almost_tree;
///
/// let edges = almost_tree(8, 7).expect("valid config");
/// assert_eq!(edges.len(), 8);
/// ```
pub fn almost_tree(vertex_count: usize, seed: u64) -> Result<Vec<ParentEdge>, SyntheticError> {
    if vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices);
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut edges: Vec<ParentEdge> = (2..=vertex_count)
        .map(|child| ParentEdge::new(rng.gen_range(1..child), child))
        .collect();
    edges.push(ParentEdge::new(rng.gen_range(1..=vertex_count), 1));
    Ok(edges)
}
