//! Benchmark parameter types.

use std::fmt;

/// Parameters for a weighted-graph benchmark run.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of edges in the graph.
    pub edge_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.vertex_count, self.edge_count)
    }
}

/// Parameters for a redundant-edge benchmark run.
#[derive(Clone, Debug)]
pub struct AlmostTreeBenchParams {
    /// Number of labels (and edges) in the input.
    pub vertex_count: usize,
}

impl fmt::Display for AlmostTreeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.vertex_count)
    }
}
