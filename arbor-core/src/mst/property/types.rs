//! Fixture types for MST property tests.

use test_strategy::Arbitrary;

use crate::graph::Edge;

/// Weight and topology pattern used when generating a fixture.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum GraphShape {
    /// Weights drawn from a wide range, so ties are rare.
    Unique,
    /// Weights drawn from a pool of two or three values.
    ManyIdentical,
    /// Two vertex groups with no edge between them.
    Disconnected,
    /// Weights straddling zero.
    Mixed,
}

/// Generated graph together with the shape that produced it.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Undirected weighted edges over vertices `0..8`.
    pub edges: Vec<Edge<usize>>,
    /// Shape used during generation.
    pub shape: GraphShape,
}
