//! Graph generators for MST property tests.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::Edge;

use super::types::{GraphShape, MstFixture};

/// Largest vertex count; keeps the brute-force oracle cheap.
pub(super) const MAX_VERTICES: usize = 8;
/// Largest edge count; the oracle enumerates `2^MAX_EDGES` subsets.
pub(super) const MAX_EDGES: usize = 12;

pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(2..=MAX_VERTICES);
    let edge_count = rng.gen_range(1..=MAX_EDGES);
    let pool: Vec<i64> = (0..rng.gen_range(2..=3))
        .map(|_| rng.gen_range(1..=5))
        .collect();
    let split = vertex_count.div_ceil(2);

    let mut edges = Vec::with_capacity(edge_count);
    while edges.len() < edge_count {
        let (source, target) = match shape {
            GraphShape::Disconnected if vertex_count >= 4 => {
                if rng.gen_bool(0.5) {
                    (rng.gen_range(0..split), rng.gen_range(0..split))
                } else {
                    (
                        rng.gen_range(split..vertex_count),
                        rng.gen_range(split..vertex_count),
                    )
                }
            }
            _ => (rng.gen_range(0..vertex_count), rng.gen_range(0..vertex_count)),
        };
        if source == target {
            continue;
        }
        let weight = match shape {
            GraphShape::Unique | GraphShape::Disconnected => rng.gen_range(1..=1_000),
            GraphShape::ManyIdentical => pool[rng.gen_range(0..pool.len())],
            GraphShape::Mixed => rng.gen_range(-50..=50),
        };
        edges.push(Edge::new(source, target, weight));
    }

    MstFixture { edges, shape }
}
