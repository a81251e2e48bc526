//! Property checks: removing the resolved edge always leaves a rooted tree.

use std::collections::HashSet;

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rstest::rstest;
use test_strategy::Arbitrary;

use crate::test_utils::suite_proptest_config;

use super::{ParentEdge, RemovalReason, resolve};

const MAX_VERTICES: usize = 12;

/// Where the extra edge points.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
enum ExtraEdge {
    /// Into the root, which leaves every vertex with one parent.
    IntoRoot,
    /// Into a non-root vertex, giving it a second parent.
    IntoChild,
}

#[derive(Clone, Debug)]
struct AlmostTree {
    root: usize,
    extra: ParentEdge,
    edges: Vec<ParentEdge>,
}

fn generate(kind: ExtraEdge, rng: &mut SmallRng) -> AlmostTree {
    let vertex_count = rng.gen_range(2..=MAX_VERTICES);
    let mut labels: Vec<usize> = (1..=vertex_count).collect();
    labels.shuffle(rng);
    let root = labels[0];

    let mut edges: Vec<ParentEdge> = (1..vertex_count)
        .map(|index| ParentEdge::new(labels[rng.gen_range(0..index)], labels[index]))
        .collect();
    let existing: HashSet<ParentEdge> = edges.iter().copied().collect();

    let extra = loop {
        let parent = rng.gen_range(1..=vertex_count);
        let child = match kind {
            ExtraEdge::IntoRoot => root,
            ExtraEdge::IntoChild => labels[rng.gen_range(1..vertex_count)],
        };
        let candidate = ParentEdge::new(parent, child);
        if !existing.contains(&candidate) {
            break candidate;
        }
    };
    edges.push(extra);
    edges.shuffle(rng);

    AlmostTree { root, extra, edges }
}

/// Independent check that `edges` minus `removed` is a tree rooted at a
/// single vertex reaching all of `1..=n`.
fn is_rooted_tree(edges: &[ParentEdge], removed: usize) -> bool {
    let n = edges.len();
    let kept: Vec<ParentEdge> = edges
        .iter()
        .enumerate()
        .filter(|(position, _)| *position != removed)
        .map(|(_, edge)| *edge)
        .collect();
    let children: HashSet<usize> = kept.iter().map(|edge| edge.child()).collect();
    if children.len() != kept.len() {
        return false;
    }
    let roots: Vec<usize> = (1..=n).filter(|label| !children.contains(label)).collect();
    let [root] = roots.as_slice() else {
        return false;
    };
    let mut reached = HashSet::from([*root]);
    let mut frontier = vec![*root];
    while let Some(vertex) = frontier.pop() {
        for edge in kept.iter().filter(|edge| edge.parent() == vertex) {
            if reached.insert(edge.child()) {
                frontier.push(edge.child());
            }
        }
    }
    reached.len() == n
}

fn run_resolution(fixture: &AlmostTree) -> TestCaseResult {
    let resolution = resolve(&fixture.edges)
        .map_err(|err| TestCaseError::fail(format!("resolve failed: {err} for {fixture:?}")))?;

    prop_assert_eq!(fixture.edges.get(resolution.position()), Some(&resolution.edge()));
    prop_assert!(
        is_rooted_tree(&fixture.edges, resolution.position()),
        "removing {} does not leave a tree: {:?}",
        resolution.edge(),
        fixture
    );
    if fixture.extra.child() == fixture.root {
        prop_assert_eq!(resolution.reason(), RemovalReason::CycleClosing);
    } else {
        prop_assert_eq!(resolution.edge().child(), fixture.extra.child());
        prop_assert_ne!(resolution.reason(), RemovalReason::CycleClosing);
    }
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn removing_the_resolved_edge_leaves_a_tree(kind in any::<ExtraEdge>(), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        run_resolution(&generate(kind, &mut rng))?;
    }

    #[test]
    fn resolution_is_deterministic(kind in any::<ExtraEdge>(), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fixture = generate(kind, &mut rng);
        prop_assert_eq!(resolve(&fixture.edges), resolve(&fixture.edges));
    }
}

#[rstest]
#[case::into_root_1(ExtraEdge::IntoRoot, 1)]
#[case::into_root_42(ExtraEdge::IntoRoot, 42)]
#[case::into_child_7(ExtraEdge::IntoChild, 7)]
#[case::into_child_42(ExtraEdge::IntoChild, 42)]
#[case::into_child_2024(ExtraEdge::IntoChild, 2024)]
fn seeded_fixtures_resolve_to_trees(#[case] kind: ExtraEdge, #[case] seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let fixture = generate(kind, &mut rng);
    run_resolution(&fixture).expect("resolution must leave a rooted tree");
}
