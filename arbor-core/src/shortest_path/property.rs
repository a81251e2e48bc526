//! Property checks for the frontier relaxation solver against exhaustive
//! simple-path enumeration.

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;

use crate::test_utils::suite_proptest_config;

use super::{Adjacency, Distance, ShortestPathErrorCode, ShortestPathQuery, dijkstra};

const MAX_VERTICES: usize = 6;
const MAX_LINKS: usize = 14;
const MAX_WEIGHT: i64 = 20;

#[derive(Clone, Debug)]
struct GraphFixture {
    vertex_count: usize,
    links: Vec<(usize, usize, i64)>,
}

impl GraphFixture {
    fn adjacency(&self) -> Adjacency<usize> {
        let mut graph = Adjacency::new();
        for vertex in 0..self.vertex_count {
            graph.add_vertex(vertex);
        }
        for &(from, to, weight) in &self.links {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    fn cheapest_link(&self, from: usize, to: usize) -> Option<i64> {
        self.links
            .iter()
            .filter(|(a, b, _)| *a == from && *b == to)
            .map(|(_, _, weight)| *weight)
            .min()
    }
}

fn graph_fixture() -> impl Strategy<Value = GraphFixture> {
    (1..=MAX_VERTICES).prop_flat_map(|vertex_count| {
        prop::collection::vec(
            (0..vertex_count, 0..vertex_count, 0..=MAX_WEIGHT),
            0..=MAX_LINKS,
        )
        .prop_map(move |links| GraphFixture {
            vertex_count,
            links,
        })
    })
}

/// Minimum weight over every simple path from `source`, per vertex.
fn brute_force_distances(fixture: &GraphFixture, source: usize) -> Vec<Option<i64>> {
    fn walk(
        fixture: &GraphFixture,
        vertex: usize,
        distance: i64,
        on_path: &mut [bool],
        best: &mut [Option<i64>],
    ) {
        if best[vertex].is_none_or(|current| distance < current) {
            best[vertex] = Some(distance);
        }
        on_path[vertex] = true;
        for &(from, to, weight) in &fixture.links {
            if from == vertex && !on_path[to] {
                walk(fixture, to, distance + weight, on_path, best);
            }
        }
        on_path[vertex] = false;
    }

    let mut best = vec![None; fixture.vertex_count];
    let mut on_path = vec![false; fixture.vertex_count];
    walk(fixture, source, 0, &mut on_path, &mut best);
    best
}

fn run_distance_equivalence(fixture: &GraphFixture, source: usize) -> TestCaseResult {
    let paths = dijkstra(&fixture.adjacency(), &ShortestPathQuery::new(source))
        .map_err(|err| TestCaseError::fail(format!("solver failed: {err}")))?;
    let expected = brute_force_distances(fixture, source);

    for (vertex, oracle) in expected.into_iter().enumerate() {
        prop_assert_eq!(paths.distance(&vertex), Some(Distance::from(oracle)), "vertex {}", vertex);
        prop_assert_eq!(paths.is_settled(&vertex), oracle.is_some());
    }
    Ok(())
}

fn run_route_consistency(fixture: &GraphFixture, source: usize) -> TestCaseResult {
    let paths = dijkstra(&fixture.adjacency(), &ShortestPathQuery::new(source))
        .map_err(|err| TestCaseError::fail(format!("solver failed: {err}")))?;

    for vertex in 0..fixture.vertex_count {
        let Some(route) = paths.route_to(&vertex) else {
            return Err(TestCaseError::fail(format!("vertex {vertex} missing")));
        };
        let Some(path) = route.path() else {
            prop_assert_eq!(paths.distance(&vertex), Some(Distance::Unreached));
            continue;
        };
        prop_assert_eq!(path.vertices().first(), Some(&source));
        prop_assert_eq!(path.vertices().last(), Some(&vertex));

        let mut total = 0_i64;
        for pair in path.vertices().windows(2) {
            let weight = fixture.cheapest_link(pair[0], pair[1]);
            prop_assert!(weight.is_some(), "no link {} -> {}", pair[0], pair[1]);
            total += weight.unwrap_or_default();
        }
        prop_assert_eq!(total, path.distance());
    }
    Ok(())
}

fn run_early_exit_agreement(fixture: &GraphFixture, source: usize, target: usize) -> TestCaseResult {
    let graph = fixture.adjacency();
    let full = dijkstra(&graph, &ShortestPathQuery::new(source))
        .map_err(|err| TestCaseError::fail(format!("solver failed: {err}")))?;
    let early = dijkstra(&graph, &ShortestPathQuery::new(source).with_target(target))
        .map_err(|err| TestCaseError::fail(format!("solver failed: {err}")))?;

    prop_assert_eq!(early.distance(&target), full.distance(&target));
    prop_assert_eq!(early.target_route(), full.route_to(&target));
    prop_assert!(early.settled_count() <= full.settled_count());
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn distances_match_simple_path_enumeration(
        (fixture, source) in graph_fixture()
            .prop_flat_map(|fixture| {
                let count = fixture.vertex_count;
                (Just(fixture), 0..count)
            })
    ) {
        run_distance_equivalence(&fixture, source)?;
    }

    #[test]
    fn routes_follow_existing_links(
        (fixture, source) in graph_fixture()
            .prop_flat_map(|fixture| {
                let count = fixture.vertex_count;
                (Just(fixture), 0..count)
            })
    ) {
        run_route_consistency(&fixture, source)?;
    }

    #[test]
    fn early_exit_agrees_with_full_run(
        (fixture, source, target) in graph_fixture()
            .prop_flat_map(|fixture| {
                let count = fixture.vertex_count;
                (Just(fixture), 0..count, 0..count)
            })
    ) {
        run_early_exit_agreement(&fixture, source, target)?;
    }

    #[test]
    fn any_negative_weight_is_rejected(
        (mut fixture, position, from, to, weight) in graph_fixture()
            .prop_flat_map(|fixture| {
                let count = fixture.vertex_count;
                let len = fixture.links.len();
                (Just(fixture), 0..=len, 0..count, 0..count, i64::MIN..0)
            })
    ) {
        fixture.links.insert(position, (from, to, weight));
        let err = dijkstra(&fixture.adjacency(), &ShortestPathQuery::new(0));
        prop_assert_eq!(err.map_err(|err| err.code()).err(), Some(ShortestPathErrorCode::NegativeWeight));
    }
}
