//! Exhaustive minimum spanning forest oracle.
//!
//! Enumerates every edge subset of the required size and keeps the lightest
//! acyclic one. Only viable for the tiny graphs the strategies produce.

use std::collections::BTreeSet;

use crate::graph::Edge;

/// Summary of the lightest spanning forest found by brute force.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct BruteForceForest {
    pub vertex_count: usize,
    pub component_count: usize,
    pub edge_count: usize,
    pub total_weight: i64,
}

pub(super) fn root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Returns `true` when the selected edges contain no cycle.
pub(super) fn is_acyclic(edges: &[&Edge<usize>], universe: usize) -> bool {
    let mut parent: Vec<usize> = (0..universe).collect();
    for edge in edges {
        let left = root(&mut parent, *edge.source());
        let right = root(&mut parent, *edge.target());
        if left == right {
            return false;
        }
        parent[left] = right;
    }
    true
}

pub(super) fn brute_force_forest(edges: &[Edge<usize>]) -> BruteForceForest {
    let vertices: BTreeSet<usize> = edges
        .iter()
        .flat_map(|edge| [*edge.source(), *edge.target()])
        .collect();
    let universe = vertices.last().map_or(0, |max| max + 1);

    let mut parent: Vec<usize> = (0..universe).collect();
    for edge in edges {
        let left = root(&mut parent, *edge.source());
        let right = root(&mut parent, *edge.target());
        parent[left] = right;
    }
    let roots: BTreeSet<usize> = vertices
        .iter()
        .map(|&vertex| root(&mut parent, vertex))
        .collect();
    let component_count = roots.len();
    let edge_count = vertices.len() - component_count;

    let mut best: Option<i64> = None;
    for mask in 0_u32..(1 << edges.len()) {
        if mask.count_ones() as usize != edge_count {
            continue;
        }
        let chosen: Vec<&Edge<usize>> = edges
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, edge)| edge)
            .collect();
        if !is_acyclic(&chosen, universe) {
            continue;
        }
        let weight: i64 = chosen.iter().map(|edge| edge.weight()).sum();
        best = Some(best.map_or(weight, |current| current.min(weight)));
    }

    BruteForceForest {
        vertex_count: vertices.len(),
        component_count,
        edge_count,
        total_weight: best.unwrap_or(0),
    }
}
