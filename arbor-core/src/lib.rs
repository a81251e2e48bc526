//! Arbor core library: disjoint sets, minimum spanning forests, shortest
//! paths and redundant-edge resolution over caller-supplied graphs.
//!
//! Every algorithm is a synchronous, pure function of its input. Working
//! state is created per call and dropped on return. Intermediate steps are
//! reported through optional observers rather than printed.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod error;
mod graph;
mod mst;
mod observer;
mod redundant;
mod shortest_path;
mod telemetry;

#[cfg(test)]
mod test_utils;

pub use crate::{
    disjoint_set::{DisjointSet, DisjointSetError, DisjointSetErrorCode},
    error::{ArborError, ArborErrorCode, Result},
    graph::{Edge, Vertex},
    mst::{MstError, MstErrorCode, SpanningForest, kruskal, kruskal_observed},
    observer::{FrontierObserver, MstObserver, ResolverObserver, Silent, TracingNarrator},
    redundant::{
        MalformedInput, ParentEdge, RedundantEdgeError, RedundantEdgeErrorCode, RemovalReason,
        Resolution, find_redundant_edge, resolve, resolve_observed,
    },
    shortest_path::{
        Adjacency, Distance, Path, Route, ShortestPathError, ShortestPathErrorCode,
        ShortestPathQuery, ShortestPaths, dijkstra, dijkstra_observed, shortest_route,
    },
};
