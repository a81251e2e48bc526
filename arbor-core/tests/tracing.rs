//! Span and event instrumentation of the public entry points.

use arbor_core::{
    Adjacency, Edge, ParentEdge, ShortestPathQuery, TracingNarrator, dijkstra, dijkstra_observed,
    kruskal, kruskal_observed, resolve,
};
use arbor_test_support::tracing::RecordingLayer;
use tracing::Level;

#[test]
fn kruskal_records_span_fields_and_summary() {
    let (layer, _guard) = RecordingLayer::install();
    let edges = [Edge::new("a", "b", 2), Edge::new("b", "c", 3), Edge::new("a", "c", 9)];
    kruskal(&edges).expect("graph must succeed");

    let span = layer.span("mst.kruskal").expect("mst.kruskal span must exist");
    assert_eq!(span.field("edges"), Some("3"));
    assert_eq!(span.field("vertices"), Some("3"));

    let summary = layer
        .events()
        .into_iter()
        .find(|event| event.level == Level::INFO && event.message() == Some("spanning forest built"))
        .expect("summary event must be emitted");
    assert_eq!(summary.field("accepted"), Some("2"));
    assert_eq!(summary.field("total_weight"), Some("5"));
    assert_eq!(summary.field("components"), Some("1"));
}

#[test]
fn overflow_is_logged_as_warning() {
    let (layer, _guard) = RecordingLayer::install();
    let edges = [Edge::new(1, 2, i64::MAX), Edge::new(2, 3, i64::MAX)];
    kruskal(&edges).expect_err("weights must overflow");

    assert!(layer.has_event(Level::WARN, "total weight overflowed"));
    assert!(!layer.has_event(Level::INFO, "spanning forest built"));
}

#[test]
fn dijkstra_records_settled_count() {
    let (layer, _guard) = RecordingLayer::install();
    let mut graph = Adjacency::new();
    graph.add_edge("A", "B", 5);
    graph.add_edge("B", "A", 5);
    graph.add_vertex("C");
    dijkstra(&graph, &ShortestPathQuery::new("A").with_target("B")).expect("query must succeed");

    let span = layer
        .span("shortest_path.dijkstra")
        .expect("shortest_path.dijkstra span must exist");
    assert_eq!(span.field("vertices"), Some("3"));
    assert_eq!(span.field("edges"), Some("2"));
    assert_eq!(span.field("settled"), Some("2"));
    assert!(layer.has_event(Level::INFO, "shortest paths computed"));
}

#[test]
fn negative_weight_is_logged_before_returning() {
    let (layer, _guard) = RecordingLayer::install();
    let mut graph = Adjacency::new();
    graph.add_edge("A", "B", -5);
    dijkstra(&graph, &ShortestPathQuery::new("A")).expect_err("negative weight must fail");

    assert!(layer.has_event(Level::WARN, "negative edge weight rejected"));
}

#[test]
fn resolver_reports_edge_and_reason() {
    let (layer, _guard) = RecordingLayer::install();
    let edges = [[2, 1], [3, 1], [4, 2], [1, 4]].map(ParentEdge::from);
    resolve(&edges).expect("input is a tree plus one edge");

    let span = layer
        .span("redundant.resolve")
        .expect("redundant.resolve span must exist");
    assert_eq!(span.field("edges"), Some("4"));

    let summary = layer
        .events()
        .into_iter()
        .find(|event| event.message() == Some("redundant edge resolved"))
        .expect("summary event must be emitted");
    assert_eq!(summary.level, Level::INFO);
    assert_eq!(summary.field("edge"), Some("[2, 1]"));
    assert_eq!(summary.field("reason"), Some("first_parent_on_cycle"));
}

#[test]
fn narrator_turns_checkpoints_into_debug_events() {
    let (layer, _guard) = RecordingLayer::install();
    let edges = [Edge::new("a", "b", 1), Edge::new("b", "c", 1), Edge::new("a", "c", 1)];
    kruskal_observed(&edges, &mut TracingNarrator).expect("graph must succeed");

    let mut graph = Adjacency::new();
    graph.add_edge("a", "b", 1);
    dijkstra_observed(&graph, &ShortestPathQuery::new("a"), &mut TracingNarrator)
        .expect("query must succeed");

    let accepted = layer
        .events()
        .into_iter()
        .filter(|event| {
            event.level == Level::DEBUG && event.message() == Some("edge accepted into forest")
        })
        .count();
    assert_eq!(accepted, 2);
    assert!(layer.has_event(Level::DEBUG, "vertex settled"));
    assert!(layer.has_event(Level::DEBUG, "distance improved"));
}
