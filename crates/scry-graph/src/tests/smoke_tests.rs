//! Smoke tests for scry-graph.
//!
//! Fast, deterministic checks of the cycle detector on the scenarios the
//! analysis reports rely on.

use crate::{Cycle, DEFAULT_CYCLE_LIMIT, DependencyGraph, ModuleId, detect_cycles};

fn graph_from(edges: &[(&str, &str)]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for (from, to) in edges {
        graph.add_import(*from, *to);
    }
    graph
}

#[test]
fn test_python_style_two_file_cycle() {
    // a.py: import b / b.py: import a
    let graph = graph_from(&[("a", "b"), ("b", "a")]);
    let cycles = detect_cycles(&graph, DEFAULT_CYCLE_LIMIT);

    assert_eq!(cycles.len(), 1);
    let expected = Cycle::new(vec![ModuleId::new("a"), ModuleId::new("b")]);
    assert!(cycles[0].is_rotation_of(&expected));
}

#[test]
fn test_single_module_without_imports() {
    let mut graph = DependencyGraph::new();
    graph.add_module("a");
    assert!(detect_cycles(&graph, DEFAULT_CYCLE_LIMIT).is_empty());
}

#[test]
fn test_detection_is_deterministic() {
    let edges = [
        ("core", "util"),
        ("util", "core"),
        ("api", "core"),
        ("api", "api"),
        ("db", "api"),
    ];
    let first = detect_cycles(&graph_from(&edges), DEFAULT_CYCLE_LIMIT);
    let second = detect_cycles(&graph_from(&edges), DEFAULT_CYCLE_LIMIT);
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_nested_cycles_share_members() {
    // a -> b -> a and a -> b -> c -> a
    let graph = graph_from(&[("a", "b"), ("b", "a"), ("b", "c"), ("c", "a")]);
    let cycles = detect_cycles(&graph, DEFAULT_CYCLE_LIMIT);

    assert_eq!(cycles.len(), 2);
    assert_eq!(cycles[0].format_chain(), "a -> b -> a");
    assert_eq!(cycles[1].format_chain(), "a -> b -> c -> a");
}

#[test]
fn test_cycle_members_are_distinct() {
    let graph = graph_from(&[("a", "b"), ("b", "c"), ("c", "b"), ("c", "a")]);
    for cycle in detect_cycles(&graph, DEFAULT_CYCLE_LIMIT) {
        let mut members = cycle.modules.clone();
        members.sort();
        members.dedup();
        assert_eq!(members.len(), cycle.len());
    }
}
