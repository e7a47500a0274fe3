//! Property-based tests for the cycle detector using proptest.
//!
//! Graphs are generated over a small fixed alphabet of module names so that
//! random edges frequently close cycles.

use crate::{DependencyGraph, detect_cycles};
use proptest::prelude::*;

const NAMES: &[&str] = &["a", "b", "c", "d", "e", "f", "g", "h"];

fn edges_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..NAMES.len(), 0..NAMES.len()), 0..=24)
}

fn build(edges: &[(usize, usize)]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for name in NAMES {
        graph.add_module(*name);
    }
    for (from, to) in edges {
        graph.add_import(NAMES[*from], NAMES[*to]);
    }
    graph
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: every reported cycle is a real closed path
    /// ∀ cycle, ∀ i: cycle[i] imports cycle[i + 1 mod len]
    #[test]
    fn prop_reported_cycles_are_closed(edges in edges_strategy()) {
        let graph = build(&edges);
        for cycle in detect_cycles(&graph, usize::MAX) {
            prop_assert!(!cycle.is_empty());
            let path = cycle.closed_path();
            for pair in path.windows(2) {
                let deps = graph.dependencies(pair[0].as_str());
                prop_assert!(
                    deps.contains(&&pair[1]),
                    "{} does not import {}",
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    /// Property: the cap is honoured
    #[test]
    fn prop_limit_is_respected(edges in edges_strategy(), limit in 0usize..5) {
        let graph = build(&edges);
        prop_assert!(detect_cycles(&graph, limit).len() <= limit);
    }

    /// Property: a graph with a self-edge always reports at least one cycle
    #[test]
    fn prop_self_edge_detected(edges in edges_strategy(), node in 0..NAMES.len()) {
        let mut all = edges.clone();
        all.push((node, node));
        let graph = build(&all);
        prop_assert!(!detect_cycles(&graph, usize::MAX).is_empty());
    }

    /// Property: only-forward edges (i -> j with i < j) never form cycles
    #[test]
    fn prop_dag_has_no_cycles(edges in edges_strategy()) {
        let forward: Vec<_> = edges.into_iter().filter(|(a, b)| a < b).collect();
        let graph = build(&forward);
        prop_assert!(detect_cycles(&graph, usize::MAX).is_empty());
    }
}
