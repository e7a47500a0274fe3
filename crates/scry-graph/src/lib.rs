//! # scry-graph
//!
//! Pure data structures for import graphs.
//!
//! This crate holds the graph side of the analysis engine without any I/O:
//! a [`DependencyGraph`] mapping module identities to the raw import tokens
//! they reference, and a [`Cycle`] detector built on an iterative
//! three-colour depth-first search.
//!
//! ## Overview
//!
//! - **Unresolved tokens**: import tokens are free-form strings, never
//!   resolved against the file system. A token that does not name a module
//!   in the graph is simply a leaf.
//! - **Deterministic**: modules keep insertion order, imports are sorted, so
//!   traversal order (and therefore cycle output) is stable across runs.
//! - **No recursion**: the DFS carries explicit frames, so very deep import
//!   chains cannot overflow the stack.
//!
//! ## Quick Start
//!
//! ```rust
//! use scry_graph::{DependencyGraph, detect_cycles, DEFAULT_CYCLE_LIMIT};
//!
//! let mut graph = DependencyGraph::new();
//! graph.add_import("a", "b");
//! graph.add_import("b", "a");
//!
//! let cycles = detect_cycles(&graph, DEFAULT_CYCLE_LIMIT);
//! assert_eq!(cycles.len(), 1);
//! assert_eq!(cycles[0].format_chain(), "a -> b -> a");
//! ```

mod cycle;
mod graph;
mod module_id;

pub use cycle::{Cycle, DEFAULT_CYCLE_LIMIT, detect_cycles};
pub use graph::{DependencyGraph, GraphStatistics, token_key};
pub use module_id::ModuleId;

#[cfg(test)]
mod tests;
