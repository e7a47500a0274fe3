//! Circular-dependency detection.
//!
//! Cycles are found with an iterative depth-first search that marks every
//! module white (unvisited), gray (on the current path) or black (finished).
//! An edge into a gray module closes a cycle: the path suffix starting at
//! that module is recorded. Black modules are never re-entered, so each
//! module is expanded at most once across all DFS roots.

use serde::{Deserialize, Serialize};

use crate::{DependencyGraph, ModuleId};

/// Maximum number of cycles reported by default.
pub const DEFAULT_CYCLE_LIMIT: usize = 10;

/// A closed import path.
///
/// `modules` holds the distinct members in traversal order: `[a, b, c]`
/// means `a` imports `b`, `b` imports `c` and `c` imports `a`. A self-import
/// is a single-element cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    pub modules: Vec<ModuleId>,
}

impl Cycle {
    pub fn new(modules: Vec<ModuleId>) -> Self {
        Self { modules }
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// True when a module imports itself.
    pub fn is_self_import(&self) -> bool {
        self.modules.len() == 1
    }

    /// The members followed by the first member again: `[a, b, a]`.
    pub fn closed_path(&self) -> Vec<ModuleId> {
        let mut path = self.modules.clone();
        if let Some(first) = self.modules.first() {
            path.push(first.clone());
        }
        path
    }

    /// Equality that ignores where the cycle was entered.
    pub fn is_rotation_of(&self, other: &Cycle) -> bool {
        if self.modules.len() != other.modules.len() {
            return false;
        }
        if self.modules.is_empty() {
            return true;
        }

        (0..self.modules.len()).any(|shift| {
            self.modules
                .iter()
                .cycle()
                .skip(shift)
                .zip(other.modules.iter())
                .all(|(a, b)| a == b)
        })
    }

    /// Format as a human-readable chain.
    ///
    /// Example: "a -> b -> c -> a"
    pub fn format_chain(&self) -> String {
        self.closed_path()
            .iter()
            .map(ModuleId::as_str)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Pending work for one module on the DFS stack.
struct Frame {
    node: usize,
    next_edge: usize,
}

/// Find circular imports in `graph`, stopping after `limit` cycles.
///
/// Roots are taken in graph order and neighbours in identity order, so the
/// result is deterministic for a given graph. Rotations of the same cycle are
/// not merged; a simple cycle is reported once, entered at the first of its
/// members reached by the search.
pub fn detect_cycles(graph: &DependencyGraph, limit: usize) -> Vec<Cycle> {
    let adjacency = graph.adjacency();
    let mut marks = vec![Mark::Unvisited; adjacency.len()];
    let mut cycles = Vec::new();

    if limit == 0 {
        return cycles;
    }

    for root in 0..adjacency.len() {
        if marks[root] != Mark::Unvisited {
            continue;
        }

        let mut stack = vec![Frame {
            node: root,
            next_edge: 0,
        }];
        let mut path = vec![root];
        marks[root] = Mark::InProgress;

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;

            let Some(&next) = adjacency[node].get(frame.next_edge) else {
                marks[node] = Mark::Done;
                path.pop();
                stack.pop();
                continue;
            };
            frame.next_edge += 1;

            match marks[next] {
                Mark::Unvisited => {
                    marks[next] = Mark::InProgress;
                    path.push(next);
                    stack.push(Frame {
                        node: next,
                        next_edge: 0,
                    });
                }
                Mark::InProgress => {
                    if let Some(start) = path.iter().position(|&n| n == next) {
                        let members = path[start..]
                            .iter()
                            .map(|&idx| graph.id_at(idx).clone())
                            .collect();
                        cycles.push(Cycle::new(members));
                        if cycles.len() >= limit {
                            return cycles;
                        }
                    }
                }
                Mark::Done => {}
            }
        }
    }

    cycles
}
