//! Import graph keyed by module identity.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::ModuleId;

/// Mapping from module identity to the raw import tokens it references.
///
/// Tokens are stored verbatim. Edges between modules exist only where a
/// token (or its [`token_key`]) names another module in the graph; every
/// other token is a leaf and never participates in a cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyGraph {
    modules: IndexMap<ModuleId, BTreeSet<String>>,
}

/// Summary counts for a [`DependencyGraph`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStatistics {
    pub module_count: usize,
    /// Total (module, token) pairs.
    pub import_count: usize,
    /// Pairs whose token resolves to a module in the graph.
    pub internal_edge_count: usize,
    /// Distinct tokens that do not resolve to any module.
    pub external_token_count: usize,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module with no imports. Existing modules are left untouched.
    pub fn add_module(&mut self, module: impl Into<ModuleId>) {
        self.modules.entry(module.into()).or_default();
    }

    /// Record that `module` imports `token`, registering the module if needed.
    pub fn add_import(&mut self, module: impl Into<ModuleId>, token: impl Into<String>) {
        self.modules
            .entry(module.into())
            .or_default()
            .insert(token.into());
    }

    /// Sort modules by identity so traversal order does not depend on the
    /// order files were discovered in.
    pub fn sort_modules(&mut self) {
        self.modules.sort_keys();
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn contains(&self, module: &str) -> bool {
        self.modules.contains_key(module)
    }

    /// Iterate over module identities in graph order.
    pub fn modules(&self) -> impl Iterator<Item = &ModuleId> {
        self.modules.keys()
    }

    /// Raw import tokens of a module.
    pub fn imports(&self, module: &str) -> Option<&BTreeSet<String>> {
        self.modules.get(module)
    }

    /// Modules that `module` depends on, i.e. the tokens that resolve to
    /// nodes of this graph. Sorted and deduplicated.
    pub fn dependencies(&self, module: &str) -> Vec<&ModuleId> {
        let Some(tokens) = self.modules.get(module) else {
            return Vec::new();
        };

        let mut deps: Vec<&ModuleId> = tokens
            .iter()
            .filter_map(|token| self.resolve(token))
            .map(|idx| self.id_at(idx))
            .collect();
        deps.sort();
        deps.dedup();
        deps
    }

    pub fn statistics(&self) -> GraphStatistics {
        let mut stats = GraphStatistics {
            module_count: self.modules.len(),
            ..GraphStatistics::default()
        };
        let mut external = FxHashSet::default();

        for tokens in self.modules.values() {
            stats.import_count += tokens.len();
            for token in tokens {
                if self.resolve(token).is_some() {
                    stats.internal_edge_count += 1;
                } else {
                    external.insert(token.as_str());
                }
            }
        }

        stats.external_token_count = external.len();
        stats
    }

    /// Index-based adjacency lists in graph order, each sorted by target
    /// identity. Used by the cycle detector.
    pub(crate) fn adjacency(&self) -> Vec<Vec<usize>> {
        self.modules
            .values()
            .map(|tokens| {
                let mut targets: Vec<usize> =
                    tokens.iter().filter_map(|t| self.resolve(t)).collect();
                targets.sort_by(|a, b| self.id_at(*a).cmp(self.id_at(*b)));
                targets.dedup();
                targets
            })
            .collect()
    }

    pub(crate) fn id_at(&self, index: usize) -> &ModuleId {
        self.modules
            .get_index(index)
            .map(|(id, _)| id)
            .expect("adjacency indices always come from this graph")
    }

    /// Resolve a token to the index of the module it names, if any.
    fn resolve(&self, token: &str) -> Option<usize> {
        self.modules
            .get_index_of(token)
            .or_else(|| self.modules.get_index_of(token_key(token)))
    }
}

/// Graph key for an import token.
///
/// Relative specifiers (`./b`, `../lib/b.js`) are keyed by the stem of their
/// last path segment so they can match a module identity. All other tokens
/// are returned unchanged.
pub fn token_key(token: &str) -> &str {
    if !token.starts_with('.') {
        return token;
    }

    let last = token.rsplit('/').next().unwrap_or(token);
    if last == "." || last == ".." || last.is_empty() {
        return token;
    }

    match last.rfind('.') {
        Some(0) | None => last,
        Some(idx) => &last[..idx],
    }
}
