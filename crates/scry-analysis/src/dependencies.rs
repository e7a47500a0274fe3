//! Import index and dependency graph construction.

use std::collections::{BTreeMap, BTreeSet};

use scry_graph::DependencyGraph;
use serde::{Deserialize, Serialize};

use crate::record::ModuleRecord;

/// Reverse index from import token to the files importing it.
///
/// Empty tokens (Python relative imports such as `from . import b`) are
/// not indexed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyIndex {
    imported_by: BTreeMap<String, BTreeSet<String>>,
}

impl DependencyIndex {
    pub fn from_records(records: &[ModuleRecord]) -> Self {
        let mut imported_by: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for record in records {
            for token in record.imports.iter().filter(|t| !t.is_empty()) {
                imported_by
                    .entry(token.clone())
                    .or_default()
                    .insert(record.path.clone());
            }
        }
        Self { imported_by }
    }

    pub fn len(&self) -> usize {
        self.imported_by.len()
    }

    pub fn is_empty(&self) -> bool {
        self.imported_by.is_empty()
    }

    /// Sorted relative paths importing `token`.
    pub fn importers(&self, token: &str) -> Vec<&str> {
        self.imported_by
            .get(token)
            .map(|paths| paths.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imported_by.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Tokens by number of importing files, most imported first; ties by
    /// token.
    pub fn most_imported(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .imported_by
            .iter()
            .map(|(token, paths)| (token.as_str(), paths.len()))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(limit);
        ranked
    }
}

/// Build the graph of file stems to import tokens.
///
/// Every record becomes a node, even without imports, so that tokens naming
/// it resolve. Files with the same stem share one node.
pub fn build_graph(records: &[ModuleRecord]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for record in records {
        let stem = record.stem();
        graph.add_module(stem);
        for token in record.imports.iter().filter(|t| !t.is_empty()) {
            graph.add_import(stem, token.as_str());
        }
    }
    graph.sort_modules();
    graph
}
