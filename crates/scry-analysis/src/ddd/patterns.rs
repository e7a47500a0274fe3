//! Name-based classification rules.
//!
//! Each category is a list of case-insensitive patterns searched anywhere in
//! the declaration name. Categories are tried in a fixed precedence order and
//! the first hit wins.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use super::model::DomainKind;
use crate::language::Language;

const AGGREGATE: &[&str] = &[r"\w+Aggregate", r"\w+Root"];

const ENTITY: &[&str] = &[r"\w+Entity", r"\w+(?:Model|Record|Item)"];

const VALUE_OBJECT: &[&str] = &[
    r"\w+ValueObject",
    r"\w+VO",
    r"\w+Value",
    r"\w+Type",
    r"\w+Id",
    r"\w+Name",
    r"\w+Email",
    r"\w+Address",
    r"\w+Money",
    r"\w+Amount",
];

const SERVICE: &[&str] = &[
    r"\w+DomainService",
    r"\w+Service",
    r"\w+ApplicationService",
    r"\w+AppService",
];

const REPOSITORY: &[&str] = &[r"\w+Repository", r"\w+Repo", r"\w+Dao", r"\w+Mapper"];

const EVENT: &[&str] = &[
    r"\w+Event",
    r"\w+Occurred",
    r"\w+Created",
    r"\w+Updated",
    r"\w+Deleted",
];

const FACTORY: &[&str] = &[r"\w+Factory", r"\w+Builder", r"\w+Creator"];

/// Suffixes stripped to find a repository's aggregate type.
pub const REPOSITORY_SUFFIXES: &[&str] = &["Repository", "Repo", "Dao", "Mapper"];

/// Suffixes stripped to find what a factory creates.
pub const FACTORY_SUFFIXES: &[&str] = &["Factory", "Builder", "Creator"];

struct PatternSet(Vec<Regex>);

impl PatternSet {
    fn new(patterns: &[&str]) -> Self {
        Self(
            patterns
                .iter()
                .map(|p| {
                    RegexBuilder::new(p)
                        .case_insensitive(true)
                        .build()
                        .expect("built-in naming pattern should compile")
                })
                .collect(),
        )
    }

    fn matches(&self, name: &str) -> bool {
        self.0.iter().any(|re| re.is_match(name))
    }
}

static CATEGORIES: LazyLock<Vec<(DomainKind, PatternSet)>> = LazyLock::new(|| {
    vec![
        (DomainKind::Aggregate, PatternSet::new(AGGREGATE)),
        (DomainKind::Entity, PatternSet::new(ENTITY)),
        (DomainKind::ValueObject, PatternSet::new(VALUE_OBJECT)),
        (DomainKind::DomainService, PatternSet::new(SERVICE)),
        (DomainKind::Repository, PatternSet::new(REPOSITORY)),
        (DomainKind::DomainEvent, PatternSet::new(EVENT)),
        (DomainKind::Factory, PatternSet::new(FACTORY)),
    ]
});

/// Classify by name alone.
pub fn classify_name(name: &str) -> Option<DomainKind> {
    let lower = name.to_lowercase();
    CATEGORIES.iter().find_map(|(kind, patterns)| {
        let hit = match kind {
            DomainKind::DomainService => patterns.matches(name) && lower.contains("service"),
            DomainKind::DomainEvent => patterns.matches(name) || lower.contains("event"),
            _ => patterns.matches(name),
        };
        hit.then_some(*kind)
    })
}

/// Classify a declaration, letting Python base classes promote it.
///
/// A base containing `aggregate`, `entity`, or `value`/`vo` counts as a hit
/// for that category at the category's own precedence.
pub fn classify(name: &str, language: Language, bases: &[String]) -> Option<DomainKind> {
    if language != Language::Python || bases.is_empty() {
        return classify_name(name);
    }

    let lowered: Vec<String> = bases.iter().map(|b| b.to_lowercase()).collect();
    let base_has = |needle: &str| lowered.iter().any(|b| b.contains(needle));
    let by_name = classify_name(name);

    if by_name == Some(DomainKind::Aggregate) || base_has("aggregate") {
        return Some(DomainKind::Aggregate);
    }
    if by_name == Some(DomainKind::Entity) || base_has("entity") {
        return Some(DomainKind::Entity);
    }
    if by_name == Some(DomainKind::ValueObject) || base_has("value") || base_has("vo") {
        return Some(DomainKind::ValueObject);
    }
    by_name
}

/// Remove the first matching suffix, or return the name unchanged.
pub fn strip_suffix<'a>(name: &'a str, suffixes: &[&str]) -> &'a str {
    suffixes
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .unwrap_or(name)
}
