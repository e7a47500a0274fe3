//! Domain-Driven Design naming heuristics.
//!
//! Class-like declarations are classified by name into aggregates, entities,
//! value objects, domain services, repositories, domain events and
//! factories. Nothing is inferred from behaviour: `OrderAggregate` is an
//! aggregate because of its name, and `Order` is nothing at all.
//!
//! ```
//! use scry_analysis::ddd::{classify_name, DomainKind};
//!
//! assert_eq!(classify_name("OrderAggregate"), Some(DomainKind::Aggregate));
//! assert_eq!(classify_name("UserRepository"), Some(DomainKind::Repository));
//! ```

mod declarations;
mod metrics;
mod model;
mod patterns;

pub use declarations::{Declaration, identity_field, scan};
pub use metrics::{ANEMIC_METHOD_THRESHOLD, compute as compute_metrics};
pub use model::{
    Aggregate, BoundedContext, DddMetrics, DddReport, DomainEvent, DomainKind, DomainService,
    Entity, Factory, Repository, ValueObject,
};
pub use patterns::{FACTORY_SUFFIXES, REPOSITORY_SUFFIXES, classify, classify_name, strip_suffix};

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use crate::language::Language;

/// Classify declarations and assemble the report with metrics.
///
/// Declarations are expected in file order; the report keeps that order.
pub fn build_report(declarations: &[Declaration]) -> DddReport {
    let mut report = DddReport::default();
    let mut aggregate_bodies = Vec::new();

    for decl in declarations {
        let Some(kind) = classify(&decl.name, decl.language, &decl.bases) else {
            continue;
        };

        match kind {
            DomainKind::Aggregate => {
                aggregate_bodies.push(decl.body.as_str());
                report.aggregates.push(Aggregate {
                    name: decl.name.clone(),
                    file: decl.file.clone(),
                    entities: Vec::new(),
                    value_objects: Vec::new(),
                    methods: decl.methods.clone(),
                });
            }
            DomainKind::Entity => report.entities.push(Entity {
                name: decl.name.clone(),
                file: decl.file.clone(),
                identity_field: identity_field(&decl.fields),
                methods: decl.methods.clone(),
            }),
            DomainKind::ValueObject => report.value_objects.push(ValueObject {
                name: decl.name.clone(),
                file: decl.file.clone(),
                attributes: decl.fields.clone(),
                is_immutable: is_immutable(decl),
            }),
            DomainKind::DomainService => report.domain_services.push(DomainService {
                name: decl.name.clone(),
                file: decl.file.clone(),
                methods: decl.methods.clone(),
            }),
            DomainKind::Repository => report.repositories.push(Repository {
                name: decl.name.clone(),
                file: decl.file.clone(),
                aggregate_type: strip_suffix(&decl.name, REPOSITORY_SUFFIXES).to_string(),
                methods: decl.methods.clone(),
                is_interface: decl.is_interface(),
            }),
            DomainKind::DomainEvent => report.domain_events.push(DomainEvent {
                name: decl.name.clone(),
                file: decl.file.clone(),
                payload_fields: decl.fields.clone(),
            }),
            DomainKind::Factory => report.factories.push(Factory {
                name: decl.name.clone(),
                file: decl.file.clone(),
                creates: strip_suffix(&decl.name, FACTORY_SUFFIXES).to_string(),
                methods: decl.methods.clone(),
            }),
        }
    }

    link_members(&mut report, &aggregate_bodies);
    report.bounded_contexts = bounded_contexts(&report.aggregates);
    report.metrics = metrics::compute(&report);
    report
}

/// Fill each aggregate's entities and value objects from the identifiers
/// its body mentions.
fn link_members(report: &mut DddReport, bodies: &[&str]) {
    let entity_names: Vec<&str> = report.entities.iter().map(|e| e.name.as_str()).collect();
    let vo_names: Vec<&str> = report.value_objects.iter().map(|v| v.name.as_str()).collect();

    for (aggregate, body) in report.aggregates.iter_mut().zip(bodies) {
        let words: FxHashSet<&str> = body
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|w| !w.is_empty())
            .collect();

        aggregate.entities = unique_mentions(&entity_names, &words);
        aggregate.value_objects = unique_mentions(&vo_names, &words);
    }
}

fn unique_mentions(names: &[&str], words: &FxHashSet<&str>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    names
        .iter()
        .filter(|name| words.contains(*name) && seen.insert(**name))
        .map(|name| name.to_string())
        .collect()
}

/// Group aggregates by the first path segment. Aggregates at the root
/// belong to no context.
fn bounded_contexts(aggregates: &[Aggregate]) -> Vec<BoundedContext> {
    let mut by_dir: IndexMap<&str, Vec<String>> = IndexMap::new();
    for aggregate in aggregates {
        if let Some((top, _)) = aggregate.file.split_once('/') {
            by_dir.entry(top).or_default().push(aggregate.name.clone());
        }
    }

    by_dir
        .into_iter()
        .map(|(dir, aggregates)| BoundedContext {
            name: title_case(dir).replace('_', " "),
            directory: dir.to_string(),
            aggregates,
        })
        .collect()
}

/// Upper-case the first letter of every run of letters, lower-case the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

fn is_immutable(decl: &Declaration) -> bool {
    match decl.language {
        Language::Python => decl.body.contains("frozen=True"),
        Language::Java => decl.keyword == "record" || decl.body.contains("final class"),
        _ => true,
    }
}
