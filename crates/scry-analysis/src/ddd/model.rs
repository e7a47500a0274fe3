//! Report types for the DDD classifier.

use serde::{Deserialize, Serialize};

/// Building block a declaration was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DomainKind {
    Aggregate,
    Entity,
    ValueObject,
    DomainService,
    Repository,
    DomainEvent,
    Factory,
}

impl DomainKind {
    pub fn label(self) -> &'static str {
        match self {
            DomainKind::Aggregate => "aggregate",
            DomainKind::Entity => "entity",
            DomainKind::ValueObject => "value object",
            DomainKind::DomainService => "domain service",
            DomainKind::Repository => "repository",
            DomainKind::DomainEvent => "domain event",
            DomainKind::Factory => "factory",
        }
    }
}

/// Consistency boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregate {
    pub name: String,
    pub file: String,
    /// Entities referenced from the aggregate's body.
    pub entities: Vec<String>,
    /// Value objects referenced from the aggregate's body.
    pub value_objects: Vec<String>,
    pub methods: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub name: String,
    pub file: String,
    /// First field named `id`, `uuid` or `entity_id`.
    pub identity_field: Option<String>,
    pub methods: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueObject {
    pub name: String,
    pub file: String,
    pub attributes: Vec<String>,
    pub is_immutable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainService {
    pub name: String,
    pub file: String,
    pub methods: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub name: String,
    pub file: String,
    /// Name with the repository suffix removed.
    pub aggregate_type: String,
    pub methods: Vec<String>,
    pub is_interface: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainEvent {
    pub name: String,
    pub file: String,
    pub payload_fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Factory {
    pub name: String,
    pub file: String,
    /// Name with the factory suffix removed.
    pub creates: String,
    pub methods: Vec<String>,
}

/// Aggregates grouped by top-level directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundedContext {
    pub name: String,
    pub directory: String,
    pub aggregates: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DddMetrics {
    /// 0 without aggregates, otherwise 40, 60 or 80.
    pub aggregate_coherence: u8,
    /// Value objects per entity; 0 without entities.
    pub entity_value_object_ratio: f64,
    pub anemic_domain_risk: bool,
    pub god_aggregate_warnings: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DddReport {
    pub aggregates: Vec<Aggregate>,
    pub entities: Vec<Entity>,
    pub value_objects: Vec<ValueObject>,
    pub domain_services: Vec<DomainService>,
    pub repositories: Vec<Repository>,
    pub domain_events: Vec<DomainEvent>,
    pub factories: Vec<Factory>,
    pub bounded_contexts: Vec<BoundedContext>,
    pub metrics: DddMetrics,
}

impl DddReport {
    /// Number of classified declarations.
    pub fn total(&self) -> usize {
        self.aggregates.len()
            + self.entities.len()
            + self.value_objects.len()
            + self.domain_services.len()
            + self.repositories.len()
            + self.domain_events.len()
            + self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
