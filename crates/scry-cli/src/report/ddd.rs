//! Markdown report for the DDD classifier.

use std::fmt::Write as _;
use std::path::Path;

use scry_analysis::DddReport;

use super::join_limited;

const METHOD_LIMIT: usize = 10;
const ENTITY_LIMIT: usize = 20;
const VALUE_OBJECT_LIMIT: usize = 20;
const SERVICE_LIMIT: usize = 10;
const REPOSITORY_LIMIT: usize = 10;
const EVENT_LIMIT: usize = 15;
const DETAIL_LIMIT: usize = 5;

/// Coherence below this triggers the aggregate design advice.
const COHERENCE_FLOOR: u8 = 60;

pub fn render_ddd(report: &DddReport, root: &Path) -> String {
    let mut md = String::new();
    md.push_str("# 🏗️ DDD Analysis Report\n\n");
    let _ = writeln!(md, "**Path:** `{}`\n", root.display());

    md.push_str("## 📊 Summary\n\n");
    let _ = writeln!(md, "- **Aggregates:** {}", report.aggregates.len());
    let _ = writeln!(md, "- **Entities:** {}", report.entities.len());
    let _ = writeln!(md, "- **Value Objects:** {}", report.value_objects.len());
    let _ = writeln!(md, "- **Domain Services:** {}", report.domain_services.len());
    let _ = writeln!(md, "- **Repositories:** {}", report.repositories.len());
    let _ = writeln!(md, "- **Domain Events:** {}", report.domain_events.len());
    let _ = writeln!(md, "- **Factories:** {}", report.factories.len());
    let _ = writeln!(md, "- **Bounded Contexts:** {}\n", report.bounded_contexts.len());

    let metrics = &report.metrics;
    md.push_str("## 📈 Quality Metrics\n\n");
    let _ = writeln!(
        md,
        "- **Aggregate Coherence:** {}/100",
        metrics.aggregate_coherence
    );
    let _ = writeln!(
        md,
        "- **Value Objects per Entity:** {:.2}",
        metrics.entity_value_object_ratio
    );
    let _ = writeln!(
        md,
        "- **Anemic Domain Risk:** {}\n",
        if metrics.anemic_domain_risk { "⚠️ Yes" } else { "✅ No" }
    );
    if !metrics.god_aggregate_warnings.is_empty() {
        md.push_str("### ⚠️ Warnings\n\n");
        for warning in &metrics.god_aggregate_warnings {
            let _ = writeln!(md, "- {}", warning);
        }
        md.push('\n');
    }

    if !report.bounded_contexts.is_empty() {
        md.push_str("## 🗺️ Bounded Contexts\n\n");
        for context in &report.bounded_contexts {
            let _ = writeln!(md, "### {}\n", context.name);
            let _ = writeln!(md, "**Directory:** `{}/`\n", context.directory);
            if !context.aggregates.is_empty() {
                md.push_str("**Aggregates:**\n");
                for aggregate in &context.aggregates {
                    let _ = writeln!(md, "- {}", aggregate);
                }
                md.push('\n');
            }
        }
    }

    if !report.aggregates.is_empty() {
        md.push_str("## 🎯 Aggregates\n\n");
        for aggregate in &report.aggregates {
            let _ = writeln!(md, "### {}\n", aggregate.name);
            let _ = writeln!(md, "- **File:** `{}`", aggregate.file);
            if !aggregate.entities.is_empty() {
                let _ = writeln!(md, "- **Entities:** {}", aggregate.entities.join(", "));
            }
            if !aggregate.value_objects.is_empty() {
                let _ = writeln!(
                    md,
                    "- **Value Objects:** {}",
                    aggregate.value_objects.join(", ")
                );
            }
            if !aggregate.methods.is_empty() {
                let _ = writeln!(
                    md,
                    "- **Methods:** {}",
                    join_limited(&aggregate.methods, METHOD_LIMIT)
                );
            }
            md.push('\n');
        }
    }

    if !report.entities.is_empty() {
        md.push_str("## 📦 Entities\n\n");
        for entity in report.entities.iter().take(ENTITY_LIMIT) {
            let _ = writeln!(md, "**{}** (`{}`)", entity.name, entity.file);
            if let Some(identity) = &entity.identity_field {
                let _ = writeln!(md, "- Identity: `{}`", identity);
            }
            if !entity.methods.is_empty() {
                let _ = writeln!(
                    md,
                    "- Methods: {}",
                    join_limited(&entity.methods, DETAIL_LIMIT)
                );
            }
            md.push('\n');
        }
    }

    if !report.value_objects.is_empty() {
        md.push_str("## 💎 Value Objects\n\n");
        for value_object in report.value_objects.iter().take(VALUE_OBJECT_LIMIT) {
            let _ = writeln!(md, "**{}** (`{}`)", value_object.name, value_object.file);
            let _ = writeln!(
                md,
                "- Immutable: {}",
                if value_object.is_immutable { "✅ Yes" } else { "❌ No" }
            );
            if !value_object.attributes.is_empty() {
                let _ = writeln!(
                    md,
                    "- Attributes: {}",
                    join_limited(&value_object.attributes, DETAIL_LIMIT)
                );
            }
            md.push('\n');
        }
    }

    if !report.domain_services.is_empty() {
        md.push_str("## ⚙️ Domain Services\n\n");
        for service in report.domain_services.iter().take(SERVICE_LIMIT) {
            let _ = writeln!(md, "**{}** (`{}`)", service.name, service.file);
            if !service.methods.is_empty() {
                let _ = writeln!(
                    md,
                    "- Methods: {}",
                    join_limited(&service.methods, DETAIL_LIMIT)
                );
            }
            md.push('\n');
        }
    }

    if !report.repositories.is_empty() {
        md.push_str("## 🗄️ Repositories\n\n");
        for repository in report.repositories.iter().take(REPOSITORY_LIMIT) {
            let _ = writeln!(md, "**{}** (`{}`)", repository.name, repository.file);
            let _ = writeln!(md, "- Aggregate: {}", repository.aggregate_type);
            let _ = writeln!(
                md,
                "- Interface: {}",
                if repository.is_interface { "Yes" } else { "No" }
            );
            if !repository.methods.is_empty() {
                let _ = writeln!(
                    md,
                    "- Methods: {}",
                    join_limited(&repository.methods, DETAIL_LIMIT)
                );
            }
            md.push('\n');
        }
    }

    if !report.domain_events.is_empty() {
        md.push_str("## 📢 Domain Events\n\n");
        for event in report.domain_events.iter().take(EVENT_LIMIT) {
            let _ = writeln!(md, "**{}** (`{}`)", event.name, event.file);
            if !event.payload_fields.is_empty() {
                let _ = writeln!(
                    md,
                    "- Payload: {}",
                    join_limited(&event.payload_fields, DETAIL_LIMIT)
                );
            }
            md.push('\n');
        }
    }

    if !report.factories.is_empty() {
        md.push_str("## 🏭 Factories\n\n");
        for factory in &report.factories {
            let _ = writeln!(md, "**{}** (`{}`)", factory.name, factory.file);
            let _ = writeln!(md, "- Creates: {}\n", factory.creates);
        }
    }

    let advice = recommendations(report);
    if !advice.is_empty() {
        md.push_str("## 💡 Recommendations\n\n");
        md.push_str(&advice);
    }

    md.truncate(md.trim_end().len());
    md.push('\n');
    md
}

fn recommendations(report: &DddReport) -> String {
    let metrics = &report.metrics;
    let mut md = String::new();

    if metrics.anemic_domain_risk {
        md.push_str("### ⚠️ Anemic Domain Model Detected\n\n");
        md.push_str("- Move business rules from services into entities and aggregates\n");
        md.push_str("- Give entities behavior, not just getters and setters\n");
        md.push_str("- Keep domain services for logic that spans several aggregates\n\n");
    }

    if !report.aggregates.is_empty() && metrics.aggregate_coherence < COHERENCE_FLOOR {
        md.push_str("### ⚠️ Aggregate Design Issues\n\n");
        md.push_str("- Keep aggregates small and focused on one invariant\n");
        md.push_str("- Reference other aggregates by identity only\n");
        md.push_str("- Split aggregates that own too many entities\n\n");
    }

    if !report.entities.is_empty() && metrics.entity_value_object_ratio < 1.0 / 3.0 {
        md.push_str("### ℹ️ Consider More Value Objects\n\n");
        md.push_str("- Wrap primitive attributes such as amounts or emails in value objects\n");
        md.push_str("- Make value objects immutable and compare them by value\n\n");
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use scry_analysis::ddd::{Aggregate, BoundedContext, DddMetrics, Entity, Repository};

    fn sample() -> DddReport {
        DddReport {
            aggregates: vec![Aggregate {
                name: "OrderAggregate".into(),
                file: "orders/order.py".into(),
                entities: vec!["OrderLine".into()],
                value_objects: Vec::new(),
                methods: (0..12).map(|i| format!("step{i}")).collect(),
            }],
            entities: vec![Entity {
                name: "OrderLine".into(),
                file: "orders/line.py".into(),
                identity_field: Some("id".into()),
                methods: vec!["total".into()],
            }],
            repositories: vec![Repository {
                name: "OrderRepository".into(),
                file: "orders/repo.py".into(),
                aggregate_type: "Order".into(),
                methods: vec!["save".into()],
                is_interface: false,
            }],
            bounded_contexts: vec![BoundedContext {
                name: "Orders".into(),
                directory: "orders".into(),
                aggregates: vec!["OrderAggregate".into()],
            }],
            metrics: DddMetrics {
                aggregate_coherence: 40,
                entity_value_object_ratio: 0.0,
                anemic_domain_risk: false,
                god_aggregate_warnings: Vec::new(),
            },
            ..DddReport::default()
        }
    }

    #[test]
    fn test_report_sections() {
        let md = render_ddd(&sample(), Path::new("/repo"));

        assert!(md.starts_with("# 🏗️ DDD Analysis Report\n"));
        assert!(md.contains("- **Aggregates:** 1"));
        assert!(md.contains("- **Aggregate Coherence:** 40/100"));
        assert!(md.contains("- **Value Objects per Entity:** 0.00"));
        assert!(md.contains("- **Anemic Domain Risk:** ✅ No"));
        assert!(md.contains("### Orders\n\n**Directory:** `orders/`"));
        assert!(md.contains("step9 ... and 2 more"));
        assert!(md.contains("- Identity: `id`"));
        assert!(md.contains("- Aggregate: Order"));
        assert!(!md.contains("## 💎 Value Objects"));
    }

    #[test]
    fn test_recommendations() {
        let md = render_ddd(&sample(), Path::new("/repo"));
        assert!(md.contains("### ⚠️ Aggregate Design Issues"));
        assert!(md.contains("### ℹ️ Consider More Value Objects"));
        assert!(!md.contains("Anemic Domain Model Detected"));
    }

    #[test]
    fn test_empty_report_has_no_recommendations() {
        let md = render_ddd(&DddReport::default(), Path::new("."));
        assert!(md.contains("- **Entities:** 0"));
        assert!(!md.contains("## 💡 Recommendations"));
        assert!(!md.contains("## 🎯 Aggregates"));
    }
}
