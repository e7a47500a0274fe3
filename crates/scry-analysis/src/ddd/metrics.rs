//! Quality metrics over a classified model.

use super::model::{Aggregate, DddMetrics, DddReport, Entity};

/// Mean method count below which the model is considered anemic.
pub const ANEMIC_METHOD_THRESHOLD: f64 = 3.0;

pub fn compute(report: &DddReport) -> DddMetrics {
    let mut metrics = DddMetrics::default();

    if !report.entities.is_empty() {
        metrics.entity_value_object_ratio =
            report.value_objects.len() as f64 / report.entities.len() as f64;
    }

    if !report.aggregates.is_empty() {
        let avg = mean_entities(&report.aggregates);
        metrics.aggregate_coherence = if (2.0..=5.0).contains(&avg) {
            80
        } else if avg < 2.0 {
            60
        } else {
            metrics
                .god_aggregate_warnings
                .push("Some aggregates may be too large".to_string());
            40
        };

        for aggregate in report.aggregates.iter().filter(|a| a.entities.len() > 5) {
            metrics.god_aggregate_warnings.push(format!(
                "{} references {} entities",
                aggregate.name,
                aggregate.entities.len()
            ));
        }
    }

    if !report.aggregates.is_empty() && !report.entities.is_empty() {
        metrics.anemic_domain_risk =
            mean_methods(&report.aggregates, &report.entities) < ANEMIC_METHOD_THRESHOLD;
    }

    metrics
}

fn mean_entities(aggregates: &[Aggregate]) -> f64 {
    let total: usize = aggregates.iter().map(|a| a.entities.len()).sum();
    total as f64 / aggregates.len() as f64
}

fn mean_methods(aggregates: &[Aggregate], entities: &[Entity]) -> f64 {
    let total: usize = aggregates.iter().map(|a| a.methods.len()).sum::<usize>()
        + entities.iter().map(|e| e.methods.len()).sum::<usize>();
    total as f64 / (aggregates.len() + entities.len()) as f64
}
