//! Combinatorial pool of untrained model instances.

use std::collections::HashSet;

use benchmark_spi::MetricFamily;
use fts_spi::FtsModel;
use tracing::{debug, warn};

/// Untrained model instances, one per (model, order) configuration.
///
/// Pool entries are templates: tasks always work on a deep copy.
#[derive(Debug, Clone, Default)]
pub struct ModelPool {
    models: Vec<Box<dyn FtsModel>>,
}

impl ModelPool {
    /// Expand `templates` into the pool.
    ///
    /// Fixed-order models contribute one instance at their configured order;
    /// high order models one instance per order from `max(1, min_order)` to
    /// `max_order`. A repeated (short name, order) pair is skipped.
    pub fn build(templates: &[Box<dyn FtsModel>], max_order: usize) -> Self {
        let mut models: Vec<Box<dyn FtsModel>> = Vec::new();
        let mut seen = HashSet::new();

        for template in templates {
            let orders: Vec<usize> = if template.is_high_order() {
                (template.min_order().max(1)..=max_order).collect()
            } else {
                vec![template.order().max(1)]
            };

            for order in orders {
                if !seen.insert((template.short_name().to_string(), order)) {
                    warn!(
                        "Skipping duplicate model {} n = {}",
                        template.short_name(),
                        order
                    );
                    continue;
                }
                let mut model = template.clone_box();
                model.state_mut().reset();
                model.set_order(order);
                models.push(model);
            }
        }

        debug!("Model pool built with {} instances", models.len());
        Self { models }
    }

    /// The subset able to produce the forecasts `family` measures.
    pub fn for_family<F: MetricFamily>(&self, family: &F) -> Self {
        let models = self
            .models
            .iter()
            .filter(|m| {
                let keep = family.supports(m.as_ref());
                if !keep {
                    debug!(
                        "{} has no {} forecasting, left out of the pool",
                        m.short_name(),
                        family.name()
                    );
                }
                keep
            })
            .cloned()
            .collect();
        Self { models }
    }

    pub fn models(&self) -> &[Box<dyn FtsModel>] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Box<dyn FtsModel>> {
        self.models.iter()
    }
}
