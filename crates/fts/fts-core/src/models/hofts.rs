//! High order FTS.

use fts_spi::{FtsModel, FuzzySet, ModelState, Result};

use super::rules;

/// Model of arbitrary order forecasting the mean centroid of the consequents.
#[derive(Debug, Clone, Default)]
pub struct HighOrderFts {
    state: ModelState,
}

impl HighOrderFts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(order: usize) -> Self {
        Self {
            state: ModelState::new(order),
        }
    }
}

impl FtsModel for HighOrderFts {
    fn name(&self) -> &str {
        "High Order FTS"
    }

    fn short_name(&self) -> &str {
        "HOFTS"
    }

    fn is_high_order(&self) -> bool {
        true
    }

    fn min_order(&self) -> usize {
        1
    }

    fn state(&self) -> &ModelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ModelState {
        &mut self.state
    }

    fn train(&mut self, data: &[f64], sets: &[FuzzySet], order: usize) -> Result<()> {
        rules::learn(&mut self.state, data, sets, order)
    }

    fn forecast(&self, data: &[f64]) -> Result<Vec<f64>> {
        rules::point_forecast(&self.state, data, rules::mean_centroid)
    }

    fn clone_box(&self) -> Box<dyn FtsModel> {
        Box::new(self.clone())
    }
}
