//! Conventional FTS (Chen, 1996).

use fts_spi::{FtsModel, FuzzySet, ModelState, Result};

use super::{require_first_order, rules};

/// First-order model forecasting the mean centroid of the consequents.
#[derive(Debug, Clone, Default)]
pub struct ChenFts {
    state: ModelState,
}

impl ChenFts {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FtsModel for ChenFts {
    fn name(&self) -> &str {
        "Conventional FTS"
    }

    fn short_name(&self) -> &str {
        "CFTS"
    }

    fn is_high_order(&self) -> bool {
        false
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
        require_first_order(order)?;
        rules::learn(&mut self.state, data, sets, order)
    }

    fn forecast(&self, data: &[f64]) -> Result<Vec<f64>> {
        rules::point_forecast(&self.state, data, rules::mean_centroid)
    }

    fn clone_box(&self) -> Box<dyn FtsModel> {
        Box::new(self.clone())
    }
}
