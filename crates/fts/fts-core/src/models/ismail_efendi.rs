//! Improved weighted FTS (Efendi, Ismail & Deris, 2013).

use fts_spi::{FtsModel, FuzzySet, ModelState, Result};

use super::{require_first_order, rules};

/// First-order model weighting each consequent by how often it occurred.
#[derive(Debug, Clone, Default)]
pub struct ImprovedWeightedFts {
    state: ModelState,
}

impl ImprovedWeightedFts {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FtsModel for ImprovedWeightedFts {
    fn name(&self) -> &str {
        "Improved Weighted FTS"
    }

    fn short_name(&self) -> &str {
        "IWFTS"
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
        rules::point_forecast(&self.state, data, |flrg, sets| {
            rules::weighted_centroid(&flrg.frequencies(), sets)
        })
    }

    fn clone_box(&self) -> Box<dyn FtsModel> {
        Box::new(self.clone())
    }
}
