//! Weighted FTS (Yu, 2005).

use fts_spi::{FtsModel, FuzzySet, ModelState, Result};

use super::{require_first_order, rules};

/// First-order model giving recent consequents linearly more weight.
#[derive(Debug, Clone, Default)]
pub struct WeightedFts {
    state: ModelState,
}

impl WeightedFts {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FtsModel for WeightedFts {
    fn name(&self) -> &str {
        "Weighted FTS"
    }

    fn short_name(&self) -> &str {
        "WFTS"
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
            rules::weighted_centroid(&flrg.chronological_weights(), sets)
        })
    }

    fn clone_box(&self) -> Box<dyn FtsModel> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets() -> Vec<FuzzySet> {
        (0..3)
            .map(|i| FuzzySet::triangular(format!("A{}", i), i as f64, 1.0))
            .collect()
    }

    #[test]
    fn test_recent_consequents_weigh_more() {
        let mut model = WeightedFts::new();
        model
            .train(&[0.0, 1.0, 0.0, 1.0, 0.0, 2.0], &sets(), 1)
            .unwrap();
        // A0 -> A1, A1, A2 with weights 1/6, 2/6, 3/6
        let forecast = model.forecast(&[0.0]).unwrap();
        assert!((forecast[0] - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_unseen_antecedent_falls_back_to_centroid() {
        let mut model = WeightedFts::new();
        model.train(&[0.0, 1.0, 0.0, 1.0], &sets(), 1).unwrap();
        let forecast = model.forecast(&[2.0]).unwrap();
        assert_eq!(forecast, vec![2.0]);
    }
}
