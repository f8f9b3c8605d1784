//! Interval FTS.

use fts_spi::{FtsModel, FuzzySet, Interval, ModelState, Result};

use super::rules;

/// High order model producing the envelope of the consequent supports.
///
/// The point forecast is the midpoint of that envelope.
#[derive(Debug, Clone, Default)]
pub struct IntervalFts {
    state: ModelState,
}

impl IntervalFts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(order: usize) -> Self {
        Self {
            state: ModelState::new(order),
        }
    }
}

fn envelope(flrg: &fts_spi::Flrg, sets: &[FuzzySet]) -> Interval {
    let mut lower = f64::INFINITY;
    let mut upper = f64::NEG_INFINITY;
    for r in flrg.distinct() {
        if let Some(set) = sets.get(r) {
            lower = lower.min(set.lower());
            upper = upper.max(set.upper());
        }
    }
    Interval::new(lower, upper)
}

impl FtsModel for IntervalFts {
    fn name(&self) -> &str {
        "Interval FTS"
    }

    fn short_name(&self) -> &str {
        "IFTS"
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
        Ok(self
            .forecast_interval(data)?
            .iter()
            .map(Interval::midpoint)
            .collect())
    }

    fn forecast_interval(&self, data: &[f64]) -> Result<Vec<Interval>> {
        rules::interval_forecast(&self.state, data, envelope)
    }

    fn has_interval_forecasting(&self) -> bool {
        true
    }

    fn clone_box(&self) -> Box<dyn FtsModel> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets() -> Vec<FuzzySet> {
        (0..4)
            .map(|i| FuzzySet::triangular(format!("A{}", i), i as f64, 1.0))
            .collect()
    }

    #[test]
    fn test_interval_is_envelope_of_consequents() {
        let mut model = IntervalFts::with_order(2);
        model
            .train(&[0.0, 1.0, 2.0, 0.0, 1.0, 3.0], &sets(), 2)
            .unwrap();
        let intervals = model.forecast_interval(&[0.0, 1.0]).unwrap();
        assert_eq!(intervals, vec![Interval::new(1.0, 4.0)]);
        assert_eq!(model.forecast(&[0.0, 1.0]).unwrap(), vec![2.5]);
    }

    #[test]
    fn test_unseen_antecedent_uses_set_support() {
        let mut model = IntervalFts::new();
        model.train(&[0.0, 1.0, 0.0, 1.0], &sets(), 1).unwrap();
        let intervals = model.forecast_interval(&[3.0]).unwrap();
        assert_eq!(intervals, vec![Interval::new(2.0, 4.0)]);
    }

    #[test]
    fn test_capabilities() {
        let model = IntervalFts::new();
        assert!(model.has_point_forecasting());
        assert!(model.has_interval_forecasting());
        assert!(!model.has_probability_forecasting());
    }
}
