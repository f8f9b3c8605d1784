//! Probabilistic weighted FTS.
//!
//! Each rule group carries the empirical probability of its consequents.
//! Point forecasts are the expected centroid, interval forecasts the
//! probability-weighted supports, and multi-step distributions are built over
//! a caller-supplied value grid, feeding each step's expected value back as the
//! next lag.

use fts_spi::{
    DistributionMethod, FtsError, FtsModel, FuzzySet, Interval, ModelState,
    ProbabilityDistribution, Result,
};

use super::rules;
use crate::fuzzify::fuzzify_series;

#[derive(Debug, Clone, Default)]
pub struct ProbabilisticWeightedFts {
    state: ModelState,
}

impl ProbabilisticWeightedFts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(order: usize) -> Self {
        Self {
            state: ModelState::new(order),
        }
    }

    /// Consequent probabilities for an antecedent; unseen antecedents put all
    /// mass on their last set.
    fn rule_weights(&self, lhs: &[usize]) -> Result<Vec<(usize, f64)>> {
        match self.state.flrgs.get(lhs) {
            Some(flrg) if !flrg.is_empty() => Ok(flrg.frequencies()),
            _ => {
                let last = lhs.last().copied().ok_or(FtsError::EmptyPartition)?;
                Ok(vec![(last, 1.0)])
            }
        }
    }

    fn interval_distribution(&self, weights: &[(usize, f64)], grid: &[f64]) -> Result<ProbabilityDistribution> {
        let bounds = weighted_bounds(weights, &self.state.sets);
        let mut mass: Vec<f64> = grid
            .iter()
            .map(|&x| if bounds.contains(x) { 1.0 } else { 0.0 })
            .collect();
        if mass.iter().all(|&m| m == 0.0) {
            mass[nearest(grid, bounds.midpoint())] = 1.0;
        }
        ProbabilityDistribution::from_weights(grid.to_vec(), mass)
    }

    fn mixture_distribution(&self, weights: &[(usize, f64)], grid: &[f64]) -> Result<ProbabilityDistribution> {
        let mut mass = vec![0.0; grid.len()];
        for &(r, p) in weights {
            let Some(set) = self.state.sets.get(r) else {
                continue;
            };
            let mu: Vec<f64> = grid.iter().map(|&x| set.membership(x)).collect();
            let total: f64 = mu.iter().sum();
            if total > 0.0 {
                for (m, v) in mass.iter_mut().zip(&mu) {
                    *m += p * v / total;
                }
            }
        }
        if mass.iter().all(|&m| m == 0.0) {
            let centre = rules::weighted_centroid(weights, &self.state.sets);
            mass[nearest(grid, centre)] = 1.0;
        }
        ProbabilityDistribution::from_weights(grid.to_vec(), mass)
    }
}

fn weighted_bounds(weights: &[(usize, f64)], sets: &[FuzzySet]) -> Interval {
    let mut lower = 0.0;
    let mut upper = 0.0;
    for &(r, p) in weights {
        if let Some(set) = sets.get(r) {
            lower += p * set.lower();
            upper += p * set.upper();
        }
    }
    Interval::new(lower, upper)
}

/// Index of the grid point closest to `x`.
fn nearest(grid: &[f64], x: f64) -> usize {
    grid.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (*a - x)
                .abs()
                .partial_cmp(&(*b - x).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)
        .unwrap_or(0)
}

impl FtsModel for ProbabilisticWeightedFts {
    fn name(&self) -> &str {
        "Probabilistic Weighted FTS"
    }

    fn short_name(&self) -> &str {
        "PWFTS"
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
        rules::point_forecast(&self.state, data, |flrg, sets| {
            rules::weighted_centroid(&flrg.frequencies(), sets)
        })
    }

    fn forecast_interval(&self, data: &[f64]) -> Result<Vec<Interval>> {
        rules::interval_forecast(&self.state, data, |flrg, sets| {
            weighted_bounds(&flrg.frequencies(), sets)
        })
    }

    fn forecast_ahead_distribution(
        &self,
        data: &[f64],
        steps: usize,
        grid: &[f64],
        method: DistributionMethod,
    ) -> Result<Vec<ProbabilityDistribution>> {
        let state = &self.state;
        if !state.trained {
            return Err(FtsError::NotTrained);
        }
        if !state.transformations.is_empty() {
            return Err(FtsError::invalid(
                "transformations",
                "distribution forecasts require an untransformed model",
            ));
        }
        if grid.is_empty() {
            return Err(FtsError::invalid("grid", "must contain at least one point"));
        }
        let order = state.order;
        if data.len() < order {
            return Err(FtsError::InsufficientData {
                required: order,
                actual: data.len(),
            });
        }

        let mut window = data[data.len() - order..].to_vec();
        let mut distributions = Vec::with_capacity(steps);
        for _ in 0..steps {
            let lhs = fuzzify_series(&window, &state.sets)?;
            let weights = self.rule_weights(&lhs)?;
            let distribution = match method {
                DistributionMethod::Interval => self.interval_distribution(&weights, grid)?,
                DistributionMethod::Mixture => self.mixture_distribution(&weights, grid)?,
            };
            window.remove(0);
            window.push(distribution.expected_value());
            distributions.push(distribution);
        }
        Ok(distributions)
    }

    fn has_interval_forecasting(&self) -> bool {
        true
    }

    fn has_probability_forecasting(&self) -> bool {
        true
    }

    fn clone_box(&self) -> Box<dyn FtsModel> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Differential;
    use std::sync::Arc;

    fn sets() -> Vec<FuzzySet> {
        (0..4)
            .map(|i| FuzzySet::triangular(format!("A{}", i), i as f64, 1.0))
            .collect()
    }

    fn trained() -> ProbabilisticWeightedFts {
        let mut model = ProbabilisticWeightedFts::with_order(2);
        model
            .train(&[0.0, 1.0, 2.0, 0.0, 1.0, 3.0], &sets(), 2)
            .unwrap();
        model
    }

    fn grid() -> Vec<f64> {
        ProbabilityDistribution::grid(-1.0, 4.0, 0.5).unwrap()
    }

    #[test]
    fn test_point_and_interval() {
        let model = trained();
        // [A0, A1] -> A2 (0.5), A3 (0.5)
        assert_eq!(model.forecast(&[0.0, 1.0]).unwrap(), vec![2.5]);
        assert_eq!(
            model.forecast_interval(&[0.0, 1.0]).unwrap(),
            vec![Interval::new(1.5, 3.5)]
        );
    }

    #[test]
    fn test_mixture_distribution() {
        let model = trained();
        let dists = model
            .forecast_ahead_distribution(&[5.0, 0.0, 1.0], 3, &grid(), DistributionMethod::Mixture)
            .unwrap();
        assert_eq!(dists.len(), 3);
        for dist in &dists {
            let total: f64 = dist.pmf().iter().sum();
            assert!((total - 1.0).abs() < 1e-9);
            assert!(dist.expected_value().is_finite());
        }
        // symmetric mixture of A2 and A3
        assert!((dists[0].expected_value() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_interval_distribution_is_uniform_inside_bounds() {
        let model = trained();
        let dists = model
            .forecast_ahead_distribution(&[0.0, 1.0], 1, &grid(), DistributionMethod::Interval)
            .unwrap();
        let dist = &dists[0];
        for (x, p) in dist.bins().iter().zip(dist.pmf()) {
            if *x < 1.5 || *x > 3.5 {
                assert_eq!(*p, 0.0);
            } else {
                assert!((p - 0.2).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_distribution_rejects_transformations() {
        let mut model = ProbabilisticWeightedFts::new();
        model.append_transformation(Arc::new(Differential::new(1).unwrap()));
        model.train(&[0.0, 1.0, 2.0, 3.0], &sets(), 1).unwrap();
        assert!(model
            .forecast_ahead_distribution(&[1.0], 1, &grid(), DistributionMethod::Mixture)
            .is_err());
    }

    #[test]
    fn test_distribution_requires_training() {
        let model = ProbabilisticWeightedFts::new();
        assert_eq!(
            model.forecast_ahead_distribution(&[1.0], 1, &grid(), DistributionMethod::Mixture),
            Err(FtsError::NotTrained)
        );
    }

    #[test]
    fn test_capabilities() {
        let model = ProbabilisticWeightedFts::new();
        assert!(model.has_interval_forecasting());
        assert!(model.has_probability_forecasting());
    }
}
