//! Discrete probability distributions over a value grid.

use serde::{Deserialize, Serialize};

use crate::error::{FtsError, Result};

/// Upper bound on grid size, guards against a tiny resolution on a wide universe.
const MAX_GRID_POINTS: usize = 1_000_000;

/// How a probabilistic model turns its rule base into a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DistributionMethod {
    /// Uniform mass over the forecast interval
    Interval,
    /// Probability-weighted mixture of consequent membership functions
    #[default]
    Mixture,
}

impl std::fmt::Display for DistributionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistributionMethod::Interval => write!(f, "interval"),
            DistributionMethod::Mixture => write!(f, "mixture"),
        }
    }
}

/// Probability mass function over ordered bins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityDistribution {
    bins: Vec<f64>,
    pmf: Vec<f64>,
}

impl ProbabilityDistribution {
    /// Evenly spaced grid `lower, lower + resolution, ...` not exceeding `upper`.
    pub fn grid(lower: f64, upper: f64, resolution: f64) -> Result<Vec<f64>> {
        if !(resolution.is_finite() && resolution > 0.0) {
            return Err(FtsError::invalid("resolution", "must be a positive finite number"));
        }
        if !(lower.is_finite() && upper.is_finite()) || upper < lower {
            return Err(FtsError::invalid(
                "universe",
                format!("invalid bounds [{}, {}]", lower, upper),
            ));
        }
        let steps = ((upper - lower) / resolution).floor() as usize;
        if steps >= MAX_GRID_POINTS {
            return Err(FtsError::invalid(
                "resolution",
                format!("grid would exceed {} points", MAX_GRID_POINTS),
            ));
        }
        Ok((0..=steps).map(|i| lower + i as f64 * resolution).collect())
    }

    /// Build a distribution by normalising non-negative weights.
    pub fn from_weights(bins: Vec<f64>, weights: Vec<f64>) -> Result<Self> {
        if bins.len() != weights.len() {
            return Err(FtsError::invalid(
                "weights",
                format!("expected {} weights, got {}", bins.len(), weights.len()),
            ));
        }
        let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
        if !(total.is_finite() && total > 0.0) {
            return Err(FtsError::NumericalError(
                "distribution has no probability mass on the grid".to_string(),
            ));
        }
        let pmf = weights.iter().map(|w| w.max(0.0) / total).collect();
        Ok(Self { bins, pmf })
    }

    pub fn bins(&self) -> &[f64] {
        &self.bins
    }

    pub fn pmf(&self) -> &[f64] {
        &self.pmf
    }

    /// Cumulative distribution evaluated at each bin.
    pub fn cdf(&self) -> Vec<f64> {
        let mut acc = 0.0;
        self.pmf
            .iter()
            .map(|p| {
                acc += p;
                acc
            })
            .collect()
    }

    /// Mean of the distribution.
    pub fn expected_value(&self) -> f64 {
        self.bins.iter().zip(&self.pmf).map(|(x, p)| x * p).sum()
    }

    /// Smallest bin whose cumulative probability reaches `alpha`.
    pub fn quantile(&self, alpha: f64) -> f64 {
        let mut acc = 0.0;
        for (x, p) in self.bins.iter().zip(&self.pmf) {
            acc += p;
            if acc >= alpha {
                return *x;
            }
        }
        self.bins.last().copied().unwrap_or(f64::NAN)
    }
}
