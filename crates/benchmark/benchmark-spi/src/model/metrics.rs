//! Metric bundles produced by the three evaluation families.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// A fixed set of named metrics for one task.
pub trait MetricBundle: Clone + Debug + Send + Sync + 'static {
    /// Measure names, in the order of [`values`](MetricBundle::values)
    const FIELDS: &'static [&'static str];

    fn values(&self) -> Vec<f64>;

    /// Bundle recorded for a failed task.
    fn nan() -> Self;

    /// Whether every metric is NaN.
    fn is_nan(&self) -> bool {
        self.values().iter().all(|v| v.is_nan())
    }
}

/// Point forecast accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointMetrics {
    pub rmse: f64,
    pub smape: f64,
    /// Theil's U statistic
    pub u: f64,
    /// Training plus forecasting time in seconds
    pub time: f64,
}

impl MetricBundle for PointMetrics {
    const FIELDS: &'static [&'static str] = &["RMSE", "SMAPE", "U", "TIME"];

    fn values(&self) -> Vec<f64> {
        vec![self.rmse, self.smape, self.u, self.time]
    }

    fn nan() -> Self {
        Self {
            rmse: f64::NAN,
            smape: f64::NAN,
            u: f64::NAN,
            time: f64::NAN,
        }
    }
}

/// Interval forecast quality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalMetrics {
    /// Mean interval width
    pub sharpness: f64,
    /// Mean absolute deviation of widths from their mean
    pub resolution: f64,
    /// Fraction of targets inside their interval
    pub coverage: f64,
    pub time: f64,
}

impl MetricBundle for IntervalMetrics {
    const FIELDS: &'static [&'static str] = &["Sharpness", "Resolution", "Coverage", "TIME"];

    fn values(&self) -> Vec<f64> {
        vec![self.sharpness, self.resolution, self.coverage, self.time]
    }

    fn nan() -> Self {
        Self {
            sharpness: f64::NAN,
            resolution: f64::NAN,
            coverage: f64::NAN,
            time: f64::NAN,
        }
    }
}

/// Multi-step distribution forecast quality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionMetrics {
    pub crps_interval: f64,
    pub crps_distribution: f64,
    /// Training plus interval-method forecasting time in seconds
    pub time_interval: f64,
    /// Training plus mixture-method forecasting time in seconds
    pub time_distribution: f64,
}

impl MetricBundle for DistributionMetrics {
    const FIELDS: &'static [&'static str] = &[
        "CRPS_Interval",
        "CRPS_Distribution",
        "TIME_Interval",
        "TIME_Distribution",
    ];

    fn values(&self) -> Vec<f64> {
        vec![
            self.crps_interval,
            self.crps_distribution,
            self.time_interval,
            self.time_distribution,
        ]
    }

    fn nan() -> Self {
        Self {
            crps_interval: f64::NAN,
            crps_distribution: f64::NAN,
            time_interval: f64::NAN,
            time_distribution: f64::NAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check<M: MetricBundle>() {
        let nan = M::nan();
        assert_eq!(nan.values().len(), M::FIELDS.len());
        assert!(nan.is_nan());
    }

    #[test]
    fn test_bundles_are_consistent() {
        check::<PointMetrics>();
        check::<IntervalMetrics>();
        check::<DistributionMetrics>();
    }

    #[test]
    fn test_values_follow_field_order() {
        let m = PointMetrics {
            rmse: 1.0,
            smape: 2.0,
            u: 3.0,
            time: 4.0,
        };
        assert_eq!(m.values(), vec![1.0, 2.0, 3.0, 4.0]);
        assert!(!m.is_nan());
    }
}
