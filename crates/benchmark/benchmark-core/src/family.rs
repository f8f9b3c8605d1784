//! Point, interval and distribution evaluation families.

use std::time::{Duration, Instant};

use benchmark_api::AheadConfig;
use benchmark_spi::{DistributionMetrics, IntervalMetrics, MetricFamily, PointMetrics};
use fts_spi::{DistributionMethod, FtsError, FtsModel, ProbabilityDistribution, Result};

use crate::measures;

/// Seed the test slice with the training tail the model needs as context.
///
/// Returns the model input and the index of the forecast for `test[0]`.
fn one_step_input(model: &dyn FtsModel, train: &[f64], test: &[f64]) -> Result<(Vec<f64>, usize)> {
    let context = model.context_len();
    if train.len() < context {
        return Err(FtsError::InsufficientData {
            required: context,
            actual: train.len(),
        });
    }
    let mut input = train[train.len() - context..].to_vec();
    input.extend_from_slice(test);
    Ok((input, context - model.order()))
}

/// A window without test points cannot be scored.
fn require_test(test: &[f64]) -> Result<()> {
    if test.is_empty() {
        return Err(FtsError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    Ok(())
}

/// One-step-ahead point accuracy: RMSE, SMAPE, Theil's U.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointFamily;

impl MetricFamily for PointFamily {
    type Metrics = PointMetrics;

    fn name(&self) -> &str {
        "point"
    }

    fn supports(&self, model: &dyn FtsModel) -> bool {
        model.has_point_forecasting()
    }

    fn evaluate(
        &self,
        model: &dyn FtsModel,
        train: &[f64],
        test: &[f64],
        train_elapsed: Duration,
    ) -> Result<PointMetrics> {
        require_test(test)?;
        let start = Instant::now();
        let (input, offset) = one_step_input(model, train, test)?;
        let output = model.forecast(&input)?;
        let forecasts = output.get(offset..offset + test.len()).ok_or_else(|| {
            FtsError::NumericalError(format!(
                "expected {} forecasts, got {}",
                offset + test.len(),
                output.len()
            ))
        })?;
        let last = train.last().copied().unwrap_or(f64::NAN);

        let metrics = PointMetrics {
            rmse: measures::rmse(test, forecasts),
            smape: measures::smape(test, forecasts),
            u: measures::theil_u(test, forecasts, last),
            time: 0.0,
        };
        Ok(PointMetrics {
            time: (train_elapsed + start.elapsed()).as_secs_f64(),
            ..metrics
        })
    }
}

/// One-step-ahead interval quality: sharpness, resolution, coverage.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalFamily;

impl MetricFamily for IntervalFamily {
    type Metrics = IntervalMetrics;

    fn name(&self) -> &str {
        "interval"
    }

    fn supports(&self, model: &dyn FtsModel) -> bool {
        model.has_interval_forecasting()
    }

    fn evaluate(
        &self,
        model: &dyn FtsModel,
        train: &[f64],
        test: &[f64],
        train_elapsed: Duration,
    ) -> Result<IntervalMetrics> {
        require_test(test)?;
        let start = Instant::now();
        let (input, offset) = one_step_input(model, train, test)?;
        let output = model.forecast_interval(&input)?;
        let intervals = output.get(offset..offset + test.len()).ok_or_else(|| {
            FtsError::NumericalError(format!(
                "expected {} intervals, got {}",
                offset + test.len(),
                output.len()
            ))
        })?;

        let sharpness = measures::sharpness(intervals);
        let resolution = measures::resolution(intervals);
        let coverage = measures::coverage(test, intervals);
        Ok(IntervalMetrics {
            sharpness,
            resolution,
            coverage,
            time: (train_elapsed + start.elapsed()).as_secs_f64(),
        })
    }
}

/// Multi-step distribution quality: CRPS of the interval and mixture methods.
#[derive(Debug, Clone, Copy, Default)]
pub struct AheadFamily {
    config: AheadConfig,
}

impl AheadFamily {
    pub fn new(config: AheadConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AheadConfig {
        &self.config
    }

    /// Value grid over the universe of the model's partition.
    fn grid(&self, model: &dyn FtsModel) -> Result<Vec<f64>> {
        let partition = model
            .partition()
            .ok_or_else(|| FtsError::invalid("partition", "model has no partition assigned"))?;
        let (lower, upper) = partition.universe().ok_or(FtsError::EmptyPartition)?;
        let resolution = self.config.resolution.unwrap_or((upper - lower) / 100.0);
        ProbabilityDistribution::grid(lower, upper, resolution)
    }
}

impl MetricFamily for AheadFamily {
    type Metrics = DistributionMetrics;

    fn name(&self) -> &str {
        "ahead"
    }

    fn supports(&self, model: &dyn FtsModel) -> bool {
        model.has_probability_forecasting()
    }

    fn evaluate(
        &self,
        model: &dyn FtsModel,
        train: &[f64],
        test: &[f64],
        train_elapsed: Duration,
    ) -> Result<DistributionMetrics> {
        let steps = self.config.steps.min(test.len());
        if steps == 0 {
            return Err(FtsError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        let targets = &test[..steps];
        let grid = self.grid(model)?;

        let start = Instant::now();
        let interval = model.forecast_ahead_distribution(train, steps, &grid, DistributionMethod::Interval)?;
        let time_interval = train_elapsed + start.elapsed();

        let start = Instant::now();
        let mixture = model.forecast_ahead_distribution(train, steps, &grid, DistributionMethod::Mixture)?;
        let time_distribution = train_elapsed + start.elapsed();

        Ok(DistributionMetrics {
            crps_interval: measures::crps(&interval, targets),
            crps_distribution: measures::crps(&mixture, targets),
            time_interval: time_interval.as_secs_f64(),
            time_distribution: time_distribution.as_secs_f64(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fts_core::{create_model, ChenFts, GridPartitioner, ModelKind, Partitioner};

    fn trained(kind: ModelKind, order: usize, train: &[f64], partitions: usize) -> Box<dyn FtsModel> {
        let partition = GridPartitioner::new().partition(train, partitions, None).unwrap();
        let mut model = create_model(kind);
        model.set_order(order);
        model.train(train, &partition.sets, order).unwrap();
        model.set_partition(partition);
        model
    }

    #[test]
    fn test_point_family_scores_every_test_point() {
        let train = [10.0, 12.0, 11.0];
        let test = [13.0];
        let model = trained(ModelKind::Chen, 1, &train, 3);
        let m = PointFamily
            .evaluate(model.as_ref(), &train, &test, Duration::from_millis(2))
            .unwrap();
        // 11 sits in A1 whose only consequent is A2 (11.8)
        assert!((m.rmse - 1.2).abs() < 1e-9);
        assert!(m.smape.is_finite());
        assert!(m.u.is_finite());
        assert!(m.time >= 0.002);
    }

    #[test]
    fn test_point_family_with_higher_order() {
        let train: Vec<f64> = (0..20).map(|i| (i % 5) as f64).collect();
        let test = [0.0, 1.0, 2.0, 3.0];
        let model = trained(ModelKind::HighOrder, 3, &train, 5);
        let m = PointFamily
            .evaluate(model.as_ref(), &train, &test, Duration::ZERO)
            .unwrap();
        assert!(m.rmse.is_finite());
    }

    #[test]
    fn test_untrained_model_fails() {
        let model = ChenFts::new();
        assert!(PointFamily
            .evaluate(&model, &[1.0, 2.0], &[3.0], Duration::ZERO)
            .is_err());
    }

    #[test]
    fn test_empty_test_slice_is_an_error() {
        let train = [10.0, 12.0, 11.0, 13.0];
        let chen = trained(ModelKind::Chen, 1, &train, 3);
        assert_eq!(
            PointFamily.evaluate(chen.as_ref(), &train, &[], Duration::ZERO),
            Err(FtsError::InsufficientData {
                required: 1,
                actual: 0
            })
        );

        let ifts = trained(ModelKind::Interval, 1, &train, 3);
        assert!(IntervalFamily
            .evaluate(ifts.as_ref(), &train, &[], Duration::ZERO)
            .is_err());
    }

    #[test]
    fn test_interval_family() {
        let train: Vec<f64> = (0..30).map(|i| 10.0 + (i % 6) as f64).collect();
        let test = [11.0, 12.0, 13.0];
        let model = trained(ModelKind::Interval, 2, &train, 8);
        let m = IntervalFamily
            .evaluate(model.as_ref(), &train, &test, Duration::ZERO)
            .unwrap();
        assert!(m.sharpness > 0.0);
        assert!(m.resolution >= 0.0);
        assert!((0.0..=1.0).contains(&m.coverage));
    }

    #[test]
    fn test_ahead_family() {
        let train: Vec<f64> = (0..30).map(|i| 10.0 + (i % 6) as f64).collect();
        let test = [11.0, 12.0, 13.0];
        let model = trained(ModelKind::ProbabilisticWeighted, 1, &train, 8);
        let family = AheadFamily::new(AheadConfig::new(5));
        let m = family
            .evaluate(model.as_ref(), &train, &test, Duration::from_millis(1))
            .unwrap();
        assert!(m.crps_interval.is_finite());
        assert!(m.crps_distribution.is_finite());
        assert!(m.time_interval >= 0.001);
        assert!(m.time_distribution >= 0.001);
    }

    #[test]
    fn test_ahead_family_needs_test_points() {
        let train: Vec<f64> = (0..30).map(|i| (i % 6) as f64).collect();
        let model = trained(ModelKind::ProbabilisticWeighted, 1, &train, 8);
        let family = AheadFamily::default();
        assert!(family
            .evaluate(model.as_ref(), &train, &[], Duration::ZERO)
            .is_err());
    }
}
