//! Sliding-window benchmark driver.

use std::time::Instant;

use benchmark_api::{AheadConfig, BenchmarkConfig};
use benchmark_spi::{
    BenchmarkError, BenchmarkReport, DistributionMetrics, IntervalMetrics, MetricFamily,
    PointMetrics, Result, ResultSink, TaskFailure,
};
use fts_core::{create_model, create_partitioner, create_transformation};
use fts_spi::{FtsModel, Partitioner};
use tracing::{debug, info, warn};

use crate::aggregator::ResultAggregator;
use crate::dispatcher::{fail_batch, Dispatcher};
use crate::family::{AheadFamily, IntervalFamily, PointFamily};
use crate::partitioning::fit_partition;
use crate::pool::ModelPool;
use crate::windowing::sliding_window;

/// Fits every configured model, order and partitioning over every window of
/// a series and aggregates the scores by descriptor key.
///
/// Windows, partition counts and partitioners are walked sequentially; each
/// batch of model tasks runs in parallel and is drained before the next.
#[derive(Debug, Clone)]
pub struct SlidingWindowBenchmark {
    config: BenchmarkConfig,
}

impl SlidingWindowBenchmark {
    pub fn new(config: BenchmarkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// One untrained template per configured model.
    pub fn templates(&self) -> Vec<Box<dyn FtsModel>> {
        self.config.models.iter().map(|k| create_model(*k)).collect()
    }

    /// One-step point accuracy over every window.
    pub fn point_sliding_window(&self, data: &[f64]) -> Result<BenchmarkReport<PointMetrics>> {
        self.run(data, &PointFamily)
    }

    /// One-step interval quality over every window.
    pub fn interval_sliding_window(&self, data: &[f64]) -> Result<BenchmarkReport<IntervalMetrics>> {
        self.run(data, &IntervalFamily)
    }

    /// Multi-step distribution quality over every window.
    pub fn ahead_sliding_window(
        &self,
        data: &[f64],
        ahead: AheadConfig,
    ) -> Result<BenchmarkReport<DistributionMetrics>> {
        ahead.validate()?;
        self.run(data, &AheadFamily::new(ahead))
    }

    pub fn run<F: MetricFamily>(&self, data: &[f64], family: &F) -> Result<BenchmarkReport<F::Metrics>> {
        self.run_with_templates(data, family, &self.templates())
    }

    /// Run `family` and hand the report's table to `sink`.
    pub fn run_and_save<F: MetricFamily>(
        &self,
        data: &[f64],
        family: &F,
        sink: &mut dyn ResultSink,
    ) -> Result<BenchmarkReport<F::Metrics>> {
        let report = self.run(data, family)?;
        sink.save(&report.to_table())?;
        Ok(report)
    }

    /// Run `family` with caller-supplied model templates in place of the
    /// configured model kinds.
    pub fn run_with_templates<F: MetricFamily>(
        &self,
        data: &[f64],
        family: &F,
        templates: &[Box<dyn FtsModel>],
    ) -> Result<BenchmarkReport<F::Metrics>> {
        let started = Instant::now();
        info!("Process start: {} benchmark over {} points", family.name(), data.len());

        let pool = ModelPool::build(templates, self.config.max_order).for_family(family);
        if pool.is_empty() {
            return Err(BenchmarkError::InvalidConfig(format!(
                "no configured model supports {} forecasting",
                family.name()
            )));
        }
        let partitioners: Vec<Box<dyn Partitioner>> = self
            .config
            .partitioners
            .iter()
            .map(|k| create_partitioner(*k))
            .collect();
        let transformation = self
            .config
            .transformation
            .map(create_transformation)
            .transpose()?;
        let dispatcher = Dispatcher::new(self.config.dispatch)?;
        debug!(
            "{} models, {} partitioners, {} worker threads",
            pool.len(),
            partitioners.len(),
            dispatcher.threads()
        );

        let mut aggregator = ResultAggregator::new();
        let mut experiments = 0;
        for window in sliding_window(data, &self.config.window) {
            if self.config.dump {
                info!("Window: {}", window.start);
            } else {
                debug!("Window: {}", window.start);
            }

            for &partitions in &self.config.partitions {
                for partitioner in &partitioners {
                    let fitted = fit_partition(
                        partitioner.as_ref(),
                        window.train,
                        partitions,
                        transformation.as_deref(),
                    );
                    let records = match fitted {
                        Ok(partition) => dispatcher.dispatch(
                            family,
                            &pool,
                            &partition,
                            window.train,
                            window.test,
                            transformation.as_ref(),
                        ),
                        Err(e) => {
                            warn!(
                                "{} q = {} failed on window {}: {}",
                                partitioner.name(),
                                partitions,
                                window.start,
                                e
                            );
                            fail_batch(
                                &pool,
                                partitioner.name(),
                                partitions,
                                TaskFailure::PartitionFailed(e.to_string()),
                            )
                        }
                    };
                    aggregator.record_batch(window.index, records);
                }
            }
            experiments += 1;
        }

        aggregator.verify(experiments)?;
        let elapsed = started.elapsed();
        info!("Process end: {} keys over {} windows", aggregator.len(), experiments);
        info!("Process duration: {:.3} s", elapsed.as_secs_f64());
        Ok(aggregator.finish(family.name(), experiments, elapsed, self.config.synthetic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;
    use benchmark_api::{EdgePolicy, SlidingWindowConfig};
    use benchmark_spi::MetricBundle;
    use fts_api::{ModelKind, PartitionerKind};

    const SERIES: [f64; 8] = [10.0, 12.0, 11.0, 13.0, 12.0, 14.0, 13.0, 15.0];

    fn config() -> BenchmarkConfig {
        BenchmarkConfig::new(SlidingWindowConfig::new(4, 0.75))
            .with_models(vec![ModelKind::Chen])
            .with_partitions(vec![3])
            .with_parallelism(2)
    }

    #[test]
    fn test_rejects_invalid_config() {
        assert!(SlidingWindowBenchmark::new(config().with_models(vec![])).is_err());
        assert!(SlidingWindowBenchmark::new(config().with_max_order(0)).is_err());
    }

    #[test]
    fn test_rejects_repeated_partitioning_settings() {
        assert!(matches!(
            SlidingWindowBenchmark::new(config().with_partitions(vec![3, 3])),
            Err(BenchmarkError::InvalidConfig(_))
        ));
        assert!(matches!(
            SlidingWindowBenchmark::new(
                config().with_partitioners(vec![PartitionerKind::Grid, PartitionerKind::Grid])
            ),
            Err(BenchmarkError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_point_run() {
        let bench = SlidingWindowBenchmark::new(config()).unwrap();
        let report = bench.point_sliding_window(&SERIES).unwrap();
        assert_eq!(report.family, "point");
        assert_eq!(report.experiments, 2);
        assert_eq!(report.len(), 1);

        let history = report.get("CFTS n = 1 Grid q = 3").unwrap();
        assert_eq!(history.windows, vec![0, 1]);
        assert!((history.metrics[0].rmse - 1.2).abs() < 1e-9);
        assert!(history.metrics.iter().all(|m| !m.is_nan()));
        assert!(history.model.is_trained());
    }

    #[test]
    fn test_partition_failure_is_contained() {
        let mut data = SERIES;
        data[1] = f64::NAN;
        let bench = SlidingWindowBenchmark::new(config().with_models(vec![
            ModelKind::Chen,
            ModelKind::HighOrder,
        ]))
        .unwrap();
        let report = bench.point_sliding_window(&data).unwrap();

        // CFTS plus HOFTS at orders 1..=3
        assert_eq!(report.len(), 4);
        for history in report.entries.values() {
            assert_eq!(history.len(), 2);
            assert!(history.metrics[0].is_nan());
            assert!(matches!(history.failures[0], (0, TaskFailure::PartitionFailed(_))));
        }
        assert!(!report.get("CFTS n = 1 Grid q = 3").unwrap().metrics[1].is_nan());
    }

    #[test]
    fn test_family_without_models() {
        let bench = SlidingWindowBenchmark::new(config()).unwrap();
        assert!(matches!(
            bench.interval_sliding_window(&SERIES),
            Err(BenchmarkError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_drop_policy_skips_partial_window() {
        let window = SlidingWindowConfig::new(3, 0.67).with_edge_policy(EdgePolicy::Drop);
        let bench = SlidingWindowBenchmark::new(BenchmarkConfig { window, ..config() }).unwrap();
        let report = bench.point_sliding_window(&SERIES).unwrap();
        assert_eq!(report.experiments, 2);
        assert_eq!(report.get("CFTS n = 1 Grid q = 3").unwrap().windows, vec![0, 1]);
    }

    #[test]
    fn test_run_and_save() {
        let bench = SlidingWindowBenchmark::new(config().with_synthetic(true)).unwrap();
        let mut sink = MemorySink::new();
        let report = bench.run_and_save(&SERIES, &PointFamily, &mut sink).unwrap();
        let table = sink.last().unwrap();
        assert!(table.synthetic);
        assert_eq!(table.experiments, report.experiments);
        assert_eq!(table.rows[0].key, "CFTS n = 1 Grid q = 3");
    }

    #[test]
    fn test_empty_partition_fails_every_window() {
        let bench = SlidingWindowBenchmark::new(config().with_partitions(vec![0])).unwrap();
        let report = bench.point_sliding_window(&SERIES).unwrap();
        let history = report.get("CFTS n = 1 Grid q = 0").unwrap();
        assert_eq!(history.len(), 2);
        assert!(history.metrics.iter().all(|m| m.is_nan()));
        assert!(!history.model.is_trained());
        assert_eq!(history.failures.len(), 2);
    }
}
