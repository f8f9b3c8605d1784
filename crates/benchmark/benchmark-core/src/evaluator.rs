//! Evaluation of one model on one window.

use std::sync::Arc;
use std::time::Instant;

use benchmark_spi::{MetricFamily, ModelDescriptor, ResultRecord, TaskFailure, TaskOutcome};
use fts_spi::{FtsModel, FuzzySet, Partition, Result, Transformation};
use tracing::{debug, warn};

/// Aggregation key of `model` evaluated with `partition`.
pub fn descriptor_for(model: &dyn FtsModel, partition: &Partition) -> ModelDescriptor {
    ModelDescriptor::new(
        model.short_name(),
        model.order(),
        partition.module.as_str(),
        partition.partitions,
    )
}

/// Train `model` on `train` and score it on `test`.
///
/// The model and partition are owned by the task. Any error is recorded in
/// the returned outcome instead of being propagated.
pub fn evaluate_task<F: MetricFamily>(
    family: &F,
    mut model: Box<dyn FtsModel>,
    partition: Partition,
    train: &[f64],
    test: &[f64],
    transformation: Option<Arc<dyn Transformation>>,
) -> ResultRecord<F::Metrics> {
    let descriptor = descriptor_for(model.as_ref(), &partition);
    let sets = partition.sets.clone();
    model.set_partition(partition);
    if let Some(t) = transformation {
        model.append_transformation(t);
    }

    let outcome = match train_and_score(family, model.as_mut(), &sets, train, test) {
        Ok(metrics) => {
            debug!("{} {:?}", descriptor, metrics);
            TaskOutcome::Completed(metrics)
        }
        Err(e) => {
            warn!("{} failed: {}", descriptor, e);
            TaskOutcome::Failed(TaskFailure::Model(e))
        }
    };
    ResultRecord::new(descriptor, model, outcome)
}

fn train_and_score<F: MetricFamily>(
    family: &F,
    model: &mut dyn FtsModel,
    sets: &[FuzzySet],
    train: &[f64],
    test: &[f64],
) -> Result<F::Metrics> {
    let order = model.order();
    let start = Instant::now();
    model.train(train, sets, order)?;
    let train_elapsed = start.elapsed();
    family.evaluate(model, train, test, train_elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::PointFamily;
    use benchmark_spi::MetricBundle;
    use fts_core::{create_model, Differential, GridPartitioner, ModelKind, Partitioner};

    #[test]
    fn test_completed_task() {
        let train = [10.0, 12.0, 11.0];
        let partition = GridPartitioner::new().partition(&train, 3, None).unwrap();
        let record = evaluate_task(
            &PointFamily,
            create_model(ModelKind::Chen),
            partition,
            &train,
            &[13.0],
            None,
        );
        assert_eq!(record.key(), "CFTS n = 1 Grid q = 3");
        assert!(record.outcome.is_completed());
        assert!(record.model.is_trained());
        assert_eq!(record.model.partition().map(|p| p.len()), Some(3));
    }

    #[test]
    fn test_empty_partition_is_contained() {
        let train = [10.0, 12.0, 11.0];
        let partition = GridPartitioner::new().partition(&train, 0, None).unwrap();
        let record = evaluate_task(
            &PointFamily,
            create_model(ModelKind::Chen),
            partition,
            &train,
            &[13.0],
            None,
        );
        assert_eq!(record.key(), "CFTS n = 1 Grid q = 0");
        assert!(record.metrics().is_nan());
        assert!(matches!(
            record.outcome,
            TaskOutcome::Failed(TaskFailure::Model(fts_spi::FtsError::EmptyPartition))
        ));
    }

    #[test]
    fn test_transformation_is_registered() {
        let train: Vec<f64> = (0..20).map(|i| 100.0 + i as f64 * 2.0).collect();
        let diff: Arc<dyn Transformation> = Arc::new(Differential::new(1).unwrap());
        let partition = GridPartitioner::new()
            .partition(&train, 5, Some(diff.as_ref()))
            .unwrap();
        let record = evaluate_task(
            &PointFamily,
            create_model(ModelKind::HighOrder),
            partition,
            &train,
            &[140.0, 142.0],
            Some(diff),
        );
        assert_eq!(record.model.context_len(), 2);
        let metrics = record.metrics();
        assert!(metrics.rmse.is_finite());
    }
}
