//! Outcome of a single benchmark task.

use fts_spi::{FtsError, FtsModel};
use thiserror::Error;

use super::{MetricBundle, ModelDescriptor};

/// Why a task produced no metrics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TaskFailure {
    /// Training or forecasting returned an error
    #[error(transparent)]
    Model(#[from] FtsError),

    /// The task panicked (after any retry)
    #[error("Task panicked: {0}")]
    Panicked(String),

    /// The task finished after its time limit
    #[error("Task exceeded {limit_ms} ms (took {elapsed_ms} ms)")]
    TimedOut { limit_ms: u64, elapsed_ms: u64 },

    /// The partitioner failed for this window
    #[error("Partitioning failed: {0}")]
    PartitionFailed(String),
}

/// Metrics of a completed task, or why it failed.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskOutcome<M> {
    Completed(M),
    Failed(TaskFailure),
}

impl<M: MetricBundle> TaskOutcome<M> {
    /// Metrics to aggregate: NaN for a failed task.
    pub fn metrics(&self) -> M {
        match self {
            TaskOutcome::Completed(m) => m.clone(),
            TaskOutcome::Failed(_) => M::nan(),
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, TaskOutcome::Completed(_))
    }

    pub fn failure(&self) -> Option<&TaskFailure> {
        match self {
            TaskOutcome::Completed(_) => None,
            TaskOutcome::Failed(f) => Some(f),
        }
    }
}

/// Result of one task, keyed by its descriptor.
#[derive(Debug, Clone)]
pub struct ResultRecord<M> {
    pub descriptor: ModelDescriptor,
    /// The task's own copy of the model, trained when training succeeded
    pub model: Box<dyn FtsModel>,
    pub outcome: TaskOutcome<M>,
}

impl<M: MetricBundle> ResultRecord<M> {
    pub fn new(descriptor: ModelDescriptor, model: Box<dyn FtsModel>, outcome: TaskOutcome<M>) -> Self {
        Self {
            descriptor,
            model,
            outcome,
        }
    }

    pub fn key(&self) -> String {
        self.descriptor.key()
    }

    pub fn metrics(&self) -> M {
        self.outcome.metrics()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointMetrics;

    #[test]
    fn test_failed_outcome_yields_nan_bundle() {
        let outcome: TaskOutcome<PointMetrics> =
            TaskOutcome::Failed(TaskFailure::Model(FtsError::EmptyPartition));
        assert!(outcome.metrics().is_nan());
        assert!(!outcome.is_completed());
        assert_eq!(
            outcome.failure(),
            Some(&TaskFailure::Model(FtsError::EmptyPartition))
        );
    }

    #[test]
    fn test_completed_outcome_yields_metrics() {
        let m = PointMetrics {
            rmse: 1.0,
            smape: 5.0,
            u: 0.9,
            time: 0.01,
        };
        let outcome = TaskOutcome::Completed(m);
        assert_eq!(outcome.metrics(), m);
        assert!(outcome.failure().is_none());
    }

    #[test]
    fn test_failure_messages() {
        let timeout = TaskFailure::TimedOut {
            limit_ms: 10,
            elapsed_ms: 25,
        };
        assert_eq!(timeout.to_string(), "Task exceeded 10 ms (took 25 ms)");
        let model: TaskFailure = FtsError::NotTrained.into();
        assert_eq!(model.to_string(), "Model must be trained before forecasting");
    }
}
