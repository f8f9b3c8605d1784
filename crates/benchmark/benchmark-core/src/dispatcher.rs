//! Parallel fan-out of one batch of tasks over the worker pool.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::{Duration, Instant};

use benchmark_api::DispatchConfig;
use benchmark_spi::{
    BenchmarkError, MetricBundle, MetricFamily, ModelDescriptor, ResultRecord, Result,
    TaskFailure, TaskOutcome,
};
use fts_spi::{Partition, Transformation};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::warn;

use crate::evaluator::{descriptor_for, evaluate_task};
use crate::pool::ModelPool;

/// Default worker count: the available hardware parallelism.
pub fn default_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Runs one task per pool model on a dedicated rayon pool.
pub struct Dispatcher {
    pool: ThreadPool,
    config: DispatchConfig,
}

impl Dispatcher {
    pub fn new(config: DispatchConfig) -> Result<Self> {
        config.validate()?;
        let threads = config.parallelism.unwrap_or_else(default_parallelism);
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("fts-bench-{}", i))
            .build()
            .map_err(|e| BenchmarkError::ThreadPool(e.to_string()))?;
        Ok(Self { pool, config })
    }

    /// Worker threads in the pool.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Evaluate every pool model against one window and partition.
    ///
    /// Each task deep-copies the model, partition and slices before touching
    /// them. Records come back in pool order once the whole batch is done.
    pub fn dispatch<F: MetricFamily>(
        &self,
        family: &F,
        models: &ModelPool,
        partition: &Partition,
        train: &[f64],
        test: &[f64],
        transformation: Option<&Arc<dyn Transformation>>,
    ) -> Vec<ResultRecord<F::Metrics>> {
        self.pool.install(|| {
            models
                .models()
                .par_iter()
                .map(|template| self.run_task(family, template.as_ref(), partition, train, test, transformation))
                .collect()
        })
    }

    fn run_task<F: MetricFamily>(
        &self,
        family: &F,
        template: &dyn fts_spi::FtsModel,
        partition: &Partition,
        train: &[f64],
        test: &[f64],
        transformation: Option<&Arc<dyn Transformation>>,
    ) -> ResultRecord<F::Metrics> {
        let descriptor = descriptor_for(template, partition);
        let attempts = if self.config.retry_panicked { 2 } else { 1 };
        let mut message = String::new();

        for attempt in 1..=attempts {
            let model = template.clone_box();
            let partition = partition.clone();
            let train = train.to_vec();
            let test = test.to_vec();
            let transformation = transformation.cloned();

            let start = Instant::now();
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                evaluate_task(family, model, partition, &train, &test, transformation)
            }));
            match result {
                Ok(record) => return self.enforce_timeout(record, start.elapsed()),
                Err(payload) => {
                    message = panic_message(payload.as_ref());
                    warn!(
                        "{} panicked (attempt {} of {}): {}",
                        descriptor,
                        attempt,
                        attempts,
                        message
                    );
                }
            }
        }

        let mut model = template.clone_box();
        model.set_partition(partition.clone());
        ResultRecord::new(
            descriptor,
            model,
            TaskOutcome::Failed(TaskFailure::Panicked(message)),
        )
    }

    fn enforce_timeout<M: MetricBundle>(&self, record: ResultRecord<M>, elapsed: Duration) -> ResultRecord<M> {
        let Some(limit_ms) = self.config.task_timeout_ms else {
            return record;
        };
        let elapsed_ms = elapsed.as_millis() as u64;
        if elapsed_ms <= limit_ms || !record.outcome.is_completed() {
            return record;
        }
        warn!("{} exceeded its time limit: {} ms > {} ms", record.descriptor, elapsed_ms, limit_ms);
        ResultRecord {
            outcome: TaskOutcome::Failed(TaskFailure::TimedOut {
                limit_ms,
                elapsed_ms,
            }),
            ..record
        }
    }
}

/// Records for a batch whose partitioner failed: one failure per pool model.
pub fn fail_batch<M: MetricBundle>(
    models: &ModelPool,
    partitioner: &str,
    partitions: usize,
    failure: TaskFailure,
) -> Vec<ResultRecord<M>> {
    models
        .iter()
        .map(|m| {
            ResultRecord::new(
                ModelDescriptor::new(m.short_name(), m.order(), partitioner, partitions),
                m.clone_box(),
                TaskOutcome::Failed(failure.clone()),
            )
        })
        .collect()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
