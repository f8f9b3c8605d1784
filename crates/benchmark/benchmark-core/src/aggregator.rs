//! Key-based aggregation of task results across windows.

use std::collections::BTreeMap;
use std::time::Duration;

use benchmark_spi::{BenchmarkError, BenchmarkReport, KeyHistory, MetricBundle, ResultRecord, Result};

/// Collects per-window results into one history per descriptor key.
///
/// Histories are kept in window order whatever order records arrive in, so
/// aggregation is commutative across windows.
#[derive(Debug)]
pub struct ResultAggregator<M> {
    entries: BTreeMap<String, KeyHistory<M>>,
    /// Window the kept model of each key was trained in
    model_windows: BTreeMap<String, usize>,
}

impl<M: MetricBundle> ResultAggregator<M> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            model_windows: BTreeMap::new(),
        }
    }

    /// Add the result of one task run in `window`.
    pub fn record(&mut self, window: usize, record: ResultRecord<M>) {
        let key = record.key();
        let metrics = record.metrics();
        let failure = record.outcome.failure().cloned();
        let trained = record.model.is_trained();
        let ResultRecord {
            descriptor, model, ..
        } = record;

        let replace = trained
            && self
                .model_windows
                .get(&key)
                .map_or(true, |&kept| window < kept);

        let history = self
            .entries
            .entry(key.clone())
            .or_insert_with(|| KeyHistory::new(descriptor, model.clone_box()));
        if replace {
            history.model = model;
            self.model_windows.insert(key, window);
        }

        let pos = history.windows.partition_point(|&w| w <= window);
        history.windows.insert(pos, window);
        history.metrics.insert(pos, metrics);
        if let Some(failure) = failure {
            let pos = history.failures.partition_point(|(w, _)| *w <= window);
            history.failures.insert(pos, (window, failure));
        }
    }

    /// Add a whole batch from one window.
    pub fn record_batch(&mut self, window: usize, records: Vec<ResultRecord<M>>) {
        for record in records {
            self.record(window, record);
        }
    }

    /// Check that every key holds exactly one result per window.
    pub fn verify(&self, windows: usize) -> Result<()> {
        for (key, history) in &self.entries {
            let distinct = history.windows.windows(2).all(|w| w[0] != w[1]);
            if history.len() != windows || !distinct {
                return Err(BenchmarkError::InconsistentHistory {
                    key: key.clone(),
                    expected: windows,
                    actual: history.len(),
                });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&KeyHistory<M>> {
        self.entries.get(key)
    }

    /// Hand the collected histories over as a report.
    pub fn finish(
        self,
        family: &str,
        experiments: usize,
        elapsed: Duration,
        synthetic: bool,
    ) -> BenchmarkReport<M> {
        BenchmarkReport {
            family: family.to_string(),
            experiments,
            elapsed,
            synthetic,
            entries: self.entries,
        }
    }
}
