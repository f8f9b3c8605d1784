//! Aggregated benchmark results.

use std::collections::BTreeMap;
use std::time::Duration;

use fts_spi::FtsModel;
use serde::Serialize;

use super::{MetricBundle, ModelDescriptor, TaskFailure};

/// Mean and standard deviation of one measure across windows, NaNs skipped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSummary {
    pub mean: f64,
    pub std: f64,
}

impl FieldSummary {
    /// Population statistics of the finite values; NaN when there are none.
    pub fn of(values: &[f64]) -> Self {
        let finite: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        if finite.is_empty() {
            return Self {
                mean: f64::NAN,
                std: f64::NAN,
            };
        }
        let n = finite.len() as f64;
        let mean = finite.iter().sum::<f64>() / n;
        let var = finite.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Self {
            mean,
            std: var.sqrt(),
        }
    }
}

/// Everything collected for one key, in window order.
#[derive(Debug, Clone)]
pub struct KeyHistory<M> {
    pub descriptor: ModelDescriptor,
    /// A trained instance of the model, from the earliest window that trained
    pub model: Box<dyn FtsModel>,
    /// Window indices, ascending
    pub windows: Vec<usize>,
    /// One bundle per entry of `windows`
    pub metrics: Vec<M>,
    /// Failed windows with their cause
    pub failures: Vec<(usize, TaskFailure)>,
}

impl<M: MetricBundle> KeyHistory<M> {
    pub fn new(descriptor: ModelDescriptor, model: Box<dyn FtsModel>) -> Self {
        Self {
            descriptor,
            model,
            windows: Vec::new(),
            metrics: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Values of measure `field` across windows.
    pub fn column(&self, field: usize) -> Vec<f64> {
        self.metrics
            .iter()
            .map(|m| m.values().get(field).copied().unwrap_or(f64::NAN))
            .collect()
    }

    /// Per-measure summary, in [`MetricBundle::FIELDS`] order.
    pub fn summary(&self) -> Vec<FieldSummary> {
        (0..M::FIELDS.len())
            .map(|i| FieldSummary::of(&self.column(i)))
            .collect()
    }
}

/// Final result of a benchmark run.
#[derive(Debug, Clone)]
pub struct BenchmarkReport<M> {
    /// Evaluation family name ("point", "interval" or "ahead")
    pub family: String,
    /// Number of windows processed
    pub experiments: usize,
    pub elapsed: Duration,
    /// Whether sinks should write mean/std summaries instead of raw histories
    pub synthetic: bool,
    pub entries: BTreeMap<String, KeyHistory<M>>,
}

impl<M: MetricBundle> BenchmarkReport<M> {
    pub fn get(&self, key: &str) -> Option<&KeyHistory<M>> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flatten into the model-free table the sinks persist.
    pub fn to_table(&self) -> ReportTable {
        let rows = self
            .entries
            .iter()
            .map(|(key, history)| TableRow {
                key: key.clone(),
                model: history.descriptor.model.clone(),
                order: history.descriptor.order,
                scheme: history.descriptor.partitioner.clone(),
                partitions: history.descriptor.partitions,
                size: history.model.state().flrgs.len(),
                windows: history.windows.clone(),
                values: (0..M::FIELDS.len()).map(|i| history.column(i)).collect(),
                failures: history
                    .failures
                    .iter()
                    .map(|(w, f)| format!("window {}: {}", w, f))
                    .collect(),
            })
            .collect();

        ReportTable {
            family: self.family.clone(),
            experiments: self.experiments,
            elapsed_secs: self.elapsed.as_secs_f64(),
            synthetic: self.synthetic,
            fields: M::FIELDS.iter().map(|f| f.to_string()).collect(),
            rows,
        }
    }
}

/// One key of a [`ReportTable`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub key: String,
    pub model: String,
    pub order: usize,
    pub scheme: String,
    pub partitions: usize,
    /// Rule groups learned by the kept model
    pub size: usize,
    pub windows: Vec<usize>,
    /// `values[field][i]` is measure `field` in window `windows[i]`
    pub values: Vec<Vec<f64>>,
    pub failures: Vec<String>,
}

impl TableRow {
    pub fn summary(&self) -> Vec<FieldSummary> {
        self.values.iter().map(|v| FieldSummary::of(v)).collect()
    }
}

/// Serializable view of a [`BenchmarkReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTable {
    pub family: String,
    pub experiments: usize,
    pub elapsed_secs: f64,
    pub synthetic: bool,
    pub fields: Vec<String>,
    pub rows: Vec<TableRow>,
}
