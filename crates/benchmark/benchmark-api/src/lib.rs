//! Sliding-Window Benchmark Consumer API
//!
//! Configuration types for benchmark runs. Every type deserializes from a
//! partial JSON document, missing fields taking their defaults.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use fts_api::{ModelKind, PartitionerKind, TransformationKind};
use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use benchmark_spi::{
    BenchmarkError, BenchmarkReport, DistributionMetrics, FieldSummary, IntervalMetrics,
    KeyHistory, MetricBundle, MetricFamily, ModelDescriptor, PointMetrics, ReportTable,
    Result, ResultRecord, ResultSink, TableRow, TaskFailure, TaskOutcome, Window,
};

/// What to do with the trailing segment shorter than a full window
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Yield it as a shortened window; its test slice may be empty
    #[default]
    Shorten,
    /// Yield full windows only
    Drop,
}

impl fmt::Display for EdgePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgePolicy::Shorten => write!(f, "shorten"),
            EdgePolicy::Drop => write!(f, "drop"),
        }
    }
}

impl FromStr for EdgePolicy {
    type Err = BenchmarkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "shorten" => Ok(EdgePolicy::Shorten),
            "drop" => Ok(EdgePolicy::Drop),
            other => Err(BenchmarkError::invalid(
                "edge_policy",
                format!("expected 'shorten' or 'drop', got '{}'", other),
            )),
        }
    }
}

/// Window geometry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SlidingWindowConfig {
    /// Observations per window; windows do not overlap
    pub window_size: usize,
    /// Fraction of each window used for training
    pub train_ratio: f64,
    pub edge_policy: EdgePolicy,
}

impl Default for SlidingWindowConfig {
    fn default() -> Self {
        Self {
            window_size: 5000,
            train_ratio: 0.8,
            edge_policy: EdgePolicy::Shorten,
        }
    }
}

impl SlidingWindowConfig {
    pub fn new(window_size: usize, train_ratio: f64) -> Self {
        Self {
            window_size,
            train_ratio,
            ..Default::default()
        }
    }

    pub fn with_edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }

    /// Training observations in a full window, rounded half to even.
    pub fn train_len(&self) -> usize {
        (self.window_size as f64 * self.train_ratio).round_ties_even() as usize
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(BenchmarkError::invalid("window_size", "must be positive"));
        }
        if !(self.train_ratio > 0.0 && self.train_ratio < 1.0) {
            return Err(BenchmarkError::invalid(
                "train_ratio",
                format!("must lie in (0, 1), got {}", self.train_ratio),
            ));
        }
        if self.train_len() == 0 {
            return Err(BenchmarkError::invalid(
                "train_ratio",
                format!(
                    "{} of a {}-point window leaves no training data",
                    self.train_ratio, self.window_size
                ),
            ));
        }
        Ok(())
    }
}

/// Worker pool behaviour
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DispatchConfig {
    /// Worker threads; `None` uses the available parallelism
    pub parallelism: Option<usize>,
    /// Tasks finishing after this many milliseconds are recorded as timed out.
    /// Checked once a task returns; a task that never returns is not bounded.
    pub task_timeout_ms: Option<u64>,
    /// Run a panicked task once more before recording the failure
    pub retry_panicked: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            parallelism: None,
            task_timeout_ms: None,
            retry_panicked: true,
        }
    }
}

impl DispatchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.parallelism == Some(0) {
            return Err(BenchmarkError::invalid("parallelism", "must be at least 1"));
        }
        if self.task_timeout_ms == Some(0) {
            return Err(BenchmarkError::invalid("task_timeout_ms", "must be positive"));
        }
        Ok(())
    }
}

/// Configuration of a sliding-window benchmark run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BenchmarkConfig {
    pub window: SlidingWindowConfig,
    /// Model templates, in pool order
    pub models: Vec<ModelKind>,
    pub partitioners: Vec<PartitionerKind>,
    /// Partition counts to try
    pub partitions: Vec<usize>,
    /// Highest order tried for high order models
    pub max_order: usize,
    /// Transformation fitted into every partition and model
    pub transformation: Option<TransformationKind>,
    pub dispatch: DispatchConfig,
    /// Log per-window progress at info level
    pub dump: bool,
    /// Ask sinks for mean/std summaries instead of per-window histories
    pub synthetic: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            window: SlidingWindowConfig::default(),
            models: ModelKind::ALL.to_vec(),
            partitioners: vec![PartitionerKind::Grid],
            partitions: vec![10],
            max_order: 3,
            transformation: None,
            dispatch: DispatchConfig::default(),
            dump: false,
            synthetic: false,
        }
    }
}

impl BenchmarkConfig {
    pub fn new(window: SlidingWindowConfig) -> Self {
        Self {
            window,
            ..Default::default()
        }
    }

    pub fn with_models(mut self, models: Vec<ModelKind>) -> Self {
        self.models = models;
        self
    }

    pub fn with_partitioners(mut self, partitioners: Vec<PartitionerKind>) -> Self {
        self.partitioners = partitioners;
        self
    }

    pub fn with_partitions(mut self, partitions: Vec<usize>) -> Self {
        self.partitions = partitions;
        self
    }

    pub fn with_max_order(mut self, max_order: usize) -> Self {
        self.max_order = max_order;
        self
    }

    pub fn with_transformation(mut self, transformation: TransformationKind) -> Self {
        self.transformation = Some(transformation);
        self
    }

    pub fn with_parallelism(mut self, parallelism: usize) -> Self {
        self.dispatch.parallelism = Some(parallelism);
        self
    }

    pub fn with_task_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.dispatch.task_timeout_ms = Some(timeout_ms);
        self
    }

    pub fn with_retry_panicked(mut self, retry: bool) -> Self {
        self.dispatch.retry_panicked = retry;
        self
    }

    pub fn with_dump(mut self, dump: bool) -> Self {
        self.dump = dump;
        self
    }

    pub fn with_synthetic(mut self, synthetic: bool) -> Self {
        self.synthetic = synthetic;
        self
    }

    /// Reject a configuration that cannot run.
    pub fn validate(&self) -> Result<()> {
        self.window.validate()?;
        self.dispatch.validate()?;
        if self.models.is_empty() {
            return Err(BenchmarkError::InvalidConfig(
                "at least one model is required".to_string(),
            ));
        }
        if self.partitioners.is_empty() {
            return Err(BenchmarkError::InvalidConfig(
                "at least one partitioner is required".to_string(),
            ));
        }
        if self.partitions.is_empty() {
            return Err(BenchmarkError::InvalidConfig(
                "at least one partition count is required".to_string(),
            ));
        }
        if let Some(kind) = first_duplicate(&self.partitioners) {
            return Err(BenchmarkError::InvalidConfig(format!(
                "partitioner {:?} is listed more than once",
                kind
            )));
        }
        if let Some(q) = first_duplicate(&self.partitions) {
            return Err(BenchmarkError::InvalidConfig(format!(
                "partition count {} is listed more than once",
                q
            )));
        }
        if self.max_order == 0 {
            return Err(BenchmarkError::invalid("max_order", "must be at least 1"));
        }
        if let Some(TransformationKind::Differential { lag: 0 }) = self.transformation {
            return Err(BenchmarkError::invalid("transformation", "lag must be at least 1"));
        }
        Ok(())
    }
}

fn first_duplicate<T: PartialEq>(items: &[T]) -> Option<&T> {
    items
        .iter()
        .enumerate()
        .find(|&(i, item)| items[..i].contains(item))
        .map(|(_, item)| item)
}

/// Multi-step distribution forecast settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AheadConfig {
    /// Steps forecast past the training slice, capped by the test length
    pub steps: usize,
    /// Grid spacing; `None` splits the partition universe into 100 steps
    pub resolution: Option<f64>,
}

impl Default for AheadConfig {
    fn default() -> Self {
        Self {
            steps: 10,
            resolution: None,
        }
    }
}

impl AheadConfig {
    pub fn new(steps: usize) -> Self {
        Self {
            steps,
            resolution: None,
        }
    }

    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = Some(resolution);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.steps == 0 {
            return Err(BenchmarkError::invalid("steps", "must be at least 1"));
        }
        if let Some(r) = self.resolution {
            if !(r.is_finite() && r > 0.0) {
                return Err(BenchmarkError::invalid(
                    "resolution",
                    format!("must be a positive finite number, got {}", r),
                ));
            }
        }
        Ok(())
    }
}

/// Report file format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl OutputFormat {
    /// Format implied by a file extension, JSON when unknown.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => OutputFormat::Csv,
            _ => OutputFormat::Json,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = BenchmarkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(BenchmarkError::invalid(
                "format",
                format!("expected 'json' or 'csv', got '{}'", other),
            )),
        }
    }
}
