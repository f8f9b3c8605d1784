//! Sliding-Window Benchmark Core
//!
//! The benchmarking engine behind the `benchmark-spi` contracts:
//! - Deterministic train/test windowing
//! - Combinatorial model pool (model x order)
//! - Per-window partitioner invocation
//! - Point, interval and distribution evaluation families
//! - Parallel dispatch with panic containment
//! - Key-based aggregation and report sinks
//!
//! [`SlidingWindowBenchmark`] ties them together.

pub mod aggregator;
pub mod dispatcher;
pub mod evaluator;
pub mod family;
pub mod measures;
pub mod partitioning;
pub mod pool;
pub mod runner;
pub mod sinks;
pub mod windowing;

pub use aggregator::ResultAggregator;
pub use dispatcher::{default_parallelism, fail_batch, Dispatcher};
pub use evaluator::{descriptor_for, evaluate_task};
pub use family::{AheadFamily, IntervalFamily, PointFamily};
pub use partitioning::fit_partition;
pub use pool::ModelPool;
pub use runner::SlidingWindowBenchmark;
pub use sinks::{create_sink, CsvSink, JsonSink, MemorySink};
pub use windowing::{sliding_window, SlidingWindows};

// Re-export from API for convenience
pub use benchmark_api::{
    AheadConfig, BenchmarkConfig, DispatchConfig, EdgePolicy, OutputFormat, SlidingWindowConfig,
};

// Re-export SPI types
pub use benchmark_spi::{
    BenchmarkError, BenchmarkReport, DistributionMetrics, FieldSummary, IntervalMetrics,
    KeyHistory, MetricBundle, MetricFamily, ModelDescriptor, PointMetrics, ReportTable,
    ResultRecord, ResultSink, Result, TableRow, TaskFailure, TaskOutcome, Window,
};
