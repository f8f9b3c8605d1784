//! Sliding-Window Benchmark Service Provider Interface
//!
//! Defines the contracts and result models of the benchmarking engine:
//!
//! - [`MetricFamily`]: evaluates a trained model on one test slice
//! - [`ResultSink`]: persists an aggregated report
//! - [`BenchmarkError`]: standardized error type for benchmark runs
//! - [`Result`]: convenient result type alias
//!
//! Task results travel as [`ResultRecord`]s carrying a [`TaskOutcome`], so a
//! failed task still yields a well-formed (NaN) metric bundle.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{MetricFamily, ResultSink};
pub use error::{BenchmarkError, Result};
pub use model::{
    BenchmarkReport, DistributionMetrics, FieldSummary, IntervalMetrics, KeyHistory, MetricBundle,
    ModelDescriptor, PointMetrics, ReportTable, ResultRecord, TableRow, TaskFailure, TaskOutcome,
    Window,
};
