//! Model module containing the benchmark data structures.
//!
//! - [`Window`] - one train/test split of the series
//! - [`MetricBundle`] and its three families of metrics
//! - [`ModelDescriptor`] - the aggregation key of a task
//! - [`TaskOutcome`] / [`ResultRecord`] - what a task returns
//! - [`KeyHistory`] / [`BenchmarkReport`] / [`ReportTable`] - aggregated results

mod descriptor;
mod metrics;
mod outcome;
mod report;
mod window;

pub use descriptor::ModelDescriptor;
pub use metrics::{DistributionMetrics, IntervalMetrics, MetricBundle, PointMetrics};
pub use outcome::{ResultRecord, TaskFailure, TaskOutcome};
pub use report::{BenchmarkReport, FieldSummary, KeyHistory, ReportTable, TableRow};
pub use window::Window;
