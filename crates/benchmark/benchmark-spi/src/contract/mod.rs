//! Contract module containing the benchmark traits.
//!
//! - [`MetricFamily`] - point, interval or distribution evaluation of one task
//! - [`ResultSink`] - persistence of an aggregated report

mod metric_family;
mod result_sink;

pub use metric_family::MetricFamily;
pub use result_sink::ResultSink;
