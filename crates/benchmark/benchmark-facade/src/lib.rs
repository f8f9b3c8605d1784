//! Sliding-Window Benchmark Facade
//!
//! High-level API for benchmarking fuzzy time series models over rolling
//! train/test windows. Re-exports all public types from the benchmark stack.
//!
//! # Example
//!
//! ```ignore
//! use benchmark_facade::prelude::*;
//!
//! let config = BenchmarkConfig::new(SlidingWindowConfig::new(200, 0.8))
//!     .with_models(vec![ModelKind::Chen, ModelKind::HighOrder])
//!     .with_partitions(vec![10, 20])
//!     .with_max_order(2);
//! let bench = SlidingWindowBenchmark::new(config)?;
//! let report = bench.point_sliding_window(&data)?;
//! JsonSink::new("point.json").save(&report.to_table())?;
//! ```

// Re-export everything from core (which includes API and SPI)
pub use benchmark_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Traits
    pub use benchmark_spi::{MetricBundle, MetricFamily, ResultSink};
    pub use fts_spi::FtsModel;

    // Configuration
    pub use benchmark_api::{
        AheadConfig, BenchmarkConfig, DispatchConfig, EdgePolicy, OutputFormat,
        SlidingWindowConfig,
    };
    pub use fts_api::{ModelKind, PartitionerKind, TransformationKind};

    // Results and errors
    pub use benchmark_spi::{
        BenchmarkError, BenchmarkReport, DistributionMetrics, IntervalMetrics, KeyHistory,
        PointMetrics, ReportTable, Result, TaskFailure, TaskOutcome,
    };

    // Engine
    pub use benchmark_core::{
        create_sink, sliding_window, AheadFamily, CsvSink, IntervalFamily, JsonSink, MemorySink,
        PointFamily, SlidingWindowBenchmark,
    };
}
