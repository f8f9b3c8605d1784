//! Fuzzy Time Series Facade
//!
//! High-level API for fuzzy time series forecasting. Re-exports all public
//! types from the fts stack for convenient usage.
//!
//! # Example
//!
//! ```ignore
//! use fts_facade::prelude::*;
//!
//! let data = vec![10.0, 12.0, 11.0, 13.0, 12.5, 14.0];
//! let partition = GridPartitioner::new().partition(&data, 5, None)?;
//! let mut model = create_model(ModelKind::HighOrder);
//! model.train(&data, &partition.sets, 2)?;
//! let forecasts = model.forecast(&data)?;
//! ```

// Re-export everything from core (which includes API and SPI)
pub use fts_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Traits
    pub use fts_spi::{FtsModel, Partitioner, Transformation};

    // Selectors
    pub use fts_api::{MembershipKind, ModelKind, PartitionerKind, TransformationKind};

    // Data model and errors
    pub use fts_spi::{
        DistributionMethod, FtsError, FuzzySet, Interval, Partition, ProbabilityDistribution,
        Result,
    };

    // Implementations
    pub use fts_core::{
        create_model, create_partitioner, create_transformation, Differential, GridPartitioner,
        HuarngPartitioner,
    };
}
