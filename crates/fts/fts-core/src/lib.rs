//! Fuzzy Time Series Core
//!
//! Implementations behind the FTS contracts:
//! - Grid and Huarng partitioners
//! - Differential transformation
//! - Chen, Yu, Ismail-Efendi, high order, interval and probabilistic weighted models
//! - Registry building each of them from its `fts-api` selector

pub mod fuzzify;
mod models;
mod partitioners;
mod registry;
mod transformations;

pub use fuzzify::{fuzzify_instance, fuzzify_series, memberships};
pub use models::{
    ChenFts, HighOrderFts, ImprovedWeightedFts, IntervalFts, ProbabilisticWeightedFts, WeightedFts,
};
pub use partitioners::{GridPartitioner, HuarngPartitioner};
pub use registry::{create_model, create_partitioner, create_transformation};
pub use transformations::Differential;

// Re-export from API for convenience
pub use fts_api::{MembershipKind, ModelKind, PartitionerKind, TransformationKind};

// Re-export SPI types
pub use fts_spi::{
    DistributionMethod, Flrg, FtsError, FtsModel, FuzzySet, Interval, MembershipFunction,
    ModelState, Partition, Partitioner, ProbabilityDistribution, Result, Transformation,
};
