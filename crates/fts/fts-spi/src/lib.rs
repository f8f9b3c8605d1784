//! Fuzzy Time Series Service Provider Interface
//!
//! Defines the contracts every fuzzy time series component implements:
//!
//! - [`FtsModel`]: trainable fuzzy time series forecaster
//! - [`Partitioner`]: splits a universe of discourse into fuzzy sets
//! - [`Transformation`]: reversible value transformation applied before fuzzification
//! - [`FtsError`]: standardized error type for all FTS operations
//! - [`Result`]: convenient result type alias
//!
//! The data models ([`FuzzySet`], [`Partition`], [`Flrg`], [`ModelState`], ...)
//! live here as well so that partitioners and models from different crates
//! can exchange them.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{FtsModel, Partitioner, Transformation};
pub use error::{FtsError, Result};
pub use model::{
    DistributionMethod, Flrg, FuzzySet, Interval, MembershipFunction, ModelState, Partition,
    ProbabilityDistribution,
};
