//! Contract module containing the fuzzy time series traits.
//!
//! - [`FtsModel`] - trainable forecaster with point/interval/distribution outputs
//! - [`Partitioner`] - builds a [`Partition`](crate::Partition) from a training slice
//! - [`Transformation`] - reversible transformation applied before fuzzification

mod fts_model;
mod partitioner;
mod transformation;

pub use fts_model::FtsModel;
pub use partitioner::Partitioner;
pub use transformation::Transformation;
