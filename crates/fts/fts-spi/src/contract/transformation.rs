//! Reversible value transformation.

use crate::error::Result;

/// Transformation applied to a series before fuzzification.
///
/// `apply` must return a series of the same length as its input; positions that
/// have no meaningful transformed value (the first [`lag`](Transformation::lag)
/// ones) are padded.
pub trait Transformation: Send + Sync + std::fmt::Debug {
    /// Name used in descriptors and reports, e.g. `Differential(1)`
    fn name(&self) -> String;

    /// Number of leading positions padded by `apply`
    fn lag(&self) -> usize;

    /// Transform a series.
    fn apply(&self, data: &[f64]) -> Vec<f64>;

    /// Map values forecast in transformed space back to the original scale.
    ///
    /// `values[i]` is the transformed forecast for position `offset + i` of
    /// `original`; that position may lie one past the end of `original`.
    fn inverse(&self, values: &[f64], original: &[f64], offset: usize) -> Result<Vec<f64>>;
}
