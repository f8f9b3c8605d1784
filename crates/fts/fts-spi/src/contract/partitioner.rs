//! Partitioner trait.

use super::Transformation;
use crate::error::Result;
use crate::model::Partition;

/// Divides the universe of discourse of a training slice into fuzzy sets.
pub trait Partitioner: Send + Sync + std::fmt::Debug {
    /// Module name reported in model descriptors (e.g. "Grid")
    fn name(&self) -> &str;

    /// Fit `partitions` fuzzy sets over `data`.
    ///
    /// When a transformation is given the sets are fitted on the transformed
    /// series.
    fn partition(
        &self,
        data: &[f64],
        partitions: usize,
        transformation: Option<&dyn Transformation>,
    ) -> Result<Partition>;
}
