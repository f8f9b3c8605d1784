//! Fitted fuzzy-set partition of a universe of discourse.

use serde::{Deserialize, Serialize};

use super::FuzzySet;

/// Fuzzy sets produced by a partitioner for one training slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    /// Short module name of the partitioner that produced it (e.g. "Grid")
    pub module: String,
    /// Requested number of partitions
    pub partitions: usize,
    /// The fuzzy sets, ordered by centroid
    pub sets: Vec<FuzzySet>,
    /// Name of the transformation the sets were fitted on, if any
    pub transformation: Option<String>,
}

impl Partition {
    pub fn new(module: impl Into<String>, partitions: usize, sets: Vec<FuzzySet>) -> Self {
        Self {
            module: module.into(),
            partitions,
            sets,
            transformation: None,
        }
    }

    /// Record the transformation the sets were fitted on.
    pub fn with_transformation(mut self, name: impl Into<String>) -> Self {
        self.transformation = Some(name.into());
        self
    }

    /// Number of fuzzy sets actually produced.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Range covered by the supports of all sets, `None` when empty.
    pub fn universe(&self) -> Option<(f64, f64)> {
        if self.sets.is_empty() {
            return None;
        }
        let lower = self
            .sets
            .iter()
            .map(FuzzySet::lower)
            .fold(f64::INFINITY, f64::min);
        let upper = self
            .sets
            .iter()
            .map(FuzzySet::upper)
            .fold(f64::NEG_INFINITY, f64::max);
        Some((lower, upper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universe() {
        let partition = Partition::new(
            "Grid",
            2,
            vec![
                FuzzySet::triangular("A0", 0.0, 1.0),
                FuzzySet::triangular("A1", 1.0, 1.0),
            ],
        );
        assert_eq!(partition.universe(), Some((-1.0, 2.0)));
        assert_eq!(partition.len(), 2);
    }

    #[test]
    fn test_empty_partition_has_no_universe() {
        let partition = Partition::new("Grid", 0, Vec::new());
        assert!(partition.is_empty());
        assert_eq!(partition.universe(), None);
    }

    #[test]
    fn test_with_transformation() {
        let partition = Partition::new("Grid", 0, Vec::new()).with_transformation("Differential(1)");
        assert_eq!(partition.transformation.as_deref(), Some("Differential(1)"));
    }
}
