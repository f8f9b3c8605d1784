//! Aggregation key of a benchmark task.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a model configuration across windows.
///
/// Its `Display` form is the key results are aggregated under, e.g.
/// `"HOFTS n = 2 Grid q = 10"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Model short name
    pub model: String,
    pub order: usize,
    /// Partitioner module name
    pub partitioner: String,
    pub partitions: usize,
}

impl ModelDescriptor {
    pub fn new(
        model: impl Into<String>,
        order: usize,
        partitioner: impl Into<String>,
        partitions: usize,
    ) -> Self {
        Self {
            model: model.into(),
            order,
            partitioner: partitioner.into(),
            partitions,
        }
    }

    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ModelDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} n = {} {} q = {}",
            self.model, self.order, self.partitioner, self.partitions
        )
    }
}
