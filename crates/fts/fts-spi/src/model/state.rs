//! Mutable fitted state shared by all fuzzy time series models.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::{Flrg, FuzzySet, Partition};
use crate::contract::Transformation;

/// Fitted state of a model instance.
///
/// Cloning produces an independent copy; transformations are immutable and
/// shared through `Arc`.
#[derive(Debug, Clone)]
pub struct ModelState {
    /// Number of lags used as antecedent
    pub order: usize,
    /// Partition the model was assigned before training
    pub partition: Option<Partition>,
    /// Fuzzy sets the rule base refers to (by index)
    pub sets: Vec<FuzzySet>,
    /// Transformations applied before fuzzification, in application order
    pub transformations: Vec<Arc<dyn Transformation>>,
    /// Rule base keyed by antecedent set indices
    pub flrgs: BTreeMap<Vec<usize>, Flrg>,
    /// Set once training succeeded
    pub trained: bool,
}

impl ModelState {
    pub fn new(order: usize) -> Self {
        Self {
            order,
            partition: None,
            sets: Vec::new(),
            transformations: Vec::new(),
            flrgs: BTreeMap::new(),
            trained: false,
        }
    }

    /// Drop everything learned by a previous training run.
    pub fn reset(&mut self) {
        self.sets.clear();
        self.flrgs.clear();
        self.trained = false;
    }
}

impl Default for ModelState {
    fn default() -> Self {
        Self::new(1)
    }
}
