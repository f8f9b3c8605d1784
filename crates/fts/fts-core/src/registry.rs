//! Construction of models, partitioners and transformations from their selectors.

use std::sync::Arc;

use fts_api::{ModelKind, PartitionerKind, TransformationKind};
use fts_spi::{FtsModel, Partitioner, Result, Transformation};

use crate::models::{
    ChenFts, HighOrderFts, ImprovedWeightedFts, IntervalFts, ProbabilisticWeightedFts, WeightedFts,
};
use crate::partitioners::{GridPartitioner, HuarngPartitioner};
use crate::transformations::Differential;

/// Create an untrained first-order model.
pub fn create_model(kind: ModelKind) -> Box<dyn FtsModel> {
    match kind {
        ModelKind::Chen => Box::new(ChenFts::new()),
        ModelKind::Yu => Box::new(WeightedFts::new()),
        ModelKind::ImprovedWeighted => Box::new(ImprovedWeightedFts::new()),
        ModelKind::HighOrder => Box::new(HighOrderFts::new()),
        ModelKind::Interval => Box::new(IntervalFts::new()),
        ModelKind::ProbabilisticWeighted => Box::new(ProbabilisticWeightedFts::new()),
    }
}

/// Create a partitioner with its default membership shape.
pub fn create_partitioner(kind: PartitionerKind) -> Box<dyn Partitioner> {
    match kind {
        PartitionerKind::Grid => Box::new(GridPartitioner::new()),
        PartitionerKind::Huarng => Box::new(HuarngPartitioner::new()),
    }
}

/// Create a shareable transformation.
pub fn create_transformation(kind: TransformationKind) -> Result<Arc<dyn Transformation>> {
    match kind {
        TransformationKind::Differential { lag } => Ok(Arc::new(Differential::new(lag)?)),
    }
}
