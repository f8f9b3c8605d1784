//! Per-window partitioner invocation.

use fts_spi::{Partition, Partitioner, Result, Transformation};
use tracing::debug;

/// Fit `partitioner` on a training slice.
///
/// Runs on the driver thread; the resulting partition is copied into every
/// task of the batch.
pub fn fit_partition(
    partitioner: &dyn Partitioner,
    train: &[f64],
    partitions: usize,
    transformation: Option<&dyn Transformation>,
) -> Result<Partition> {
    let partition = partitioner.partition(train, partitions, transformation)?;
    debug!(
        "{} partitioner produced {} sets for q = {}",
        partition.module,
        partition.len(),
        partitions
    );
    Ok(partition)
}
