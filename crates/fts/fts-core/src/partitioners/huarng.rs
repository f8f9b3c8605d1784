//! Distribution-based interval length partitioner (Huarng, 2001).

use fts_spi::{FtsError, FuzzySet, Partition, Partitioner, Result, Transformation};

use super::{prepare, universe};

/// Upper bound on the number of sets a single fit may produce.
const MAX_SETS: usize = 10_000;

/// Chooses the set width from the size of typical first differences.
///
/// Half the mean absolute first difference selects a base of 0.1, 1, 10 or
/// 100; triangular sets are then laid every `base` over the universe. The
/// requested partition count is recorded but does not drive the set count.
#[derive(Debug, Clone, Default)]
pub struct HuarngPartitioner;

impl HuarngPartitioner {
    pub fn new() -> Self {
        Self
    }

    /// Interval length for a series.
    pub fn base(data: &[f64]) -> f64 {
        let diffs: Vec<f64> = data.windows(2).map(|w| (w[1] - w[0]).abs()).collect();
        let davg = if diffs.is_empty() {
            0.0
        } else {
            diffs.iter().sum::<f64>() / diffs.len() as f64 / 2.0
        };
        if davg <= 1.0 {
            0.1
        } else if davg <= 10.0 {
            1.0
        } else if davg <= 100.0 {
            10.0
        } else {
            100.0
        }
    }
}

impl Partitioner for HuarngPartitioner {
    fn name(&self) -> &str {
        "Huarng"
    }

    fn partition(
        &self,
        data: &[f64],
        partitions: usize,
        transformation: Option<&dyn Transformation>,
    ) -> Result<Partition> {
        let ndata = prepare(data, transformation)?;
        let base = Self::base(&ndata);
        let (lower, upper) = universe(&ndata);

        let start = (lower / base).floor() * base;
        let count = (((upper - start) / base).ceil() as usize).max(1);
        if count > MAX_SETS {
            return Err(FtsError::invalid(
                "base",
                format!("interval length {} yields {} sets, limit is {}", base, count, MAX_SETS),
            ));
        }

        let sets = (0..count)
            .map(|i| FuzzySet::triangular(format!("A{}", i), start + i as f64 * base, base))
            .collect();

        let partition = Partition::new(self.name(), partitions, sets);
        Ok(match transformation {
            Some(t) => partition.with_transformation(t.name()),
            None => partition,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_selection() {
        assert_eq!(HuarngPartitioner::base(&[1.0, 1.5, 1.2]), 0.1);
        assert_eq!(HuarngPartitioner::base(&[0.0, 10.0, 0.0]), 1.0);
        assert_eq!(HuarngPartitioner::base(&[0.0, 100.0, 0.0]), 10.0);
        assert_eq!(HuarngPartitioner::base(&[0.0, 1000.0]), 100.0);
        assert_eq!(HuarngPartitioner::base(&[5.0]), 0.1);
    }

    #[test]
    fn test_sets_cover_universe() {
        let data = [100.0, 110.0, 105.0, 120.0, 115.0];
        let partition = HuarngPartitioner::new().partition(&data, 7, None).unwrap();
        assert_eq!(partition.module, "Huarng");
        assert_eq!(partition.partitions, 7);

        let (lo, hi) = partition.universe().unwrap();
        assert!(lo <= 90.0);
        assert!(hi >= 132.0);
        let width = partition.sets[1].centroid - partition.sets[0].centroid;
        assert!((width - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_too_many_sets_rejected() {
        // steps of 0.1 give base 0.1 over a universe about 2200 wide
        let data: Vec<f64> = (0..20_000).map(|i| i as f64 * 0.1).collect();
        assert!(HuarngPartitioner::new().partition(&data, 10, None).is_err());
    }
}
