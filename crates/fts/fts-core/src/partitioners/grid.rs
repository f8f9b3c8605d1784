//! Equal-width grid partitioner.

use fts_api::MembershipKind;
use fts_spi::{FuzzySet, MembershipFunction, Partition, Partitioner, Result, Transformation};

use super::{prepare, universe};

/// Splits the universe of discourse into `q` equal-width fuzzy sets.
///
/// Set `i` is centred at `lower + i * len` where `len = (upper - lower) / q`
/// and overlaps its neighbours by one `len` on each side.
#[derive(Debug, Clone, Default)]
pub struct GridPartitioner {
    membership: MembershipKind,
}

impl GridPartitioner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different membership function shape.
    pub fn with_membership(mut self, membership: MembershipKind) -> Self {
        self.membership = membership;
        self
    }

    fn make_set(&self, index: usize, centre: f64, len: f64) -> FuzzySet {
        let function = match self.membership {
            MembershipKind::Triangular => MembershipFunction::Triangular {
                a: centre - len,
                b: centre,
                c: centre + len,
            },
            MembershipKind::Trapezoidal => {
                let q = len / 2.0;
                MembershipFunction::Trapezoidal {
                    a: centre - len,
                    b: centre - q,
                    c: centre + q,
                    d: centre + len,
                }
            }
            MembershipKind::Gaussian => MembershipFunction::Gaussian {
                mean: centre,
                sigma: len / 3.0,
            },
        };
        FuzzySet::with_centroid(format!("A{}", index), function, centre)
    }
}

impl Partitioner for GridPartitioner {
    fn name(&self) -> &str {
        "Grid"
    }

    fn partition(
        &self,
        data: &[f64],
        partitions: usize,
        transformation: Option<&dyn Transformation>,
    ) -> Result<Partition> {
        let ndata = prepare(data, transformation)?;
        let (lower, upper) = universe(&ndata);

        let sets = if partitions == 0 {
            Vec::new()
        } else {
            let len = (upper - lower) / partitions as f64;
            (0..partitions)
                .map(|i| self.make_set(i, lower + i as f64 * len, len))
                .collect()
        };

        let partition = Partition::new(self.name(), partitions, sets);
        Ok(match transformation {
            Some(t) => partition.with_transformation(t.name()),
            None => partition,
        })
    }
}
