//! Value transformations.

use fts_spi::{FtsError, Result, Transformation};

/// Differencing at a fixed lag: `y[t] = x[t] - x[t - lag]`.
///
/// The first `lag` positions are padded with zero so the transformed series
/// keeps the length of its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Differential {
    lag: usize,
}

impl Differential {
    pub fn new(lag: usize) -> Result<Self> {
        if lag == 0 {
            return Err(FtsError::invalid("lag", "must be at least 1"));
        }
        Ok(Self { lag })
    }
}

impl Transformation for Differential {
    fn name(&self) -> String {
        format!("Differential({})", self.lag)
    }

    fn lag(&self) -> usize {
        self.lag
    }

    fn apply(&self, data: &[f64]) -> Vec<f64> {
        (0..data.len())
            .map(|t| {
                if t < self.lag {
                    0.0
                } else {
                    data[t] - data[t - self.lag]
                }
            })
            .collect()
    }

    fn inverse(&self, values: &[f64], original: &[f64], offset: usize) -> Result<Vec<f64>> {
        Ok(values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let position = offset + i;
                if position < self.lag {
                    return f64::NAN;
                }
                original
                    .get(position - self.lag)
                    .map(|base| base + v)
                    .unwrap_or(f64::NAN)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_pads_leading_positions() {
        let diff = Differential::new(1).unwrap();
        assert_eq!(diff.apply(&[10.0, 12.0, 11.0]), vec![0.0, 2.0, -1.0]);

        let diff2 = Differential::new(2).unwrap();
        assert_eq!(diff2.apply(&[1.0, 2.0, 4.0, 7.0]), vec![0.0, 0.0, 3.0, 5.0]);
    }

    #[test]
    fn test_inverse_restores_levels() {
        let data = [10.0, 12.0, 11.0, 13.0];
        let diff = Differential::new(1).unwrap();
        let transformed = diff.apply(&data);
        // Forecasts for positions 1..=3 are the true differences
        let restored = diff.inverse(&transformed[1..], &data, 1).unwrap();
        assert_eq!(restored, vec![12.0, 11.0, 13.0]);
    }

    #[test]
    fn test_inverse_past_the_end() {
        let data = [10.0, 12.0];
        let diff = Differential::new(1).unwrap();
        // position 2 is one past the end, pivot is data[1]
        assert_eq!(diff.inverse(&[0.5], &data, 2).unwrap(), vec![12.5]);
    }

    #[test]
    fn test_inverse_without_pivot_is_nan() {
        let diff = Differential::new(2).unwrap();
        let restored = diff.inverse(&[1.0], &[5.0], 1).unwrap();
        assert!(restored[0].is_nan());
    }

    #[test]
    fn test_zero_lag_rejected() {
        assert!(Differential::new(0).is_err());
    }
}
