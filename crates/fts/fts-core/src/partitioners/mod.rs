//! Partitioner implementations.

mod grid;
mod huarng;

pub use grid::GridPartitioner;
pub use huarng::HuarngPartitioner;

use fts_spi::{FtsError, Result, Transformation};

/// Series the sets are fitted on: transformed when a transformation is given.
pub(crate) fn prepare(data: &[f64], transformation: Option<&dyn Transformation>) -> Result<Vec<f64>> {
    if data.is_empty() {
        return Err(FtsError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    let ndata = match transformation {
        Some(t) => t.apply(data),
        None => data.to_vec(),
    };
    if ndata.iter().any(|x| !x.is_finite()) {
        return Err(FtsError::NumericalError(
            "cannot partition a series with non-finite values".to_string(),
        ));
    }
    Ok(ndata)
}

/// Universe of discourse: the data range widened by 10% away from zero.
pub(crate) fn universe(data: &[f64]) -> (f64, f64) {
    let min = data.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let lower = if min < 0.0 { min * 1.1 } else { min * 0.9 };
    let upper = if max > 0.0 { max * 1.1 } else { max * 0.9 };
    (lower, upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universe_is_sign_aware() {
        assert_eq!(universe(&[10.0, 20.0]), (9.0, 22.0));
        let (lo, hi) = universe(&[-10.0, -5.0]);
        assert!((lo - -11.0).abs() < 1e-12);
        assert!((hi - -4.5).abs() < 1e-12);
    }

    #[test]
    fn test_prepare_rejects_empty_and_nan() {
        assert!(prepare(&[], None).is_err());
        assert!(prepare(&[1.0, f64::NAN], None).is_err());
        assert_eq!(prepare(&[1.0, 2.0], None).unwrap(), vec![1.0, 2.0]);
    }
}
