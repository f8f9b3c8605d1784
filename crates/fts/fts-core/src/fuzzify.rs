//! Fuzzification of crisp values.

use fts_spi::{FtsError, FuzzySet, Result};

/// Membership of `x` in every set.
pub fn memberships(x: f64, sets: &[FuzzySet]) -> Vec<f64> {
    sets.iter().map(|s| s.membership(x)).collect()
}

/// Index of the set with maximal membership for `x`.
///
/// Ties go to the first set. Values outside every support fall back to the
/// set whose centroid is nearest.
pub fn fuzzify_instance(x: f64, sets: &[FuzzySet]) -> Result<usize> {
    if sets.is_empty() {
        return Err(FtsError::EmptyPartition);
    }
    if !x.is_finite() {
        return Err(FtsError::NumericalError(format!(
            "cannot fuzzify non-finite value {}",
            x
        )));
    }

    let mut best = 0;
    let mut best_mv = f64::NEG_INFINITY;
    for (i, set) in sets.iter().enumerate() {
        let mv = set.membership(x);
        if mv > best_mv {
            best = i;
            best_mv = mv;
        }
    }

    if best_mv > 0.0 {
        return Ok(best);
    }

    let nearest = sets
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (a.centroid - x)
                .abs()
                .partial_cmp(&(b.centroid - x).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)
        .unwrap_or(0);
    Ok(nearest)
}

/// Fuzzify every value of a series.
pub fn fuzzify_series(data: &[f64], sets: &[FuzzySet]) -> Result<Vec<usize>> {
    data.iter().map(|&x| fuzzify_instance(x, sets)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets() -> Vec<FuzzySet> {
        vec![
            FuzzySet::triangular("A0", 0.0, 1.0),
            FuzzySet::triangular("A1", 1.0, 1.0),
            FuzzySet::triangular("A2", 2.0, 1.0),
        ]
    }

    #[test]
    fn test_maximum_membership() {
        assert_eq!(fuzzify_instance(0.2, &sets()).unwrap(), 0);
        assert_eq!(fuzzify_instance(0.9, &sets()).unwrap(), 1);
        assert_eq!(fuzzify_instance(1.8, &sets()).unwrap(), 2);
    }

    #[test]
    fn test_tie_goes_to_first_set() {
        assert_eq!(fuzzify_instance(0.5, &sets()).unwrap(), 0);
    }

    #[test]
    fn test_outside_universe_uses_nearest_centroid() {
        assert_eq!(fuzzify_instance(10.0, &sets()).unwrap(), 2);
        assert_eq!(fuzzify_instance(-5.0, &sets()).unwrap(), 0);
    }

    #[test]
    fn test_errors() {
        assert_eq!(fuzzify_instance(1.0, &[]), Err(FtsError::EmptyPartition));
        assert!(fuzzify_instance(f64::NAN, &sets()).is_err());
    }

    #[test]
    fn test_series() {
        assert_eq!(fuzzify_series(&[0.1, 1.1, 2.0], &sets()).unwrap(), vec![0, 1, 2]);
        assert_eq!(memberships(1.0, &sets()), vec![0.0, 1.0, 0.0]);
    }
}
