//! Forecast accuracy measures.
//!
//! Every measure returns `f64::NAN` for empty or mismatched inputs rather than
//! failing, so a degenerate window still produces a well-formed bundle.

use fts_spi::{Interval, ProbabilityDistribution};

/// Root mean squared error.
pub fn rmse(targets: &[f64], forecasts: &[f64]) -> f64 {
    if targets.is_empty() || targets.len() != forecasts.len() {
        return f64::NAN;
    }
    let mse = targets
        .iter()
        .zip(forecasts)
        .map(|(t, f)| (f - t).powi(2))
        .sum::<f64>()
        / targets.len() as f64;
    mse.sqrt()
}

/// Symmetric mean absolute percentage error, `mean(|f - t| / (|f| + |t|)) * 100`.
///
/// A pair where both values are zero counts as a perfect forecast.
pub fn smape(targets: &[f64], forecasts: &[f64]) -> f64 {
    if targets.is_empty() || targets.len() != forecasts.len() {
        return f64::NAN;
    }
    let sum: f64 = targets
        .iter()
        .zip(forecasts)
        .map(|(t, f)| {
            let denom = f.abs() + t.abs();
            if denom == 0.0 {
                0.0
            } else {
                (f - t).abs() / denom
            }
        })
        .sum();
    sum / targets.len() as f64 * 100.0
}

/// Theil's U statistic against the one-step naive forecast.
///
/// Errors are relative to the previous observation; the first target's
/// previous observation is `last_train`. Values below one beat the naive
/// forecast.
pub fn theil_u(targets: &[f64], forecasts: &[f64], last_train: f64) -> f64 {
    if targets.is_empty() || targets.len() != forecasts.len() {
        return f64::NAN;
    }
    let mut num = 0.0;
    let mut den = 0.0;
    let mut prev = last_train;
    for (t, f) in targets.iter().zip(forecasts) {
        if prev != 0.0 {
            num += ((f - t) / prev).powi(2);
            den += ((t - prev) / prev).powi(2);
        }
        prev = *t;
    }
    if den == 0.0 {
        return f64::NAN;
    }
    (num / den).sqrt()
}

/// Mean interval width.
pub fn sharpness(intervals: &[Interval]) -> f64 {
    if intervals.is_empty() {
        return f64::NAN;
    }
    intervals.iter().map(Interval::width).sum::<f64>() / intervals.len() as f64
}

/// Mean absolute deviation of the widths from their mean.
pub fn resolution(intervals: &[Interval]) -> f64 {
    let s = sharpness(intervals);
    if s.is_nan() {
        return f64::NAN;
    }
    intervals
        .iter()
        .map(|i| (i.width() - s).abs())
        .sum::<f64>()
        / intervals.len() as f64
}

/// Fraction of targets falling inside their interval.
pub fn coverage(targets: &[f64], intervals: &[Interval]) -> f64 {
    if targets.is_empty() || targets.len() != intervals.len() {
        return f64::NAN;
    }
    let hits = targets
        .iter()
        .zip(intervals)
        .filter(|(t, i)| i.contains(**t))
        .count();
    hits as f64 / targets.len() as f64
}

/// Step CDF of a point mass at `target`, evaluated at each grid point.
pub fn heaviside_cdf(grid: &[f64], target: f64) -> Vec<f64> {
    grid.iter()
        .map(|&x| if x >= target { 1.0 } else { 0.0 })
        .collect()
}

/// Continuous ranked probability score, discretised on each distribution's
/// grid and averaged over grid points and steps.
pub fn crps(distributions: &[ProbabilityDistribution], targets: &[f64]) -> f64 {
    if distributions.is_empty() || distributions.len() != targets.len() {
        return f64::NAN;
    }
    let mut total = 0.0;
    let mut points = 0usize;
    for (dist, &target) in distributions.iter().zip(targets) {
        let forecast = dist.cdf();
        let observed = heaviside_cdf(dist.bins(), target);
        total += forecast
            .iter()
            .zip(&observed)
            .map(|(f, o)| (f - o).powi(2))
            .sum::<f64>();
        points += forecast.len();
    }
    if points == 0 {
        return f64::NAN;
    }
    total / points as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rmse() {
        assert_eq!(rmse(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]), 0.0);
        assert!((rmse(&[0.0, 0.0], &[3.0, 4.0]) - 12.5_f64.sqrt()).abs() < 1e-12);
        assert!(rmse(&[], &[]).is_nan());
        assert!(rmse(&[1.0], &[1.0, 2.0]).is_nan());
    }

    #[test]
    fn test_smape() {
        assert_eq!(smape(&[10.0], &[10.0]), 0.0);
        // |12 - 8| / 20
        assert!((smape(&[8.0], &[12.0]) - 20.0).abs() < 1e-12);
        assert_eq!(smape(&[0.0], &[0.0]), 0.0);
    }

    #[test]
    fn test_theil_u_of_naive_forecast_is_one() {
        let targets = [11.0, 12.0, 10.0];
        let naive = [10.0, 11.0, 12.0];
        assert!((theil_u(&targets, &naive, 10.0) - 1.0).abs() < 1e-12);
        assert_eq!(theil_u(&targets, &targets, 10.0), 0.0);
    }

    #[test]
    fn test_theil_u_flat_series_is_nan() {
        assert!(theil_u(&[5.0, 5.0], &[5.0, 5.0], 5.0).is_nan());
    }

    #[test]
    fn test_interval_measures() {
        let intervals = [Interval::new(0.0, 2.0), Interval::new(1.0, 5.0)];
        assert_eq!(sharpness(&intervals), 3.0);
        assert_eq!(resolution(&intervals), 1.0);
        assert_eq!(coverage(&[1.0, 6.0], &intervals), 0.5);
        assert!(sharpness(&[]).is_nan());
    }

    #[test]
    fn test_crps() {
        let grid = vec![0.0, 1.0, 2.0, 3.0];
        let exact = ProbabilityDistribution::from_weights(grid.clone(), vec![0.0, 0.0, 1.0, 0.0]).unwrap();
        assert_eq!(crps(&[exact], &[2.0]), 0.0);

        let uniform = ProbabilityDistribution::from_weights(grid.clone(), vec![1.0; 4]).unwrap();
        // cdf 0.25, 0.5, 0.75, 1 against 0, 0, 1, 1
        let expected = (0.0625 + 0.25 + 0.0625 + 0.0) / 4.0;
        assert!((crps(&[uniform], &[2.0]) - expected).abs() < 1e-12);
        assert!(crps(&[], &[]).is_nan());
    }

    #[test]
    fn test_heaviside() {
        assert_eq!(heaviside_cdf(&[0.0, 1.0, 2.0], 1.0), vec![0.0, 1.0, 1.0]);
    }
}
