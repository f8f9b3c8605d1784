//! Membership functions for fuzzy sets.

use serde::{Deserialize, Serialize};

/// Membership function of a fuzzy set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MembershipFunction {
    /// Triangular: μ(x) = max(min((x-a)/(b-a), (c-x)/(c-b)), 0)
    Triangular { a: f64, b: f64, c: f64 },
    /// Trapezoidal with plateau on [b, c]
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
    /// Gaussian: μ(x) = exp(-((x-mean)^2)/(2*sigma^2))
    Gaussian { mean: f64, sigma: f64 },
}

impl MembershipFunction {
    /// Membership degree of `x`, in [0, 1].
    pub fn membership(&self, x: f64) -> f64 {
        match *self {
            MembershipFunction::Triangular { a, b, c } => {
                if x == b {
                    1.0
                } else if x <= a || x >= c {
                    0.0
                } else if x < b {
                    (x - a) / (b - a)
                } else {
                    (c - x) / (c - b)
                }
            }
            MembershipFunction::Trapezoidal { a, b, c, d } => {
                if x >= b && x <= c {
                    1.0
                } else if x <= a || x >= d {
                    0.0
                } else if x < b {
                    (x - a) / (b - a)
                } else {
                    (d - x) / (d - c)
                }
            }
            MembershipFunction::Gaussian { mean, sigma } => {
                if sigma <= 0.0 {
                    return if x == mean { 1.0 } else { 0.0 };
                }
                (-((x - mean).powi(2)) / (2.0 * sigma.powi(2))).exp()
            }
        }
    }

    /// Lower bound of the support.
    ///
    /// Gaussian supports are truncated at three standard deviations.
    pub fn lower(&self) -> f64 {
        match *self {
            MembershipFunction::Triangular { a, .. } => a,
            MembershipFunction::Trapezoidal { a, .. } => a,
            MembershipFunction::Gaussian { mean, sigma } => mean - 3.0 * sigma,
        }
    }

    /// Upper bound of the support.
    pub fn upper(&self) -> f64 {
        match *self {
            MembershipFunction::Triangular { c, .. } => c,
            MembershipFunction::Trapezoidal { d, .. } => d,
            MembershipFunction::Gaussian { mean, sigma } => mean + 3.0 * sigma,
        }
    }

    /// Point of maximal membership (midpoint of the plateau for trapezoids).
    pub fn peak(&self) -> f64 {
        match *self {
            MembershipFunction::Triangular { b, .. } => b,
            MembershipFunction::Trapezoidal { b, c, .. } => (b + c) / 2.0,
            MembershipFunction::Gaussian { mean, .. } => mean,
        }
    }
}
