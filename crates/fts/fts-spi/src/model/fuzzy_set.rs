//! Fuzzy set with a name, membership function and centroid.

use serde::{Deserialize, Serialize};

use super::MembershipFunction;

/// A linguistic term over the universe of discourse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzySet {
    /// Name of the fuzzy set (e.g. "A3")
    pub name: String,
    /// Membership function
    pub function: MembershipFunction,
    /// Representative crisp value used for defuzzification
    pub centroid: f64,
}

impl FuzzySet {
    /// Create a fuzzy set whose centroid is the peak of its membership function.
    pub fn new(name: impl Into<String>, function: MembershipFunction) -> Self {
        Self {
            name: name.into(),
            centroid: function.peak(),
            function,
        }
    }

    /// Create a fuzzy set with an explicit centroid.
    pub fn with_centroid(name: impl Into<String>, function: MembershipFunction, centroid: f64) -> Self {
        Self {
            name: name.into(),
            function,
            centroid,
        }
    }

    /// Triangular fuzzy set centred at `centroid` with half-width `spread`.
    pub fn triangular(name: impl Into<String>, centroid: f64, spread: f64) -> Self {
        Self::new(
            name,
            MembershipFunction::Triangular {
                a: centroid - spread,
                b: centroid,
                c: centroid + spread,
            },
        )
    }

    /// Membership degree of `x`.
    pub fn membership(&self, x: f64) -> f64 {
        self.function.membership(x)
    }

    /// Lower bound of the support.
    pub fn lower(&self) -> f64 {
        self.function.lower()
    }

    /// Upper bound of the support.
    pub fn upper(&self) -> f64 {
        self.function.upper()
    }
}

impl std::fmt::Display for FuzzySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:?}", self.name, self.function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangular_constructor() {
        let set = FuzzySet::triangular("A0", 10.0, 2.0);
        assert_eq!(set.centroid, 10.0);
        assert_eq!(set.lower(), 8.0);
        assert_eq!(set.upper(), 12.0);
        assert!((set.membership(11.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_explicit_centroid() {
        let set = FuzzySet::with_centroid(
            "B",
            MembershipFunction::Gaussian {
                mean: 0.0,
                sigma: 1.0,
            },
            0.25,
        );
        assert_eq!(set.centroid, 0.25);
        assert_eq!(set.name, "B");
    }
}
