//! Prediction interval.

use serde::{Deserialize, Serialize};

/// Closed interval forecast `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub lower: f64,
    pub upper: f64,
}

impl Interval {
    /// Create an interval, swapping the bounds if they are reversed.
    pub fn new(lower: f64, upper: f64) -> Self {
        if lower <= upper {
            Self { lower, upper }
        } else {
            Self {
                lower: upper,
                upper: lower,
            }
        }
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_basics() {
        let interval = Interval::new(2.0, 6.0);
        assert_eq!(interval.width(), 4.0);
        assert_eq!(interval.midpoint(), 4.0);
        assert!(interval.contains(2.0));
        assert!(interval.contains(6.0));
        assert!(!interval.contains(6.5));
    }

    #[test]
    fn test_reversed_bounds_are_swapped() {
        let interval = Interval::new(5.0, 1.0);
        assert_eq!(interval.lower, 1.0);
        assert_eq!(interval.upper, 5.0);
    }
}
