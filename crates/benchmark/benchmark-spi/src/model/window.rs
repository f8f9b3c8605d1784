//! Train/test window over a series.

/// One sliding window, borrowing its slices from the series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window<'a> {
    /// Ordinal of the window (0, 1, 2, ...)
    pub index: usize,
    /// Offset of the window in the series
    pub start: usize,
    pub train: &'a [f64],
    pub test: &'a [f64],
}

impl<'a> Window<'a> {
    /// Total number of observations covered.
    pub fn len(&self) -> usize {
        self.train.len() + self.test.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
