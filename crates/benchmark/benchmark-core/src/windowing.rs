//! Deterministic sliding windows over a series.

use benchmark_api::{EdgePolicy, SlidingWindowConfig};
use benchmark_spi::Window;

/// Non-overlapping train/test windows, advancing by the window size.
///
/// The iterator is `Clone`: cloning restarts nothing and shares nothing, so
/// iterating a fresh [`sliding_window`] twice yields identical windows.
#[derive(Debug, Clone)]
pub struct SlidingWindows<'a> {
    data: &'a [f64],
    window_size: usize,
    train_len: usize,
    edge_policy: EdgePolicy,
    start: usize,
    index: usize,
}

/// Windows over `data` with the given geometry.
///
/// With [`EdgePolicy::Shorten`] the trailing partial segment is yielded, its
/// train slice cut at the end of the data and its test slice possibly empty.
pub fn sliding_window<'a>(data: &'a [f64], config: &SlidingWindowConfig) -> SlidingWindows<'a> {
    SlidingWindows {
        data,
        window_size: config.window_size,
        train_len: config.train_len(),
        edge_policy: config.edge_policy,
        start: 0,
        index: 0,
    }
}

impl<'a> SlidingWindows<'a> {
    fn remaining(&self) -> usize {
        if self.window_size == 0 || self.start >= self.data.len() {
            return 0;
        }
        let rest = self.data.len() - self.start;
        match self.edge_policy {
            EdgePolicy::Shorten => rest.div_ceil(self.window_size),
            EdgePolicy::Drop => rest / self.window_size,
        }
    }
}

impl<'a> Iterator for SlidingWindows<'a> {
    type Item = Window<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }
        let n = self.data.len();
        let start = self.start;
        let split = (start + self.train_len).min(n);
        let end = (start + self.window_size).min(n);

        let window = Window {
            index: self.index,
            start,
            train: &self.data[start..split],
            test: &self.data[split..end],
        };
        self.start += self.window_size;
        self.index += 1;
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for SlidingWindows<'_> {}
