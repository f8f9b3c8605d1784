//! Evaluation family trait.

use std::fmt::Debug;
use std::time::Duration;

use fts_spi::{FtsModel, Result};

use crate::model::MetricBundle;

/// Turns a trained model and one test slice into a metric bundle.
///
/// The three families (point, interval, ahead) differ only here; windowing,
/// dispatch and aggregation are shared.
pub trait MetricFamily: Send + Sync + Debug {
    type Metrics: MetricBundle;

    /// Family name used in logs and reports
    fn name(&self) -> &str;

    /// Whether `model` has the forecasting capability this family measures.
    fn supports(&self, model: &dyn FtsModel) -> bool;

    /// Evaluate `model`, already trained on `train`, against `test`.
    ///
    /// `train_elapsed` is the measured training time, to be folded into the
    /// timing metrics.
    fn evaluate(
        &self,
        model: &dyn FtsModel,
        train: &[f64],
        test: &[f64],
        train_elapsed: Duration,
    ) -> Result<Self::Metrics>;
}
