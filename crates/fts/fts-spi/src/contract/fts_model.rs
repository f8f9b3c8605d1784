//! Fuzzy time series model trait.

use std::sync::Arc;

use super::Transformation;
use crate::error::{FtsError, Result};
use crate::model::{DistributionMethod, FuzzySet, Interval, ModelState, Partition, ProbabilityDistribution};

/// Common trait for all fuzzy time series models.
///
/// A model owns its fitted [`ModelState`]; the provided methods cover the
/// bookkeeping every model shares (order, partition, transformations), so an
/// implementation only supplies its identity, training and defuzzification.
///
/// Forecasting methods are one step ahead: for input `data`, element `i` of
/// the output forecasts the value following `data[i + order - 1]`, so the
/// output has `data.len() - order + 1` elements.
///
/// # Example
///
/// ```rust,ignore
/// use fts_spi::FtsModel;
///
/// fn fit_and_forecast(model: &mut dyn FtsModel, train: &[f64], sets: &[fts_spi::FuzzySet]) -> fts_spi::Result<Vec<f64>> {
///     let order = model.order();
///     model.train(train, sets, order)?;
///     model.forecast(train)
/// }
/// ```
pub trait FtsModel: Send + Sync + std::fmt::Debug {
    /// Descriptive model name
    fn name(&self) -> &str;

    /// Short name used in descriptor keys (e.g. "HOFTS")
    fn short_name(&self) -> &str;

    /// Whether the model accepts orders above one
    fn is_high_order(&self) -> bool;

    /// Smallest order the model supports
    fn min_order(&self) -> usize;

    /// Fitted state
    fn state(&self) -> &ModelState;

    /// Mutable fitted state
    fn state_mut(&mut self) -> &mut ModelState;

    /// Learn the rule base from `data` using `sets` and `order` lags.
    fn train(&mut self, data: &[f64], sets: &[FuzzySet], order: usize) -> Result<()>;

    /// One-step-ahead point forecasts.
    fn forecast(&self, data: &[f64]) -> Result<Vec<f64>>;

    /// Independent deep copy behind a fresh box.
    fn clone_box(&self) -> Box<dyn FtsModel>;

    /// One-step-ahead interval forecasts.
    fn forecast_interval(&self, _data: &[f64]) -> Result<Vec<Interval>> {
        Err(FtsError::UnsupportedForecast {
            model: self.short_name().to_string(),
            kind: "interval".to_string(),
        })
    }

    /// Multi-step probability distributions over `grid`, starting after the
    /// last observation of `data`.
    fn forecast_ahead_distribution(
        &self,
        _data: &[f64],
        _steps: usize,
        _grid: &[f64],
        _method: DistributionMethod,
    ) -> Result<Vec<ProbabilityDistribution>> {
        Err(FtsError::UnsupportedForecast {
            model: self.short_name().to_string(),
            kind: "distribution".to_string(),
        })
    }

    fn has_point_forecasting(&self) -> bool {
        true
    }

    fn has_interval_forecasting(&self) -> bool {
        false
    }

    fn has_probability_forecasting(&self) -> bool {
        false
    }

    fn order(&self) -> usize {
        self.state().order
    }

    fn set_order(&mut self, order: usize) {
        self.state_mut().order = order;
    }

    fn partition(&self) -> Option<&Partition> {
        self.state().partition.as_ref()
    }

    fn set_partition(&mut self, partition: Partition) {
        self.state_mut().partition = Some(partition);
    }

    fn append_transformation(&mut self, transformation: Arc<dyn Transformation>) {
        self.state_mut().transformations.push(transformation);
    }

    /// Observations needed before the first meaningful forecast: the order
    /// plus the padding introduced by every transformation.
    fn context_len(&self) -> usize {
        let state = self.state();
        state.order + state.transformations.iter().map(|t| t.lag()).sum::<usize>()
    }

    fn is_trained(&self) -> bool {
        self.state().trained
    }
}

impl Clone for Box<dyn FtsModel> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
