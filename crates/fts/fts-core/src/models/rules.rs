//! Rule base learning and forecasting shared by every model.

use fts_spi::{Flrg, FtsError, FuzzySet, Interval, ModelState, Result};

use crate::fuzzify::fuzzify_series;

/// The input series followed by the output of each transformation in turn.
pub(crate) fn transform_levels(state: &ModelState, data: &[f64]) -> Vec<Vec<f64>> {
    let mut levels = Vec::with_capacity(state.transformations.len() + 1);
    levels.push(data.to_vec());
    for t in &state.transformations {
        let next = t.apply(levels[levels.len() - 1].as_slice());
        levels.push(next);
    }
    levels
}

/// Leading positions padded by the transformations.
pub(crate) fn padding(state: &ModelState) -> usize {
    state.transformations.iter().map(|t| t.lag()).sum()
}

/// Learn the FLRGs of `order` lags from `data`.
pub(crate) fn learn(state: &mut ModelState, data: &[f64], sets: &[FuzzySet], order: usize) -> Result<()> {
    if sets.is_empty() {
        return Err(FtsError::EmptyPartition);
    }
    if order == 0 {
        return Err(FtsError::invalid("order", "must be at least 1"));
    }

    state.reset();
    let skip = padding(state);
    let required = skip + order + 1;
    if data.len() < required {
        return Err(FtsError::InsufficientData {
            required,
            actual: data.len(),
        });
    }

    let levels = transform_levels(state, data);
    let ndata = &levels[levels.len() - 1][skip..];
    let fuzzified = fuzzify_series(ndata, sets)?;

    for w in fuzzified.windows(order + 1) {
        let lhs = w[..order].to_vec();
        state
            .flrgs
            .entry(lhs.clone())
            .or_insert_with(|| Flrg::new(lhs))
            .append(w[order]);
    }

    state.sets = sets.to_vec();
    state.order = order;
    state.trained = true;
    Ok(())
}

/// Antecedent of every `order`-long window of the transformed input.
pub(crate) fn antecedents(state: &ModelState, ndata: &[f64]) -> Result<Vec<Vec<usize>>> {
    if !state.trained {
        return Err(FtsError::NotTrained);
    }
    let order = state.order;
    if ndata.len() < order {
        return Err(FtsError::InsufficientData {
            required: order,
            actual: ndata.len(),
        });
    }
    let fuzzified = fuzzify_series(ndata, &state.sets)?;
    Ok(fuzzified.windows(order).map(|w| w.to_vec()).collect())
}

/// Map forecasts made in transformed space back to the input scale.
///
/// `values[i]` forecasts position `order + i` of the input.
pub(crate) fn restore(state: &ModelState, levels: &[Vec<f64>], values: Vec<f64>) -> Result<Vec<f64>> {
    let mut values = values;
    for (t, original) in state.transformations.iter().zip(levels).rev() {
        values = t.inverse(&values, original, state.order)?;
    }
    Ok(values)
}

/// The most recent set of an antecedent, used when the rule base has no
/// group for it.
pub(crate) fn last_set<'a>(state: &'a ModelState, lhs: &[usize]) -> Result<&'a FuzzySet> {
    lhs.last()
        .and_then(|&i| state.sets.get(i))
        .ok_or(FtsError::EmptyPartition)
}

/// Point forecasts: `defuzzify` turns a known group into a crisp value,
/// unseen antecedents fall back to the centroid of their last set.
pub(crate) fn point_forecast<F>(state: &ModelState, data: &[f64], defuzzify: F) -> Result<Vec<f64>>
where
    F: Fn(&Flrg, &[FuzzySet]) -> f64,
{
    let levels = transform_levels(state, data);
    let keys = antecedents(state, &levels[levels.len() - 1])?;
    let mut values = Vec::with_capacity(keys.len());
    for key in &keys {
        let value = match state.flrgs.get(key) {
            Some(flrg) if !flrg.is_empty() => defuzzify(flrg, &state.sets),
            _ => last_set(state, key)?.centroid,
        };
        values.push(value);
    }
    restore(state, &levels, values)
}

/// Interval forecasts: `bounds` turns a known group into an interval,
/// unseen antecedents fall back to the support of their last set.
pub(crate) fn interval_forecast<F>(state: &ModelState, data: &[f64], bounds: F) -> Result<Vec<Interval>>
where
    F: Fn(&Flrg, &[FuzzySet]) -> Interval,
{
    let levels = transform_levels(state, data);
    let keys = antecedents(state, &levels[levels.len() - 1])?;
    let mut lower = Vec::with_capacity(keys.len());
    let mut upper = Vec::with_capacity(keys.len());
    for key in &keys {
        let interval = match state.flrgs.get(key) {
            Some(flrg) if !flrg.is_empty() => bounds(flrg, &state.sets),
            _ => {
                let set = last_set(state, key)?;
                Interval::new(set.lower(), set.upper())
            }
        };
        lower.push(interval.lower);
        upper.push(interval.upper);
    }
    let lower = restore(state, &levels, lower)?;
    let upper = restore(state, &levels, upper)?;
    Ok(lower
        .into_iter()
        .zip(upper)
        .map(|(lo, hi)| Interval::new(lo, hi))
        .collect())
}

/// Weighted mean of set centroids.
pub(crate) fn weighted_centroid(weights: &[(usize, f64)], sets: &[FuzzySet]) -> f64 {
    weights
        .iter()
        .map(|&(r, w)| sets.get(r).map_or(f64::NAN, |s| s.centroid) * w)
        .sum()
}

/// Plain mean of the centroids of the distinct consequents.
pub(crate) fn mean_centroid(flrg: &Flrg, sets: &[FuzzySet]) -> f64 {
    let distinct = flrg.distinct();
    let w = 1.0 / distinct.len() as f64;
    let weights: Vec<(usize, f64)> = distinct.into_iter().map(|r| (r, w)).collect();
    weighted_centroid(&weights, sets)
}
