//! Decision stumps.
//!
//! A stump splits one feature at one threshold and predicts the mean target of
//! each side. The tree learner scores every candidate split by the cost of the
//! stump it induces.

use super::metrics::mean_squared_error;
use super::TrainError;
use crate::data::{Feature, Sample};
use crate::inference::Predictor;
use crate::repr::goes_low;

/// Depth-one tree over a borrowed feature.
#[derive(Debug)]
pub struct Stump<'f, F> {
    feature: &'f F,
    split: SplitMeans,
}

impl<F> Clone for Stump<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Stump<'_, F> {}

impl<'f, F> Stump<'f, F> {
    pub fn feature(&self) -> &'f F {
        self.feature
    }

    #[inline]
    pub fn threshold(&self) -> f64 {
        self.split.threshold
    }

    /// Prediction for observations with `feature <= threshold`.
    #[inline]
    pub fn low_value(&self) -> f64 {
        self.split.low_value
    }

    /// Prediction for observations with `feature > threshold`.
    #[inline]
    pub fn high_value(&self) -> f64 {
        self.split.high_value
    }
}

impl<O: ?Sized, F: Feature<O>> Predictor<O> for Stump<'_, F> {
    #[inline]
    fn predict(&self, observation: &O) -> f64 {
        self.split.predict_value(self.feature.value(observation))
    }
}

/// Fit a stump on `sample` splitting `feature` at `threshold`.
///
/// # Errors
///
/// Returns [`TrainError::DegenerateSplit`] when no example, or every example,
/// has `feature <= threshold`.
pub fn learn_stump<'f, O, F: Feature<O>>(
    sample: &Sample<'_, O>,
    feature: &'f F,
    threshold: f64,
) -> Result<Stump<'f, F>, TrainError> {
    let values = sample.feature_values(feature);
    let split = SplitMeans::fit(&values, sample.targets(), threshold)?;
    Ok(Stump { feature, split })
}

// =============================================================================
// SplitMeans
// =============================================================================

/// Side means of a threshold split over precomputed feature values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SplitMeans {
    pub threshold: f64,
    pub low_value: f64,
    pub high_value: f64,
}

impl SplitMeans {
    pub fn fit(values: &[f64], targets: &[f64], threshold: f64) -> Result<Self, TrainError> {
        debug_assert_eq!(values.len(), targets.len());
        let mut low = SideSum::default();
        let mut high = SideSum::default();
        for (&v, &y) in values.iter().zip(targets) {
            if goes_low(v, threshold) {
                low.add(y);
            } else {
                high.add(y);
            }
        }

        match (low.mean(), high.mean()) {
            (Some(low_value), Some(high_value)) => Ok(Self {
                threshold,
                low_value,
                high_value,
            }),
            _ => Err(TrainError::DegenerateSplit { threshold }),
        }
    }

    #[inline]
    pub fn predict_value(&self, value: f64) -> f64 {
        if goes_low(value, self.threshold) {
            self.low_value
        } else {
            self.high_value
        }
    }

    /// Training cost of this split, identical to [`super::cost`] of the stump.
    pub fn cost(&self, values: &[f64], targets: &[f64]) -> Result<f64, TrainError> {
        mean_squared_error(values.iter().map(|&v| self.predict_value(v)), targets)
    }
}

#[derive(Default)]
struct SideSum {
    sum: f64,
    count: usize,
}

impl SideSum {
    #[inline]
    fn add(&mut self, target: f64) {
        self.sum += target;
        self.count += 1;
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}
