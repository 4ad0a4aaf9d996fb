//! Squared-error cost and evaluation metrics.
//!
//! [`cost`] is the mean squared error of a predictor over a sample. It scores
//! candidate splits inside the tree learner and evaluates finished models.

use serde::{Deserialize, Serialize};

use super::TrainError;
use crate::data::Sample;
use crate::inference::{Constant, Predictor};

/// Mean squared error of `predictor` over `sample`.
///
/// # Errors
///
/// Returns [`TrainError::EmptySample`] for an empty sample.
///
/// # Example
///
/// ```
/// use gridboost::data::{Example, Sample};
/// use gridboost::training::cost;
///
/// let examples = [Example::new(1.0, 1.0), Example::new(2.0, 3.0)];
/// let sample = Sample::from_examples(&examples);
/// assert_eq!(cost(&sample, &|x: &f64| *x).unwrap(), 0.5);
/// ```
pub fn cost<O, P>(sample: &Sample<'_, O>, predictor: &P) -> Result<f64, TrainError>
where
    P: Predictor<O> + ?Sized,
{
    mean_squared_error(
        sample.observations().map(|o| predictor.predict(o)),
        sample.targets(),
    )
}

/// Root mean squared error of `predictor` over `sample`.
pub fn rmse<O, P>(sample: &Sample<'_, O>, predictor: &P) -> Result<f64, TrainError>
where
    P: Predictor<O> + ?Sized,
{
    cost(sample, predictor).map(f64::sqrt)
}

/// Population variance of the targets: the cost of predicting their mean.
pub fn variance<O>(sample: &Sample<'_, O>) -> Result<f64, TrainError> {
    let mean = sample.mean_target()?;
    cost(sample, &Constant(mean))
}

/// MSE of paired predictions and targets, summed in order.
pub(crate) fn mean_squared_error(
    predictions: impl IntoIterator<Item = f64>,
    targets: &[f64],
) -> Result<f64, TrainError> {
    if targets.is_empty() {
        return Err(TrainError::EmptySample);
    }
    let sum_sq: f64 = predictions
        .into_iter()
        .zip(targets)
        .map(|(p, &y)| {
            let diff = p - y;
            diff * diff
        })
        .sum();
    Ok(sum_sq / targets.len() as f64)
}

// =============================================================================
// Metric
// =============================================================================

/// Metric reported for training and evaluation sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Mean squared error (the training cost).
    #[default]
    Mse,
    /// Root mean squared error.
    Rmse,
}

impl Metric {
    /// Compute the metric from predictions aligned with `targets`.
    pub fn compute(&self, predictions: &[f64], targets: &[f64]) -> Result<f64, TrainError> {
        let mse = mean_squared_error(predictions.iter().copied(), targets)?;
        Ok(match self {
            Self::Mse => mse,
            Self::Rmse => mse.sqrt(),
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Mse => "mse",
            Self::Rmse => "rmse",
        }
    }

    /// Both metrics are errors: lower is better.
    pub fn higher_is_better(&self) -> bool {
        false
    }
}
