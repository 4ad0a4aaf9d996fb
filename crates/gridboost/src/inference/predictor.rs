//! The [`Predictor`] trait and batch helpers.

use ndarray::Array1;

use crate::data::Sample;

/// A pure function from an observation to a real-valued prediction.
pub trait Predictor<O: ?Sized> {
    fn predict(&self, observation: &O) -> f64;
}

impl<O: ?Sized, F> Predictor<O> for F
where
    F: Fn(&O) -> f64,
{
    #[inline]
    fn predict(&self, observation: &O) -> f64 {
        self(observation)
    }
}

/// Predicts the same value for every observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant(pub f64);

impl<O: ?Sized> Predictor<O> for Constant {
    #[inline]
    fn predict(&self, _observation: &O) -> f64 {
        self.0
    }
}

/// Predictions for every example of a sample, in sample order.
pub fn predict_sample<O, P>(predictor: &P, sample: &Sample<'_, O>) -> Vec<f64>
where
    P: Predictor<O> + ?Sized,
{
    sample.observations().map(|o| predictor.predict(o)).collect()
}

/// Predictions for a batch of observations as an `ndarray` vector.
pub fn predict_array<'o, O, P>(predictor: &P, observations: impl IntoIterator<Item = &'o O>) -> Array1<f64>
where
    O: 'o,
    P: Predictor<O> + ?Sized,
{
    observations.into_iter().map(|o| predictor.predict(o)).collect()
}
