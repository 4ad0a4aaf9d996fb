//! Training samples.
//!
//! A [`Sample`] is an ordered, repeatable collection of `(observation, target)`
//! pairs. It borrows observations from the caller and owns only the targets, so
//! the views the learners derive from it (partitions at a tree node, residual
//! samples during boosting) never copy observations.

use super::feature::Feature;
use super::DatasetError;
use crate::inference::Predictor;
use crate::training::TrainError;

/// An observation paired with the value to predict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Example<O> {
    pub observation: O,
    pub target: f64,
}

impl<O> Example<O> {
    pub fn new(observation: O, target: f64) -> Self {
        Self { observation, target }
    }
}

/// A borrowed view of labeled observations.
///
/// Order is preserved by every derived view; it carries no meaning beyond
/// making repeated scans deterministic.
#[derive(Debug)]
pub struct Sample<'a, O> {
    observations: Vec<&'a O>,
    targets: Vec<f64>,
}

impl<O> Clone for Sample<'_, O> {
    fn clone(&self) -> Self {
        Self {
            observations: self.observations.clone(),
            targets: self.targets.clone(),
        }
    }
}

impl<'a, O> Sample<'a, O> {
    /// Pair observations with targets.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::LengthMismatch`] if the lengths differ.
    pub fn new(observations: &'a [O], targets: impl Into<Vec<f64>>) -> Result<Self, DatasetError> {
        let targets = targets.into();
        if observations.len() != targets.len() {
            return Err(DatasetError::LengthMismatch {
                observations: observations.len(),
                targets: targets.len(),
            });
        }
        Ok(Self {
            observations: observations.iter().collect(),
            targets,
        })
    }

    /// View a slice of examples.
    pub fn from_examples(examples: &'a [Example<O>]) -> Self {
        examples
            .iter()
            .map(|e| (&e.observation, e.target))
            .collect()
    }

    /// Number of examples.
    #[inline]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Target values in sample order.
    #[inline]
    pub fn targets(&self) -> &[f64] {
        &self.targets
    }

    /// Observations in sample order.
    pub fn observations(&self) -> impl ExactSizeIterator<Item = &'a O> + '_ {
        self.observations.iter().copied()
    }

    /// `(observation, target)` pairs in sample order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'a O, f64)> + '_ {
        self.observations
            .iter()
            .copied()
            .zip(self.targets.iter().copied())
    }

    /// Arithmetic mean of the targets.
    ///
    /// # Errors
    ///
    /// Returns [`TrainError::EmptySample`] for an empty sample.
    pub fn mean_target(&self) -> Result<f64, TrainError> {
        mean(&self.targets)
    }

    /// Evaluate `feature` on every observation, in sample order.
    pub fn feature_values<F: Feature<O>>(&self, feature: &F) -> Vec<f64> {
        self.observations.iter().map(|o| feature.value(o)).collect()
    }

    /// Same observations, new targets.
    ///
    /// # Panics
    ///
    /// Panics if `targets` does not have one entry per example.
    pub fn with_targets(&self, targets: Vec<f64>) -> Self {
        assert_eq!(targets.len(), self.len(), "one target per example");
        Self {
            observations: self.observations.clone(),
            targets,
        }
    }

    /// Same observations, targets replaced by `target - predictor(observation)`.
    pub fn residuals<P: Predictor<O> + ?Sized>(&self, predictor: &P) -> Self {
        let targets = self
            .iter()
            .map(|(o, y)| y - predictor.predict(o))
            .collect();
        self.with_targets(targets)
    }

    /// Split into `(matching, rest)`, keeping sample order on both sides.
    pub fn partition(&self, mut goes_low: impl FnMut(&O) -> bool) -> (Self, Self) {
        let mut low = Self::empty();
        let mut high = Self::empty();
        for (o, y) in self.iter() {
            let side = if goes_low(o) { &mut low } else { &mut high };
            side.observations.push(o);
            side.targets.push(y);
        }
        (low, high)
    }

    fn empty() -> Self {
        Self {
            observations: Vec::new(),
            targets: Vec::new(),
        }
    }
}

impl<'a, O> FromIterator<(&'a O, f64)> for Sample<'a, O> {
    fn from_iter<I: IntoIterator<Item = (&'a O, f64)>>(iter: I) -> Self {
        let (observations, targets) = iter.into_iter().unzip();
        Self { observations, targets }
    }
}

/// Mean of a slice, failing on empty input.
fn mean(values: &[f64]) -> Result<f64, TrainError> {
    if values.is_empty() {
        return Err(TrainError::EmptySample);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}
