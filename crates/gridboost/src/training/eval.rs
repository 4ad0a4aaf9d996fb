//! Evaluation during training.
//!
//! An [`EvalSet`] is a named held-out sample scored after every boosting round.
//! The trainer keeps a running prediction per example, so scoring a round is
//! O(|sample|) regardless of how many trees have been added.

use std::fmt;

use super::metrics::Metric;
use super::TrainError;
use crate::data::Sample;

// =============================================================================
// MetricValue
// =============================================================================

/// A computed metric value with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricValue {
    /// Name of the metric (e.g. "train-mse", "valid-rmse").
    pub name: String,
    pub value: f64,
    pub higher_is_better: bool,
}

impl MetricValue {
    pub fn new(name: impl Into<String>, value: f64, higher_is_better: bool) -> Self {
        Self {
            name: name.into(),
            value,
            higher_is_better,
        }
    }

    pub fn is_better_than(&self, other: &Self) -> bool {
        if self.higher_is_better {
            self.value > other.value
        } else {
            self.value < other.value
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.6}", self.name, self.value)
    }
}

// =============================================================================
// EvalSet
// =============================================================================

/// A named sample evaluated after every round.
#[derive(Debug)]
pub struct EvalSet<'a, O> {
    pub name: &'a str,
    pub sample: &'a Sample<'a, O>,
}

impl<O> Clone for EvalSet<'_, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O> Copy for EvalSet<'_, O> {}

impl<'a, O> EvalSet<'a, O> {
    pub fn new(name: &'a str, sample: &'a Sample<'a, O>) -> Self {
        Self { name, sample }
    }
}

// =============================================================================
// Evaluator
// =============================================================================

/// Scores running predictions with one metric.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Evaluator {
    metric: Metric,
}

impl Evaluator {
    pub fn new(metric: Metric) -> Self {
        Self { metric }
    }

    /// Metrics for one round: training first, then each eval set in order.
    pub fn evaluate_round<O>(
        &self,
        train_predictions: &[f64],
        train_targets: &[f64],
        eval_sets: &[EvalSet<'_, O>],
        eval_predictions: &[Vec<f64>],
    ) -> Result<Vec<MetricValue>, TrainError> {
        let mut out = Vec::with_capacity(1 + eval_sets.len());
        out.push(self.value("train", train_predictions, train_targets)?);
        for (set, preds) in eval_sets.iter().zip(eval_predictions) {
            out.push(self.value(set.name, preds, set.sample.targets())?);
        }
        Ok(out)
    }

    /// Value monitored by early stopping: the first eval set, or the training
    /// metric when there is none.
    pub fn early_stop_value(metrics: &[MetricValue]) -> f64 {
        metrics
            .get(1)
            .or_else(|| metrics.first())
            .map_or(f64::NAN, |m| m.value)
    }

    fn value(&self, set: &str, predictions: &[f64], targets: &[f64]) -> Result<MetricValue, TrainError> {
        let value = self.metric.compute(predictions, targets)?;
        Ok(MetricValue::new(
            format!("{}-{}", set, self.metric.name()),
            value,
            self.metric.higher_is_better(),
        ))
    }
}

// =============================================================================
// TrainingHistory
// =============================================================================

/// Per-round metrics recorded by the boosting trainer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingHistory {
    rounds: Vec<Vec<MetricValue>>,
    best_round: Option<usize>,
}

impl TrainingHistory {
    pub(crate) fn push(&mut self, metrics: Vec<MetricValue>) {
        self.rounds.push(metrics);
    }

    pub(crate) fn set_best_round(&mut self, round: usize) {
        self.best_round = Some(round);
    }

    /// Number of rounds trained, including any discarded by early stopping.
    pub fn n_rounds(&self) -> usize {
        self.rounds.len()
    }

    /// Metrics of zero-based round `round`.
    pub fn round(&self, round: usize) -> Option<&[MetricValue]> {
        self.rounds.get(round).map(Vec::as_slice)
    }

    /// Values of the named metric across rounds.
    pub fn values(&self, name: &str) -> Vec<f64> {
        self.rounds
            .iter()
            .filter_map(|metrics| metrics.iter().find(|m| m.name == name))
            .map(|m| m.value)
            .collect()
    }

    /// Zero-based round kept by early stopping, if the ensemble was truncated.
    pub fn best_round(&self) -> Option<usize> {
        self.best_round
    }
}
