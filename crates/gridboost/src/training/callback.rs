//! Early stopping callback for training.
//!
//! Monitors a validation metric and stops training when no improvement is seen
//! for a specified number of rounds.

/// Outcome of feeding one round's metric to [`EarlyStopping`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EarlyStopAction {
    /// New best value.
    Improved,
    /// No improvement, patience not exhausted.
    Continue,
    /// No improvement for `patience` consecutive rounds.
    Stop,
}

/// Early stopping state.
///
/// A patience of 0 disables the callback.
///
/// # Example
///
/// ```
/// use gridboost::training::{EarlyStopAction, EarlyStopping};
///
/// let mut early_stop = EarlyStopping::new(2, false);
/// let actions: Vec<_> = [3.0, 2.0, 2.5, 2.1].iter().map(|&v| early_stop.update(v)).collect();
/// assert_eq!(
///     actions,
///     vec![
///         EarlyStopAction::Improved,
///         EarlyStopAction::Improved,
///         EarlyStopAction::Continue,
///         EarlyStopAction::Stop,
///     ]
/// );
/// assert_eq!(early_stop.best_round(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct EarlyStopping {
    patience: usize,
    best_value: Option<f64>,
    best_round: usize,
    current_round: usize,
    higher_is_better: bool,
}

impl EarlyStopping {
    pub fn new(patience: usize, higher_is_better: bool) -> Self {
        Self {
            patience,
            best_value: None,
            best_round: 0,
            current_round: 0,
            higher_is_better,
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.patience > 0
    }

    /// Record the metric for the current round.
    pub fn update(&mut self, value: f64) -> EarlyStopAction {
        let improved = match self.best_value {
            None => true,
            Some(best) if self.higher_is_better => value > best,
            Some(best) => value < best,
        };

        if improved {
            self.best_value = Some(value);
            self.best_round = self.current_round;
        }
        self.current_round += 1;

        if improved {
            EarlyStopAction::Improved
        } else if self.current_round - self.best_round > self.patience {
            EarlyStopAction::Stop
        } else {
            EarlyStopAction::Continue
        }
    }

    pub fn best_value(&self) -> Option<f64> {
        self.best_value
    }

    /// Zero-based round of the best value.
    pub fn best_round(&self) -> usize {
        self.best_round
    }
}
