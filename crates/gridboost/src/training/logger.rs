//! Training progress logging.
//!
//! [`TrainingLogger`] decides what to report based on [`Verbosity`] and emits
//! `tracing` events under the `gridboost::training` target. Installing a
//! subscriber is left to the application.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::eval::MetricValue;
use crate::data::{feature_label, Feature};
use crate::repr::Tree;

/// Amount of information logged during training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// No output.
    #[default]
    Silent,
    /// Warnings only.
    Warning,
    /// Per-round metrics and summaries.
    Info,
    /// Per-tree shape details.
    Debug,
}

/// Verbosity-gated training logger.
#[derive(Debug)]
pub struct TrainingLogger {
    verbosity: Verbosity,
    n_rounds: usize,
    started: Option<Instant>,
}

impl TrainingLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            n_rounds: 0,
            started: None,
        }
    }

    #[inline]
    fn enabled(&self, level: Verbosity) -> bool {
        self.verbosity >= level
    }

    pub fn start_training(&mut self, n_rounds: usize) {
        self.n_rounds = n_rounds;
        self.started = Some(Instant::now());
        if self.enabled(Verbosity::Info) {
            info!(target: "gridboost::training", n_rounds, "training started");
        }
    }

    pub fn log_round(&self, round: usize, metrics: &[MetricValue]) {
        if !self.enabled(Verbosity::Info) {
            return;
        }
        let summary = metrics
            .iter()
            .map(MetricValue::to_string)
            .collect::<Vec<_>>()
            .join("  ");
        info!(target: "gridboost::training", "[{}/{}] {}", round + 1, self.n_rounds, summary);
    }

    /// Shape of a freshly grown tree and the features its branches split on.
    pub fn log_tree<O: ?Sized, F: Feature<O>>(&self, round: usize, tree: &Tree, features: &[F]) {
        if !self.enabled(Verbosity::Debug) {
            return;
        }
        let splits = tree
            .split_features()
            .into_iter()
            .map(|idx| feature_label(features, idx))
            .collect::<Vec<_>>()
            .join(",");
        debug!(
            target: "gridboost::training",
            round,
            n_leaves = tree.n_leaves(),
            depth = tree.depth(),
            splits = %splits,
            "tree grown"
        );
    }

    pub fn log_early_stopping(&self, round: usize, best_round: usize, best_value: f64, metric: &str) {
        if self.enabled(Verbosity::Info) {
            info!(
                target: "gridboost::training",
                "early stopping at round {}: best {} {:.6} at round {}",
                round + 1,
                metric,
                best_value,
                best_round + 1
            );
        }
    }

    pub fn warn(&self, message: &str) {
        if self.enabled(Verbosity::Warning) {
            warn!(target: "gridboost::training", "{}", message);
        }
    }

    pub fn finish_training(&self, n_trees: usize) {
        if !self.enabled(Verbosity::Info) {
            return;
        }
        let elapsed_ms = self.started.map(|t| t.elapsed().as_millis() as u64).unwrap_or(0);
        info!(target: "gridboost::training", n_trees, elapsed_ms, "training finished");
    }
}

/// Run `f` under a plain-text subscriber and return everything it logged.
#[cfg(test)]
pub(crate) fn capture_events(f: impl FnOnce()) -> String {
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}
