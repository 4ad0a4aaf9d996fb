//! GBDT trainer.
//!
//! Orchestrates residual computation, tree growing and prediction updates.
//! Use [`GBDTTrainer::train`] to fit a [`Forest`] to a sample.

use crate::data::{Feature, Sample};
use crate::model::TreeParams;
use crate::repr::Forest;
use crate::training::callback::{EarlyStopAction, EarlyStopping};
use crate::training::eval::{EvalSet, Evaluator, TrainingHistory};
use crate::training::logger::{TrainingLogger, Verbosity};
use crate::training::metrics::Metric;
use crate::training::tree::TreeGrower;
use crate::training::TrainError;

// =============================================================================
// GBDTParams
// =============================================================================

/// Parameters for GBDT training.
#[derive(Clone, Debug, PartialEq)]
pub struct GBDTParams {
    /// Number of boosting rounds (trees to train). Zero yields the mean predictor.
    pub n_rounds: u32,
    /// Structure of every round's tree.
    pub tree: TreeParams,
    /// Metric recorded per round and monitored by early stopping.
    pub metric: Metric,
    /// Stop after this many rounds without improvement. 0 disables.
    pub early_stopping_rounds: u32,
    pub verbosity: Verbosity,
}

impl Default for GBDTParams {
    fn default() -> Self {
        Self {
            n_rounds: 100,
            tree: TreeParams::default(),
            metric: Metric::default(),
            early_stopping_rounds: 0,
            verbosity: Verbosity::default(),
        }
    }
}

// =============================================================================
// GBDTTrainer
// =============================================================================

/// GBDT trainer.
#[derive(Clone, Debug)]
pub struct GBDTTrainer {
    params: GBDTParams,
}

impl GBDTTrainer {
    pub fn new(params: GBDTParams) -> Self {
        Self { params }
    }

    /// Train a forest.
    ///
    /// The forest starts at the mean target of `sample`. Each round fits a tree
    /// to `target - prediction` and adds it unscaled. Every eval set is scored
    /// after every round; with early stopping enabled the first eval set (or
    /// the training sample, if there are none) is monitored and the forest is
    /// truncated to its best round.
    ///
    /// # Errors
    ///
    /// - [`TrainError::InvalidConfig`] for invalid tree parameters
    /// - [`TrainError::EmptySample`] if `sample` or an eval set is empty
    pub fn train<O, F: Feature<O>>(
        &self,
        features: &[F],
        sample: &Sample<'_, O>,
        eval_sets: &[EvalSet<'_, O>],
    ) -> Result<(Forest, TrainingHistory), TrainError> {
        self.params.tree.validate()?;
        if eval_sets.iter().any(|set| set.sample.is_empty()) {
            return Err(TrainError::EmptySample);
        }

        let base_score = sample.mean_target()?;
        let mut forest = Forest::new(base_score);
        let mut predictions = vec![base_score; sample.len()];
        let mut eval_predictions: Vec<Vec<f64>> = eval_sets
            .iter()
            .map(|set| vec![base_score; set.sample.len()])
            .collect();

        let grower = TreeGrower::new(self.params.tree);
        let evaluator = Evaluator::new(self.params.metric);
        let mut history = TrainingHistory::default();

        let mut early_stopping = EarlyStopping::new(
            self.params.early_stopping_rounds as usize,
            self.params.metric.higher_is_better(),
        );
        let mut best_n_trees: usize = 0;

        let mut logger = TrainingLogger::new(self.params.verbosity);
        logger.start_training(self.params.n_rounds as usize);

        for round in 0..self.params.n_rounds as usize {
            let residuals = sample.with_targets(
                sample
                    .targets()
                    .iter()
                    .zip(&predictions)
                    .map(|(y, p)| y - p)
                    .collect(),
            );
            let tree = grower.grow(features, &residuals)?;

            if round == 0
                && tree.is_leaf()
                && self.params.tree.max_depth > 0
                && sample.len() > self.params.tree.min_leaf_size
            {
                logger.warn("no feature offers a usable split; trees are single leaves");
            }
            logger.log_tree(round, &tree, features);

            for (p, o) in predictions.iter_mut().zip(sample.observations()) {
                *p += tree.predict(features, o);
            }
            for (preds, set) in eval_predictions.iter_mut().zip(eval_sets) {
                for (p, o) in preds.iter_mut().zip(set.sample.observations()) {
                    *p += tree.predict(features, o);
                }
            }
            forest.push_tree(tree);

            let round_metrics =
                evaluator.evaluate_round(&predictions, sample.targets(), eval_sets, &eval_predictions)?;
            logger.log_round(round, &round_metrics);
            let early_stop_value = Evaluator::early_stop_value(&round_metrics);
            history.push(round_metrics);

            if early_stopping.is_enabled() {
                match early_stopping.update(early_stop_value) {
                    EarlyStopAction::Improved => best_n_trees = forest.n_trees(),
                    EarlyStopAction::Stop => {
                        logger.log_early_stopping(
                            round,
                            early_stopping.best_round(),
                            early_stopping.best_value().unwrap_or(early_stop_value),
                            self.params.metric.name(),
                        );
                        break;
                    }
                    EarlyStopAction::Continue => {}
                }
            }
        }

        if early_stopping.is_enabled() && best_n_trees > 0 && best_n_trees < forest.n_trees() {
            forest.truncate(best_n_trees);
            history.set_best_round(best_n_trees - 1);
        }

        logger.finish_training(forest.n_trees());
        Ok((forest, history))
    }
}

/// Boost `rounds` trees on `sample` with default logging and no early stopping.
///
/// `rounds = 0` returns a forest that predicts the mean target.
///
/// # Example
///
/// ```
/// use gridboost::data::{Example, Sample};
/// use gridboost::model::TreeParams;
/// use gridboost::training::{boosted_learn, cost};
///
/// let examples: Vec<_> = (0..20).map(|i| Example::new(i as f64, (i % 4) as f64)).collect();
/// let sample = Sample::from_examples(&examples);
/// let features = [|x: &f64| *x];
///
/// let forest = boosted_learn(&TreeParams::new(8, 2, 1), &features, &sample, 5).unwrap();
/// assert_eq!(forest.n_trees(), 5);
/// let model = |x: &f64| forest.predict(&features, x);
/// assert!(cost(&sample, &model).unwrap() < 1.25);
/// ```
pub fn boosted_learn<O, F: Feature<O>>(
    params: &TreeParams,
    features: &[F],
    sample: &Sample<'_, O>,
    rounds: u32,
) -> Result<Forest, TrainError> {
    let trainer = GBDTTrainer::new(GBDTParams {
        n_rounds: rounds,
        tree: *params,
        ..Default::default()
    });
    trainer.train(features, sample, &[]).map(|(forest, _)| forest)
}
