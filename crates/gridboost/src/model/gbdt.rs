//! GBDT model implementation.
//!
//! [`GBDTModel`] is the high-level entry point for boosted training. It wraps
//! a [`Forest`], the features its trees index into, the configuration it was
//! trained with and the per-round [`TrainingHistory`].

use std::fmt;

use crate::data::{Feature, Sample};
use crate::inference::Predictor;
use crate::repr::Forest;
use crate::training::{cost, EvalSet, GBDTTrainer, TrainError, TrainingHistory};

use super::GBDTConfig;

/// High-level GBDT model.
///
/// # Example
///
/// ```
/// use gridboost::inference::Predictor;
/// use gridboost::model::{GBDTConfig, GBDTModel, TreeParams};
/// use gridboost::testing;
///
/// let examples = testing::step_examples(32);
/// let sample = gridboost::data::Sample::from_examples(&examples);
///
/// let config = GBDTConfig::builder()
///     .n_rounds(10)
///     .tree(TreeParams::new(8, 2, 1))
///     .build()
///     .unwrap();
/// let model = GBDTModel::train(config, vec![|x: &f64| *x], &sample, &[]).unwrap();
///
/// assert_eq!(model.n_trees(), 10);
/// assert!(model.cost(&sample).unwrap() < 1e-9);
/// let _ = model.predict(&0.5);
/// ```
#[derive(Clone)]
pub struct GBDTModel<F> {
    forest: Forest,
    features: Vec<F>,
    config: GBDTConfig,
    history: TrainingHistory,
}

impl<F> GBDTModel<F> {
    /// Train a boosted model.
    ///
    /// `eval_sets` are scored after every round and recorded in
    /// [`history`](Self::history); the first one drives early stopping when
    /// `config.early_stopping_rounds` is set.
    ///
    /// # Errors
    ///
    /// - [`TrainError::InvalidConfig`] if `config` fails validation
    /// - [`TrainError::EmptySample`] if `sample` or any eval set is empty
    pub fn train<O>(
        config: GBDTConfig,
        features: Vec<F>,
        sample: &Sample<'_, O>,
        eval_sets: &[EvalSet<'_, O>],
    ) -> Result<Self, TrainError>
    where
        F: Feature<O>,
    {
        config.validate()?;
        let trainer = GBDTTrainer::new(config.to_params());
        let (forest, history) = trainer.train(&features, sample, eval_sets)?;
        Ok(Self {
            forest,
            features,
            config,
            history,
        })
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn features(&self) -> &[F] {
        &self.features
    }

    pub fn config(&self) -> &GBDTConfig {
        &self.config
    }

    pub fn history(&self) -> &TrainingHistory {
        &self.history
    }

    #[inline]
    pub fn n_trees(&self) -> usize {
        self.forest.n_trees()
    }

    /// Mean squared error on `sample`.
    pub fn cost<O>(&self, sample: &Sample<'_, O>) -> Result<f64, TrainError>
    where
        F: Feature<O>,
    {
        cost(sample, self)
    }

    /// Number of branches splitting on each feature, in feature order.
    pub fn split_counts(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.features.len()];
        for feature in self.forest.trees().flat_map(|tree| tree.branch_features()) {
            counts[feature] += 1;
        }
        counts
    }
}

impl<F> fmt::Debug for GBDTModel<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GBDTModel")
            .field("forest", &self.forest)
            .field("config", &self.config)
            .field("history", &self.history)
            .field("n_features", &self.features.len())
            .finish_non_exhaustive()
    }
}

impl<O: ?Sized, F: Feature<O>> Predictor<O> for GBDTModel<F> {
    #[inline]
    fn predict(&self, observation: &O) -> f64 {
        self.forest.predict(&self.features, observation)
    }
}
