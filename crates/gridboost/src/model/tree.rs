//! Single regression tree bound to its features.

use std::fmt;

use crate::data::{Feature, Sample};
use crate::inference::Predictor;
use crate::repr::Tree;
use crate::training::{cost, TrainError, TreeGrower};

use super::TreeParams;

/// A [`Tree`] together with the features its branches index into.
///
/// # Example
///
/// ```
/// use gridboost::data::{Example, Sample};
/// use gridboost::inference::Predictor;
/// use gridboost::model::{TreeModel, TreeParams};
///
/// let examples: Vec<_> = (0..8).map(|i| Example::new(i as f64, if i < 4 { 1.0 } else { 3.0 })).collect();
/// let sample = Sample::from_examples(&examples);
///
/// let model = TreeModel::train(&TreeParams::new(4, 2, 1), vec![|x: &f64| *x], &sample).unwrap();
/// assert_eq!(model.predict(&0.0), 1.0);
/// assert_eq!(model.predict(&7.0), 3.0);
/// assert_eq!(model.cost(&sample).unwrap(), 0.0);
/// ```
#[derive(Clone)]
pub struct TreeModel<F> {
    tree: Tree,
    features: Vec<F>,
}

impl<F> TreeModel<F> {
    /// Learn a tree on `sample`.
    ///
    /// # Errors
    ///
    /// - [`TrainError::InvalidConfig`] if `params` fail validation
    /// - [`TrainError::EmptySample`] if `sample` is empty
    pub fn train<O>(params: &TreeParams, features: Vec<F>, sample: &Sample<'_, O>) -> Result<Self, TrainError>
    where
        F: Feature<O>,
    {
        params.validate()?;
        let tree = TreeGrower::new(*params).grow(&features, sample)?;
        Ok(Self { tree, features })
    }

    /// Bind an existing tree to a feature list.
    ///
    /// # Errors
    ///
    /// Returns [`TrainError::InvalidTree`] if the tree does not fit `features`.
    pub fn from_parts(tree: Tree, features: Vec<F>) -> Result<Self, TrainError> {
        tree.validate(features.len())?;
        Ok(Self { tree, features })
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn features(&self) -> &[F] {
        &self.features
    }

    pub fn into_parts(self) -> (Tree, Vec<F>) {
        (self.tree, self.features)
    }

    /// Mean squared error on `sample`.
    pub fn cost<O>(&self, sample: &Sample<'_, O>) -> Result<f64, TrainError>
    where
        F: Feature<O>,
    {
        cost(sample, self)
    }
}

impl<F> fmt::Debug for TreeModel<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeModel")
            .field("tree", &self.tree)
            .field("n_features", &self.features.len())
            .finish_non_exhaustive()
    }
}

impl<O: ?Sized, F: Feature<O>> Predictor<O> for TreeModel<F> {
    #[inline]
    fn predict(&self, observation: &O) -> f64 {
        self.tree.predict(&self.features, observation)
    }
}
