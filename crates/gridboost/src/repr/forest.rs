//! Additive ensemble of trees.

use crate::data::Feature;

use super::tree::{Tree, TreeValidationError};

/// Structural validation errors for [`Forest`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ForestValidationError {
    #[error("base score {0} is not finite")]
    NonFiniteBaseScore(f64),
    #[error("tree {tree_idx} is invalid: {error}")]
    InvalidTree {
        tree_idx: usize,
        error: TreeValidationError,
    },
}

/// Boosted ensemble: `predict(o) = base_score + Σ tree(o)`.
///
/// Trees are applied in insertion order, each with unit weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Forest {
    base_score: f64,
    trees: Vec<Tree>,
}

impl Forest {
    /// Empty forest predicting `base_score` everywhere.
    pub fn new(base_score: f64) -> Self {
        Self {
            base_score,
            trees: Vec::new(),
        }
    }

    pub fn push_tree(&mut self, tree: Tree) {
        self.trees.push(tree);
    }

    #[inline]
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    #[inline]
    pub fn base_score(&self) -> f64 {
        self.base_score
    }

    #[inline]
    pub fn tree(&self, idx: usize) -> &Tree {
        &self.trees[idx]
    }

    pub fn trees(&self) -> impl ExactSizeIterator<Item = &Tree> {
        self.trees.iter()
    }

    /// Keep only the first `n_trees` trees.
    pub fn truncate(&mut self, n_trees: usize) {
        self.trees.truncate(n_trees);
    }

    /// Sum of the base score and every tree's prediction.
    ///
    /// # Panics
    ///
    /// Panics if a tree refers to a feature index outside `features`.
    pub fn predict<O: ?Sized, F: Feature<O>>(&self, features: &[F], observation: &O) -> f64 {
        self.trees
            .iter()
            .fold(self.base_score, |acc, tree| acc + tree.predict(features, observation))
    }

    /// Validate every tree against `n_features` features.
    pub fn validate(&self, n_features: usize) -> Result<(), ForestValidationError> {
        if !self.base_score.is_finite() {
            return Err(ForestValidationError::NonFiniteBaseScore(self.base_score));
        }
        for (tree_idx, tree) in self.trees.iter().enumerate() {
            tree.validate(n_features)
                .map_err(|error| ForestValidationError::InvalidTree { tree_idx, error })?;
        }
        Ok(())
    }
}
