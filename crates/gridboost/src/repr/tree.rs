//! Binary regression tree.
//!
//! A [`Tree`] is a plain enum: leaves hold a constant, branches hold a
//! `(feature, threshold)` test and two subtrees. Branches refer to features by
//! index into the feature list the tree was learned with; the tree itself does
//! not own any feature. [`crate::model::TreeModel`] binds the two together.
//!
//! Routing rule, used for both training and prediction: an observation goes
//! `low` when `feature(observation) <= threshold`, otherwise `high`.

use crate::data::Feature;

/// Structural validation errors for [`Tree`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TreeValidationError {
    /// A branch refers to a feature outside the bound feature list.
    #[error("branch splits on feature {feature} but only {n_features} features are bound")]
    FeatureOutOfRange { feature: usize, n_features: usize },
    /// A branch threshold is NaN or infinite.
    #[error("branch on feature {feature} has non-finite threshold {threshold}")]
    NonFiniteThreshold { feature: usize, threshold: f64 },
    /// A leaf value is NaN or infinite.
    #[error("leaf has non-finite value {value}")]
    NonFiniteLeaf { value: f64 },
}

/// Immutable binary regression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Tree {
    /// Terminal node.
    Leaf { value: f64 },
    /// Internal node.
    Branch {
        feature: usize,
        threshold: f64,
        low: Box<Tree>,
        high: Box<Tree>,
    },
}

impl Tree {
    pub fn leaf(value: f64) -> Self {
        Self::Leaf { value }
    }

    pub fn branch(feature: usize, threshold: f64, low: Tree, high: Tree) -> Self {
        Self::Branch {
            feature,
            threshold,
            low: Box::new(low),
            high: Box::new(high),
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Descend to the leaf that `observation` falls into and return its value.
    ///
    /// # Panics
    ///
    /// Panics if a branch refers to a feature index outside `features`. Trees
    /// produced by the learners with the same feature list never do; use
    /// [`Tree::validate`] for trees from elsewhere.
    #[inline]
    pub fn predict<O: ?Sized, F: Feature<O>>(&self, features: &[F], observation: &O) -> f64 {
        let mut node = self;
        loop {
            match node {
                Self::Leaf { value } => return *value,
                Self::Branch {
                    feature,
                    threshold,
                    low,
                    high,
                } => {
                    node = if goes_low(features[*feature].value(observation), *threshold) {
                        low.as_ref()
                    } else {
                        high.as_ref()
                    };
                }
            }
        }
    }

    /// Total number of nodes.
    pub fn n_nodes(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Branch { low, high, .. } => 1 + low.n_nodes() + high.n_nodes(),
        }
    }

    /// Number of leaves.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Branch { low, high, .. } => low.n_leaves() + high.n_leaves(),
        }
    }

    /// Length of the longest root-to-leaf path, in edges. A single leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Branch { low, high, .. } => 1 + low.depth().max(high.depth()),
        }
    }

    /// Leaf values, left to right (low before high).
    pub fn leaf_values(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.n_leaves());
        self.visit(&mut |node| {
            if let Self::Leaf { value } = node {
                out.push(*value);
            }
        });
        out
    }

    /// Feature index of every branch, in pre-order.
    pub fn branch_features(&self) -> Vec<usize> {
        let mut out = Vec::new();
        self.visit(&mut |node| {
            if let Self::Branch { feature, .. } = node {
                out.push(*feature);
            }
        });
        out
    }

    /// Feature indices used by branches, sorted and deduplicated.
    pub fn split_features(&self) -> Vec<usize> {
        let mut out = self.branch_features();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Check that the tree can be evaluated against `n_features` features.
    pub fn validate(&self, n_features: usize) -> Result<(), TreeValidationError> {
        match self {
            Self::Leaf { value } => {
                if !value.is_finite() {
                    return Err(TreeValidationError::NonFiniteLeaf { value: *value });
                }
                Ok(())
            }
            Self::Branch {
                feature,
                threshold,
                low,
                high,
            } => {
                if *feature >= n_features {
                    return Err(TreeValidationError::FeatureOutOfRange {
                        feature: *feature,
                        n_features,
                    });
                }
                if !threshold.is_finite() {
                    return Err(TreeValidationError::NonFiniteThreshold {
                        feature: *feature,
                        threshold: *threshold,
                    });
                }
                low.validate(n_features)?;
                high.validate(n_features)
            }
        }
    }

    /// Pre-order visit, low subtree before high.
    fn visit(&self, f: &mut impl FnMut(&Tree)) {
        f(self);
        if let Self::Branch { low, high, .. } = self {
            low.visit(f);
            high.visit(f);
        }
    }
}

/// Whether a feature value is routed to the low side of a split.
#[inline]
pub(crate) fn goes_low(value: f64, threshold: f64) -> bool {
    value <= threshold
}
