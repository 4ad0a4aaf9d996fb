//! Recursive tree growth.

use tracing::trace;

use super::split::find_best_split;
use crate::data::{Feature, Sample};
use crate::model::TreeParams;
use crate::repr::{goes_low, Tree};
use crate::training::TrainError;

/// Learn a tree on `sample`, treating the root as sitting at `depth`.
///
/// Callers normally pass `depth = 0`; a larger value shortens the remaining
/// depth budget.
///
/// # Errors
///
/// - [`TrainError::InvalidConfig`] if `params` fail validation
/// - [`TrainError::EmptySample`] if `sample` is empty
///
/// # Example
///
/// ```
/// use gridboost::data::{Example, Sample};
/// use gridboost::model::TreeParams;
/// use gridboost::repr::Tree;
/// use gridboost::training::learn_tree;
///
/// let examples: Vec<_> = [(1.0, 2.0), (2.0, 2.0), (3.0, 8.0), (4.0, 8.0)]
///     .iter()
///     .map(|&(x, y)| Example::new(x, y))
///     .collect();
/// let sample = Sample::from_examples(&examples);
/// let features = [|x: &f64| *x];
///
/// let tree = learn_tree(&TreeParams::new(2, 1, 1), &features, &sample, 0).unwrap();
/// assert_eq!(tree, Tree::branch(0, 2.5, Tree::leaf(2.0), Tree::leaf(8.0)));
/// ```
pub fn learn_tree<O, F: Feature<O>>(
    params: &TreeParams,
    features: &[F],
    sample: &Sample<'_, O>,
    depth: u32,
) -> Result<Tree, TrainError> {
    params.validate()?;
    TreeGrower::new(*params).grow_from(features, sample, depth)
}

/// Depth-first greedy tree grower.
///
/// Does not validate its parameters; a zero `grid_size` simply yields leaves.
#[derive(Debug, Clone, Copy)]
pub struct TreeGrower {
    params: TreeParams,
}

impl TreeGrower {
    pub fn new(params: TreeParams) -> Self {
        Self { params }
    }

    /// Grow a tree rooted at depth 0.
    pub fn grow<O, F: Feature<O>>(&self, features: &[F], sample: &Sample<'_, O>) -> Result<Tree, TrainError> {
        self.grow_from(features, sample, 0)
    }

    /// Grow a tree whose root sits at `depth`.
    pub fn grow_from<O, F: Feature<O>>(
        &self,
        features: &[F],
        sample: &Sample<'_, O>,
        depth: u32,
    ) -> Result<Tree, TrainError> {
        let mean = sample.mean_target()?;

        if self.should_stop(sample, depth) {
            return Ok(Tree::leaf(mean));
        }

        let Some(best) = find_best_split(features, sample, self.params.grid_size) else {
            trace!(depth, n_samples = sample.len(), "no usable split");
            return Ok(Tree::leaf(mean));
        };

        let feature = &features[best.feature];
        let (under, over) = sample.partition(|o| goes_low(feature.value(o), best.threshold));
        debug_assert!(!under.is_empty() && !over.is_empty());

        trace!(
            depth,
            feature = best.feature,
            threshold = best.threshold,
            cost = best.cost,
            n_low = under.len(),
            n_high = over.len(),
            "split"
        );

        let low = self.grow_from(features, &under, depth + 1)?;
        let high = self.grow_from(features, &over, depth + 1)?;
        Ok(Tree::branch(best.feature, best.threshold, low, high))
    }

    #[inline]
    fn should_stop<O>(&self, sample: &Sample<'_, O>, depth: u32) -> bool {
        depth >= self.params.max_depth || sample.len() <= self.params.min_leaf_size
    }
}
