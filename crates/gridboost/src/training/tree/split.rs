//! Split candidates and selection.

use std::cmp::Ordering;

use crate::data::{Feature, Sample};
use crate::training::grid::levels_from_values;
use crate::training::stump::SplitMeans;

/// A scored `(feature, threshold)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitCandidate {
    /// Index into the feature list.
    pub feature: usize,
    /// Position of `threshold` in the feature's grid.
    pub threshold_index: usize,
    pub threshold: f64,
    /// Training cost of the induced stump.
    pub cost: f64,
}

impl SplitCandidate {
    /// Selection order: lower cost, then lower feature index, then lower
    /// threshold index.
    ///
    /// This is the first minimum of a features-then-thresholds scan, made
    /// explicit so the result does not depend on how candidates are visited.
    pub fn cmp_priority(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then(self.feature.cmp(&other.feature))
            .then(self.threshold_index.cmp(&other.threshold_index))
    }

    #[inline]
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.cmp_priority(other) == Ordering::Less
    }
}

/// Every usable split of `sample`, in features-then-thresholds order.
///
/// Features that are constant on the sample contribute nothing. Thresholds
/// that would leave a side empty are skipped.
pub fn split_candidates<O, F: Feature<O>>(
    features: &[F],
    sample: &Sample<'_, O>,
    grid_size: u32,
) -> Vec<SplitCandidate> {
    let targets = sample.targets();
    let mut candidates = Vec::new();

    for (feature, f) in features.iter().enumerate() {
        let values = sample.feature_values(f);
        for (threshold_index, threshold) in levels_from_values(&values, grid_size).into_iter().enumerate() {
            let Ok(split) = SplitMeans::fit(&values, targets, threshold) else {
                continue;
            };
            let Ok(cost) = split.cost(&values, targets) else {
                continue;
            };
            candidates.push(SplitCandidate {
                feature,
                threshold_index,
                threshold,
                cost,
            });
        }
    }

    candidates
}

/// The best split of `sample`, or `None` when no feature can be split.
pub fn find_best_split<O, F: Feature<O>>(
    features: &[F],
    sample: &Sample<'_, O>,
    grid_size: u32,
) -> Option<SplitCandidate> {
    split_candidates(features, sample, grid_size)
        .into_iter()
        .min_by(SplitCandidate::cmp_priority)
}
