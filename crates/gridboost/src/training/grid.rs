//! Candidate split thresholds.
//!
//! For a feature and a sample, [`levels`] divides the observed range
//! `[min, max]` into `n` equal segments and returns the `n - 1` interior
//! boundaries. Every boundary lies strictly inside the range, so splitting the
//! same sample at any of them leaves examples on both sides.

use super::SplitError;
use crate::data::{Feature, Sample};

/// Evenly spaced interior thresholds of `feature` over `sample`.
///
/// Returns an empty vector when the feature is constant on the sample, when
/// `n <= 1`, or when the sample is empty.
///
/// # Example
///
/// ```
/// use gridboost::data::{Example, Sample};
/// use gridboost::training::levels;
///
/// let examples: Vec<_> = [0.0, 4.0, 10.0].iter().map(|&x| Example::new(x, 0.0)).collect();
/// let sample = Sample::from_examples(&examples);
/// assert_eq!(levels(&sample, &|x: &f64| *x, 4), vec![2.5, 5.0, 7.5]);
/// ```
pub fn levels<O, F: Feature<O>>(sample: &Sample<'_, O>, feature: &F, n: u32) -> Vec<f64> {
    levels_from_values(&sample.feature_values(feature), n)
}

/// [`levels`] over precomputed feature values.
pub(crate) fn levels_from_values(values: &[f64], n: u32) -> Vec<f64> {
    match value_range(values) {
        Ok((min, max)) => interior_points(min, max, n),
        Err(_) => Vec::new(),
    }
}

/// `min` and `max` of the values.
///
/// # Errors
///
/// Fails when there is nothing to split: no values, a single distinct value,
/// or a non-finite bound.
pub(crate) fn value_range(values: &[f64]) -> Result<(f64, f64), SplitError> {
    let (&first, rest) = values.split_first().ok_or(SplitError::NoValues)?;
    let (min, max) = rest
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    if min == max {
        return Err(SplitError::DegenerateFeature { value: min });
    }
    if !min.is_finite() || !max.is_finite() {
        return Err(SplitError::NonFiniteRange { min, max });
    }
    Ok((min, max))
}

fn interior_points(min: f64, max: f64, n: u32) -> Vec<f64> {
    let n_cells = f64::from(n.max(1));
    let span = max - min;
    if span.is_finite() {
        let step = span / n_cells;
        return (1..n).map(|k| min + f64::from(k) * step).collect();
    }
    // Span overflows only when the bounds straddle zero near f64::MAX.
    (1..n)
        .map(|k| {
            let t = f64::from(k) / n_cells;
            min * (1.0 - t) + max * t
        })
        .collect()
}
