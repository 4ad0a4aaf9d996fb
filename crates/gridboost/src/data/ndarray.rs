//! `ndarray` adapters.
//!
//! Tabular callers hold features as a 2-D array with one row per observation.
//! [`rows`] turns such an array into row views usable as observations, and
//! [`Column`] is the feature that reads one column of a row.
//!
//! # Example
//!
//! ```
//! use gridboost::data::{columns, rows, Sample};
//! use ndarray::array;
//!
//! let x = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0]];
//! let y = array![0.5, 1.0, 1.5];
//!
//! let observations = rows(x.view());
//! let sample = Sample::new(&observations, y.to_vec()).unwrap();
//! let features = columns(x.ncols());
//! assert_eq!(sample.feature_values(&features[1]), vec![10.0, 20.0, 30.0]);
//! ```

use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

use super::feature::Feature;
use super::sample::Sample;
use super::DatasetError;

/// Feature that reads column `i` of a row.
///
/// # Panics
///
/// Evaluating on a row shorter than `i + 1` panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Column(pub usize);

impl<'v> Feature<ArrayView1<'v, f64>> for Column {
    #[inline]
    fn value(&self, row: &ArrayView1<'v, f64>) -> f64 {
        row[self.0]
    }
}

impl Feature<Array1<f64>> for Column {
    #[inline]
    fn value(&self, row: &Array1<f64>) -> f64 {
        row[self.0]
    }
}

impl Feature<Vec<f64>> for Column {
    #[inline]
    fn value(&self, row: &Vec<f64>) -> f64 {
        row[self.0]
    }
}

impl Feature<[f64]> for Column {
    #[inline]
    fn value(&self, row: &[f64]) -> f64 {
        row[self.0]
    }
}

/// One [`Column`] feature per column, in column order.
pub fn columns(n_columns: usize) -> Vec<Column> {
    (0..n_columns).map(Column).collect()
}

/// Row views of a feature matrix, one per observation.
pub fn rows(features: ArrayView2<'_, f64>) -> Vec<ArrayView1<'_, f64>> {
    (0..features.nrows())
        .map(|i| features.clone().index_axis_move(Axis(0), i))
        .collect()
}

/// Pair previously extracted rows with a target vector.
///
/// # Errors
///
/// Returns [`DatasetError::LengthMismatch`] if `targets` has a different length.
pub fn sample_from_array<'a, 'v>(
    rows: &'a [ArrayView1<'v, f64>],
    targets: ArrayView1<'_, f64>,
) -> Result<Sample<'a, ArrayView1<'v, f64>>, DatasetError> {
    Sample::new(rows, targets.to_vec())
}
