//! Input data: observations, features and labeled samples.
//!
//! - [`Feature`]: numeric extractor over an opaque observation type
//! - [`NamedFeature`]: feature with a display name
//! - [`Example`], [`Sample`]: labeled observations
//! - [`Column`], [`rows`]: adapters for `ndarray` tabular data

mod feature;
mod ndarray;
mod sample;

pub use self::ndarray::{columns, rows, sample_from_array, Column};
pub use feature::{Feature, NamedFeature};
pub use sample::{Example, Sample};

pub(crate) use feature::feature_label;

/// Errors raised while assembling a [`Sample`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    /// Observations and targets differ in length.
    #[error("got {observations} observations but {targets} targets")]
    LengthMismatch { observations: usize, targets: usize },
}
