//! Training errors.

use crate::model::ConfigError;
use crate::repr::TreeValidationError;

/// Errors surfaced by the learners and by cost evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrainError {
    /// A mean or cost was requested over zero examples.
    #[error("sample is empty")]
    EmptySample,

    /// A stump threshold left one side of the split without examples.
    #[error("threshold {threshold} leaves one side of the split empty")]
    DegenerateSplit { threshold: f64 },

    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// A tree does not fit the feature list it is bound to.
    #[error("invalid tree: {0}")]
    InvalidTree(#[from] TreeValidationError),
}

/// Split-search conditions recovered locally by the tree learner.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub(crate) enum SplitError {
    #[error("no values to split")]
    NoValues,
    /// The feature takes a single value on the current sample.
    #[error("feature is constant at {value}")]
    DegenerateFeature { value: f64 },
    #[error("feature range [{min}, {max}] is not finite")]
    NonFiniteRange { min: f64, max: f64 },
}
