//! Tree parameters and configuration errors.
//!
//! [`TreeParams`] is shared by the single-tree learner and by every boosting
//! round. It has sensible defaults and a `validate` method; the high-level
//! [`GBDTConfig`](super::GBDTConfig) nests it.

use serde::{Deserialize, Serialize};

// =============================================================================
// ConfigError
// =============================================================================

/// Errors raised when validating a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// At least one grid segment is needed per feature.
    #[error("grid_size must be >= 1, got {0}")]
    InvalidGridSize(u32),
    /// Early stopping needs a patience of at least one round.
    #[error("early_stopping_rounds must be >= 1 when set, got {0}")]
    InvalidEarlyStoppingRounds(u32),
}

// =============================================================================
// TreeParams
// =============================================================================

/// Tree structure parameters.
///
/// - `grid_size`: number of equal-width segments the learner divides each
///   feature's range into at every node; the `grid_size - 1` interior
///   boundaries are the candidate thresholds.
/// - `max_depth`: nodes at this depth become leaves. `0` yields a single leaf.
/// - `min_leaf_size`: nodes with at most this many examples become leaves.
///
/// Negative depths and sizes are unrepresentable; deserializing one fails.
///
/// # Example
///
/// ```
/// use gridboost::model::TreeParams;
///
/// let params = TreeParams::default().with_max_depth(5).with_grid_size(32);
/// assert!(params.validate().is_ok());
/// assert!(TreeParams::default().with_grid_size(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeParams {
    /// Segments per feature range. Default: 10.
    pub grid_size: u32,
    /// Maximum tree depth. Default: 3.
    pub max_depth: u32,
    /// Sample-size floor for splitting. Default: 1.
    pub min_leaf_size: usize,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            grid_size: 10,
            max_depth: 3,
            min_leaf_size: 1,
        }
    }
}

impl TreeParams {
    pub fn new(grid_size: u32, max_depth: u32, min_leaf_size: usize) -> Self {
        Self {
            grid_size,
            max_depth,
            min_leaf_size,
        }
    }

    pub fn with_grid_size(mut self, grid_size: u32) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_min_leaf_size(mut self, min_leaf_size: usize) -> Self {
        self.min_leaf_size = min_leaf_size;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 1 {
            return Err(ConfigError::InvalidGridSize(self.grid_size));
        }
        Ok(())
    }
}
