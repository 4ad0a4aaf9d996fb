//! High-level GBDT configuration with builder pattern.
//!
//! [`GBDTConfig`] gathers everything [`GBDTModel::train`](super::GBDTModel::train)
//! needs. It nests [`TreeParams`] for the per-round tree and uses `bon` for a
//! builder that validates on `build()`.
//!
//! # Example
//!
//! ```
//! use gridboost::model::{GBDTConfig, TreeParams};
//! use gridboost::training::{Metric, Verbosity};
//!
//! // All defaults
//! let config = GBDTConfig::builder().build().unwrap();
//!
//! // Customized
//! let config = GBDTConfig::builder()
//!     .n_rounds(50)
//!     .tree(TreeParams::new(16, 4, 5))
//!     .metric(Metric::Rmse)
//!     .early_stopping_rounds(5)
//!     .verbosity(Verbosity::Info)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.tree.max_depth, 4);
//! ```

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::{ConfigError, TreeParams};
use crate::training::{GBDTParams, Metric, Verbosity};

/// High-level configuration for GBDT model training.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
#[serde(default)]
pub struct GBDTConfig {
    /// Number of boosting rounds. Default: 100.
    #[builder(default = 100)]
    pub n_rounds: u32,

    /// Structure of every round's tree.
    #[builder(default)]
    pub tree: TreeParams,

    /// Metric recorded per round. Default: `Mse`.
    #[builder(default)]
    pub metric: Metric,

    /// Stop training if the monitored metric does not improve for this many
    /// rounds. `None` disables early stopping.
    pub early_stopping_rounds: Option<u32>,

    /// Verbosity level. Default: `Silent`.
    #[builder(default)]
    pub verbosity: Verbosity,
}

/// Custom finishing function that validates the config.
impl<S: g_b_d_t_config_builder::IsComplete> GBDTConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any parameter is invalid:
    /// - `tree.grid_size == 0`
    /// - `early_stopping_rounds == Some(0)`
    pub fn build(self) -> Result<GBDTConfig, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl GBDTConfig {
    /// Validate the configuration.
    ///
    /// Configurations obtained through `serde` bypass the builder; validate
    /// them before use. Training validates as well.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tree.validate()?;
        if let Some(0) = self.early_stopping_rounds {
            return Err(ConfigError::InvalidEarlyStoppingRounds(0));
        }
        Ok(())
    }

    /// Mid-level trainer parameters.
    pub fn to_params(&self) -> GBDTParams {
        GBDTParams {
            n_rounds: self.n_rounds,
            tree: self.tree,
            metric: self.metric,
            early_stopping_rounds: self.early_stopping_rounds.unwrap_or(0),
            verbosity: self.verbosity,
        }
    }
}

impl Default for GBDTConfig {
    fn default() -> Self {
        Self::builder().build().expect("default config is valid")
    }
}
