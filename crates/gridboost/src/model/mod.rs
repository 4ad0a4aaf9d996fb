//! High-level model API.
//!
//! - [`TreeParams`], [`GBDTConfig`]: validated configuration
//! - [`TreeModel`]: one greedy regression tree bound to its features
//! - [`GBDTModel`]: residual-boosted forest with training history
//!
//! Models implement [`Predictor`](crate::inference::Predictor), so they can be
//! scored with [`cost`](crate::training::cost) like any other predictor.

mod config;
mod gbdt;
mod params;
mod tree;

pub use config::GBDTConfig;
pub use gbdt::GBDTModel;
pub use params::{ConfigError, TreeParams};
pub use tree::TreeModel;
