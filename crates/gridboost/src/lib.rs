//! gridboost: greedy grid-search regression trees and residual boosting.
//!
//! Observations are opaque; learners see them only through [`Feature`]s,
//! numeric extractors supplied by the caller. Candidate split thresholds are
//! the interior points of an equal-width grid over each feature's range.
//!
//! # Key Types
//!
//! - [`TreeModel`] / [`GBDTModel`] - High-level models with train/predict
//! - [`TreeParams`] / [`GBDTConfig`] - Configuration
//! - [`Sample`] / [`Feature`] - Training data
//! - [`Predictor`] - Anything that maps an observation to a prediction
//!
//! # Training
//!
//! Use `GBDTConfig::builder()` to configure, then `GBDTModel::train()`.
//! The free functions in [`training`] ([`learn_tree`](training::learn_tree),
//! [`boosted_learn`](training::boosted_learn), [`cost`](training::cost)) expose
//! the same learners without the model wrappers.
//!
//! ```
//! use gridboost::{GBDTConfig, GBDTModel, Predictor, Sample, TreeParams};
//! use gridboost::data::Example;
//!
//! let examples: Vec<_> = (0..40)
//!     .map(|i| {
//!         let x = i as f64 / 4.0;
//!         Example::new(x, if x < 5.0 { x } else { 10.0 - x })
//!     })
//!     .collect();
//! let sample = Sample::from_examples(&examples);
//!
//! let config = GBDTConfig::builder()
//!     .n_rounds(20)
//!     .tree(TreeParams::new(16, 3, 2))
//!     .build()?;
//! let model = GBDTModel::train(config, vec![|x: &f64| *x], &sample, &[])?;
//!
//! assert!(model.cost(&sample)? < 0.25);
//! let _ = model.predict(&2.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export approx traits for users who want to compare predictions
pub use approx;

pub mod data;
pub mod inference;
pub mod model;
pub mod repr;
pub mod testing;
pub mod training;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// High-level model types
pub use model::{GBDTModel, TreeModel};

// Configuration types
pub use model::{ConfigError, GBDTConfig, TreeParams};

// Training types
pub use training::{Metric, TrainError, Verbosity};

// Data types
pub use data::{Column, DatasetError, Example, Feature, NamedFeature, Sample};

// Prediction
pub use inference::Predictor;
