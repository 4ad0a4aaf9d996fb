//! Synthetic datasets for tests, doctests and demos.
//!
//! Every generator is deterministic: random ones take an explicit seed.

mod data;

pub use data::{random_features, split_indices, step_examples, synthetic_linear_targets, wave_examples};
