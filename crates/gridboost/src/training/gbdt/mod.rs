//! Residual boosting.
//!
//! Starting from the mean target, every round fits a tree to the current
//! residuals and adds it to the ensemble with unit weight.

mod trainer;

pub use trainer::{boosted_learn, GBDTParams, GBDTTrainer};
