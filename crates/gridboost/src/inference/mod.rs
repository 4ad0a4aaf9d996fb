//! Prediction.
//!
//! Every learner in this crate produces a [`Predictor`]: constants, stumps,
//! single trees and boosted forests are interchangeable wherever a predictor
//! is expected, and so is any `Fn(&O) -> f64` closure.

mod predictor;

pub use predictor::{predict_array, predict_sample, Constant, Predictor};
