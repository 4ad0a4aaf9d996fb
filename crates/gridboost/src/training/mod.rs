//! Training.
//!
//! ## Primitives
//!
//! - [`cost`], [`rmse`], [`variance`]: squared-error evaluation
//! - [`levels`]: candidate thresholds for a feature
//! - [`learn_stump`], [`Stump`]: single-split predictor
//!
//! ## Learners
//!
//! - [`tree`]: greedy recursive tree learning ([`learn_tree`])
//! - [`gbdt`]: residual boosting ([`boosted_learn`], [`GBDTTrainer`])
//!
//! ## Shared Infrastructure
//!
//! - [`EvalSet`], [`MetricValue`], [`TrainingHistory`]: per-round evaluation
//! - [`EarlyStopping`]: stop when the monitored metric plateaus
//! - [`TrainingLogger`], [`Verbosity`]: structured logging

mod callback;
mod error;
mod eval;
pub mod gbdt;
mod grid;
mod logger;
mod metrics;
mod stump;
pub mod tree;

pub use callback::{EarlyStopAction, EarlyStopping};
pub use error::TrainError;
pub(crate) use error::SplitError;
pub use eval::{EvalSet, MetricValue, TrainingHistory};
pub use gbdt::{boosted_learn, GBDTParams, GBDTTrainer};
pub use grid::levels;
pub use logger::{TrainingLogger, Verbosity};
pub use metrics::{cost, rmse, variance, Metric};
pub use stump::{learn_stump, Stump};
pub use tree::{find_best_split, learn_tree, split_candidates, SplitCandidate, TreeGrower};
