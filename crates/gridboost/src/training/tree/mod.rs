//! Greedy regression tree learning.
//!
//! At every node the learner scores all `(feature, threshold)` pairs from the
//! threshold grid by the cost of the stump they induce, splits on the cheapest
//! one and recurses on both halves. There is no backtracking and no pruning.
//!
//! - [`split`]: candidate enumeration and tie-broken selection
//! - [`grower`]: recursion, stopping rules and the [`learn_tree`] entry point

pub mod grower;
pub mod split;

pub use grower::{learn_tree, TreeGrower};
pub use split::{find_best_split, split_candidates, SplitCandidate};
