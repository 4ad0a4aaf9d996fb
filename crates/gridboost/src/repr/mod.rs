//! Canonical model representations.
//!
//! - [`Tree`]: a single regression tree
//! - [`Forest`]: a boosted ensemble (base score plus additive trees)

mod forest;
mod tree;

pub use forest::{Forest, ForestValidationError};
pub use tree::{Tree, TreeValidationError};

pub(crate) use tree::goes_low;
