//! Early stopping example.
//!
//! Boosting adds trees with unit weight, so it overfits noisy targets quickly.
//! With `early_stopping_rounds` set, training stops once the validation metric
//! has not improved for that many rounds and the forest is truncated to its
//! best round.
//!
//! Run with:
//! ```bash
//! cargo run --example early_stopping
//! ```

use gridboost::data::Sample;
use gridboost::testing;
use gridboost::training::EvalSet;
use gridboost::{GBDTConfig, GBDTModel, TreeParams, Verbosity};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Same wave, independent noise.
    let train_examples = testing::wave_examples(200, 0.4, 1);
    let valid_examples = testing::wave_examples(200, 0.4, 2);
    let train = Sample::from_examples(&train_examples);
    let valid = Sample::from_examples(&valid_examples);

    let config = GBDTConfig::builder()
        .n_rounds(200)
        .tree(TreeParams::new(16, 4, 1))
        .early_stopping_rounds(5)
        .verbosity(Verbosity::Info)
        .build()
        .expect("Invalid configuration");

    let model = GBDTModel::train(config, vec![|x: &f64| *x], &train, &[EvalSet::new("valid", &valid)])
        .expect("Training failed");

    let history = model.history();
    println!("\n=== Early Stopping ===");
    println!("Rounds trained: {}", history.n_rounds());
    println!("Trees kept: {}", model.n_trees());
    match history.best_round() {
        Some(best) => println!("Best round: {}", best + 1),
        None => println!("Validation metric improved until the last round"),
    }

    let train_curve = history.values("train-mse");
    let valid_curve = history.values("valid-mse");
    for (round, (t, v)) in train_curve.iter().zip(&valid_curve).enumerate() {
        println!("  round {:>3}  train {:.4}  valid {:.4}", round + 1, t, v);
    }
}
