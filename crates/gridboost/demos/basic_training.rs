//! Basic GBDT training example using the high-level API.
//!
//! Trains a boosted model on synthetic tabular data held in an `ndarray`
//! matrix, then inspects the forest and its per-round history.
//!
//! Run with:
//! ```bash
//! RUST_LOG=gridboost=info cargo run --example basic_training
//! ```

use gridboost::data::{columns, rows, Sample};
use gridboost::inference::predict_sample;
use gridboost::testing;
use gridboost::training::{rmse, EvalSet};
use gridboost::{GBDTConfig, GBDTModel, Metric, Predictor, TreeParams, Verbosity};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // =========================================================================
    // 1. Prepare Data
    // =========================================================================
    let n_samples = 500;
    let n_features = 4;

    let x = testing::random_features(n_samples, n_features, 42, -1.0, 1.0);
    let (y, weights, bias) = testing::synthetic_linear_targets(x.view(), 7, 0.1);
    println!("True weights: {weights:.3}, bias: {bias:.3}");

    let (train_idx, valid_idx) = testing::split_indices(n_samples, 0.2, 1);
    let all_rows = rows(x.view());
    let train_rows: Vec<_> = train_idx.iter().map(|&i| all_rows[i]).collect();
    let valid_rows: Vec<_> = valid_idx.iter().map(|&i| all_rows[i]).collect();
    let train = Sample::new(&train_rows, train_idx.iter().map(|&i| y[i]).collect::<Vec<_>>())
        .expect("targets match rows");
    let valid = Sample::new(&valid_rows, valid_idx.iter().map(|&i| y[i]).collect::<Vec<_>>())
        .expect("targets match rows");

    // =========================================================================
    // 2. Configure and Train
    // =========================================================================
    let config = GBDTConfig::builder()
        .n_rounds(40)
        .tree(TreeParams::new(32, 3, 5))
        .metric(Metric::Rmse)
        .verbosity(Verbosity::Info)
        .build()
        .expect("Invalid configuration");

    println!("Training GBDT model...");
    println!("  Rounds: {}", config.n_rounds);
    println!("  Tree: {:?}", config.tree);
    println!("  Metric: {:?}\n", config.metric);

    let model = GBDTModel::train(config, columns(n_features), &train, &[EvalSet::new("valid", &valid)])
        .expect("Training failed");

    // =========================================================================
    // 3. Make Predictions
    // =========================================================================
    let first = valid_rows[0];
    println!("Prediction for {first}: {:.4}", model.predict(&first));

    let preds = predict_sample(&model, &valid);
    println!("First five validation predictions: {:.3?}", &preds[..5]);

    // =========================================================================
    // 4. Inspect Model
    // =========================================================================
    println!("\n=== Model Information ===");
    println!("Trees: {}", model.n_trees());
    println!("Base score: {:.4}", model.forest().base_score());
    println!("Splits per feature: {:?}", model.split_counts());
    println!("Train RMSE: {:.4}", rmse(&train, &model).expect("non-empty"));
    println!("Valid RMSE: {:.4}", rmse(&valid, &model).expect("non-empty"));

    let valid_curve = model.history().values("valid-rmse");
    println!("Valid RMSE at rounds 1/10/40: {:.4} / {:.4} / {:.4}", valid_curve[0], valid_curve[9], valid_curve[39]);
}
