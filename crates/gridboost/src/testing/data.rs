use ndarray::{Array1, Array2, ArrayView2};
use rand::prelude::*;

use crate::data::Example;

/// `n` points on `[0, 1)` with target `0` on the first half and `1` on the second.
pub fn step_examples(n: usize) -> Vec<Example<f64>> {
    (0..n)
        .map(|i| {
            let target = if i < n / 2 { 0.0 } else { 1.0 };
            Example::new(i as f64 / n as f64, target)
        })
        .collect()
}

/// `n` evenly spaced points on `[0, 2π)` with target `sin(x)` plus uniform
/// noise in `[-noise, noise]`.
pub fn wave_examples(n: usize, noise: f64, seed: u64) -> Vec<Example<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let x = i as f64 / n as f64 * std::f64::consts::TAU;
            let eps = if noise > 0.0 { rng.gen_range(-noise..=noise) } else { 0.0 };
            Example::new(x, x.sin() + eps)
        })
        .collect()
}

/// Random feature matrix, `rows x cols`, values uniform in `[min, max]`.
pub fn random_features(rows: usize, cols: usize, seed: u64, min: f64, max: f64) -> Array2<f64> {
    assert!(max >= min);
    let mut rng = StdRng::seed_from_u64(seed);
    let width = max - min;
    Array2::from_shape_fn((rows, cols), |_| min + rng.gen::<f64>() * width)
}

/// Regression targets from a random linear model of `features` plus uniform noise.
///
/// Returns `(targets, weights, bias)`.
pub fn synthetic_linear_targets(
    features: ArrayView2<'_, f64>,
    seed: u64,
    noise_amplitude: f64,
) -> (Array1<f64>, Array1<f64>, f64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let weights: Array1<f64> = (0..features.ncols()).map(|_| rng.gen::<f64>() * 2.0 - 1.0).collect();
    let bias = rng.gen::<f64>() * 0.5 - 0.25;

    let mut targets = features.dot(&weights) + bias;
    if noise_amplitude > 0.0 {
        targets.mapv_inplace(|y| y + (rng.gen::<f64>() * 2.0 - 1.0) * noise_amplitude);
    }
    (targets, weights, bias)
}

/// Deterministic train/valid split of `0..rows`.
///
/// Returns `(train_idx, valid_idx)`.
pub fn split_indices(rows: usize, valid_fraction: f64, seed: u64) -> (Vec<usize>, Vec<usize>) {
    assert!((0.0..1.0).contains(&valid_fraction));
    let mut idx: Vec<usize> = (0..rows).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    idx.shuffle(&mut rng);

    let valid_len = ((rows as f64) * valid_fraction).round() as usize;
    let (valid, train) = idx.split_at(valid_len.min(rows));
    (train.to_vec(), valid.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_examples_halves() {
        let examples = step_examples(6);
        let targets: Vec<f64> = examples.iter().map(|e| e.target).collect();
        assert_eq!(targets, vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
        assert_eq!(examples[3].observation, 0.5);
    }

    #[test]
    fn generators_are_seeded() {
        assert_eq!(random_features(5, 3, 7, -1.0, 1.0), random_features(5, 3, 7, -1.0, 1.0));
        let a: Vec<f64> = wave_examples(10, 0.1, 3).iter().map(|e| e.target).collect();
        let b: Vec<f64> = wave_examples(10, 0.1, 3).iter().map(|e| e.target).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn random_features_respect_bounds() {
        let x = random_features(20, 4, 1, 2.0, 3.0);
        assert_eq!(x.dim(), (20, 4));
        assert!(x.iter().all(|&v| (2.0..=3.0).contains(&v)));
    }

    #[test]
    fn noiseless_linear_targets() {
        let x = random_features(8, 2, 11, 0.0, 1.0);
        let (y, w, b) = synthetic_linear_targets(x.view(), 5, 0.0);
        for (row, &target) in x.rows().into_iter().zip(y.iter()) {
            approx::assert_abs_diff_eq!(row.dot(&w) + b, target, epsilon = 1e-12);
        }
    }

    #[test]
    fn split_indices_partition_rows() {
        let (train, valid) = split_indices(10, 0.3, 42);
        assert_eq!(valid.len(), 3);
        let mut all: Vec<usize> = train.iter().chain(&valid).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..10).collect::<Vec<_>>());
    }
}
