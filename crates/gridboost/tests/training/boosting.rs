//! Boosting driver behavior: stagewise fit, eval sets and early stopping.

use approx::assert_relative_eq;

use gridboost::data::{Example, Sample};
use gridboost::inference::{Constant, Predictor};
use gridboost::model::TreeParams;
use gridboost::testing;
use gridboost::training::{
    boosted_learn, cost, variance, EvalSet, GBDTParams, GBDTTrainer, Metric, TrainError,
};

type Feat = fn(&f64) -> f64;

const IDENTITY: Feat = |x| *x;

#[test]
fn zero_rounds_predicts_the_mean() {
    let examples = testing::wave_examples(50, 0.2, 1);
    let sample = Sample::from_examples(&examples);
    let features = [IDENTITY];

    let forest = boosted_learn(&TreeParams::default(), &features, &sample, 0).unwrap();
    let mean = Constant(sample.mean_target().unwrap());

    for (x, _) in sample.iter() {
        assert_eq!(forest.predict(&features, x), mean.predict(x));
    }
    assert_eq!(
        cost(&sample, &|x: &f64| forest.predict(&features, x)).unwrap(),
        variance(&sample).unwrap()
    );
}

#[test]
fn each_round_adds_exactly_one_tree() {
    let examples = testing::wave_examples(50, 0.2, 2);
    let sample = Sample::from_examples(&examples);

    for rounds in [1, 3, 7] {
        let forest = boosted_learn(&TreeParams::new(6, 2, 1), &[IDENTITY], &sample, rounds).unwrap();
        assert_eq!(forest.n_trees(), rounds as usize);
    }
}

#[test]
fn boosting_fits_the_wave() {
    let examples = testing::wave_examples(80, 0.0, 0);
    let sample = Sample::from_examples(&examples);
    let features = [IDENTITY];

    let single = boosted_learn(&TreeParams::new(8, 2, 2), &features, &sample, 1).unwrap();
    let many = boosted_learn(&TreeParams::new(8, 2, 2), &features, &sample, 25).unwrap();

    let single_cost = cost(&sample, &|x: &f64| single.predict(&features, x)).unwrap();
    let many_cost = cost(&sample, &|x: &f64| many.predict(&features, x)).unwrap();
    assert!(single_cost < variance(&sample).unwrap());
    assert!(many_cost < single_cost);
}

#[test]
fn history_records_every_eval_set() {
    let train = testing::wave_examples(60, 0.1, 3);
    let valid = testing::wave_examples(25, 0.1, 4);
    let train_sample = Sample::from_examples(&train);
    let valid_sample = Sample::from_examples(&valid);
    let features = [IDENTITY];

    let trainer = GBDTTrainer::new(GBDTParams {
        n_rounds: 6,
        tree: TreeParams::new(8, 2, 1),
        metric: Metric::Rmse,
        ..Default::default()
    });
    let (forest, history) = trainer
        .train(&features, &train_sample, &[EvalSet::new("valid", &valid_sample)])
        .unwrap();

    assert_eq!(history.n_rounds(), 6);
    assert_eq!(history.best_round(), None);
    let round = history.round(0).unwrap();
    assert_eq!(round.len(), 2);
    assert_eq!(round[0].name, "train-rmse");
    assert_eq!(round[1].name, "valid-rmse");

    let model = |x: &f64| forest.predict(&features, x);
    let last_valid = *history.values("valid-rmse").last().unwrap();
    assert_relative_eq!(last_valid, cost(&valid_sample, &model).unwrap().sqrt(), epsilon = 1e-12);
}

#[test]
fn early_stopping_keeps_the_best_round() {
    // The first tree fits the step exactly; later trees are all-zero leaves,
    // so the validation metric never improves again.
    let train = testing::step_examples(32);
    let valid: Vec<_> = testing::step_examples(12)
        .into_iter()
        .map(|e| Example::new(e.observation, 1.0 - e.target))
        .collect();
    let train_sample = Sample::from_examples(&train);
    let valid_sample = Sample::from_examples(&valid);
    let features = [IDENTITY];

    let trainer = GBDTTrainer::new(GBDTParams {
        n_rounds: 40,
        tree: TreeParams::new(8, 2, 1),
        early_stopping_rounds: 3,
        ..Default::default()
    });
    let (forest, history) = trainer
        .train(&features, &train_sample, &[EvalSet::new("valid", &valid_sample)])
        .unwrap();

    assert_eq!(history.n_rounds(), 4);
    assert_eq!(forest.n_trees(), 1);
    assert_eq!(history.best_round(), Some(0));

    let valid_costs = history.values("valid-mse");
    assert!(valid_costs[1..].iter().all(|&c| c == valid_costs[0]));
    assert_eq!(cost(&train_sample, &|x: &f64| forest.predict(&features, x)).unwrap(), 0.0);
}

#[test]
fn disabled_early_stopping_trains_every_round() {
    let train = testing::wave_examples(40, 0.0, 0);
    let valid: Vec<_> = train
        .iter()
        .map(|e| Example::new(e.observation, -e.target))
        .collect();
    let train_sample = Sample::from_examples(&train);
    let valid_sample = Sample::from_examples(&valid);

    let trainer = GBDTTrainer::new(GBDTParams {
        n_rounds: 12,
        tree: TreeParams::new(8, 2, 1),
        ..Default::default()
    });
    let (forest, history) = trainer
        .train(&[IDENTITY], &train_sample, &[EvalSet::new("valid", &valid_sample)])
        .unwrap();
    assert_eq!(forest.n_trees(), 12);
    assert_eq!(history.n_rounds(), 12);
}

#[test]
fn empty_training_sample_is_rejected() {
    let examples: Vec<Example<f64>> = Vec::new();
    let sample = Sample::from_examples(&examples);
    assert_eq!(
        boosted_learn(&TreeParams::default(), &[IDENTITY], &sample, 3).unwrap_err(),
        TrainError::EmptySample
    );
}
