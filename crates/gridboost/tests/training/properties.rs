//! Learner invariants on generated samples.

use proptest::collection::vec as prop_vec;
use proptest::prelude::*;

use gridboost::data::{Example, Sample};
use gridboost::model::TreeParams;
use gridboost::repr::Tree;
use gridboost::training::{boosted_learn, cost, learn_tree, variance, GBDTParams, GBDTTrainer};

type Feat = fn(&f64) -> f64;

const FEATURES: [Feat; 2] = [|x| *x, |x| (*x * 0.3).sin()];

// =============================================================================
// Strategies
// =============================================================================

fn arb_examples() -> impl Strategy<Value = Vec<Example<f64>>> {
    prop_vec((-50.0f64..50.0, -20.0f64..20.0), 1..40)
        .prop_map(|pairs| pairs.into_iter().map(|(x, y)| Example::new(x, y)).collect())
}

fn arb_params() -> impl Strategy<Value = TreeParams> {
    (1u32..12, 0u32..5, 0usize..4).prop_map(|(grid, depth, min_leaf)| TreeParams::new(grid, depth, min_leaf))
}

fn tree_cost(tree: &Tree, sample: &Sample<'_, f64>) -> f64 {
    cost(sample, &|x: &f64| tree.predict(&FEATURES, x)).unwrap()
}

/// Route `xs` down `tree` and check that every branch sends at least one value each way.
fn assert_branches_partition(tree: &Tree, xs: &[f64]) {
    if let Tree::Branch {
        feature,
        threshold,
        low,
        high,
    } = tree
    {
        let (lo, hi): (Vec<f64>, Vec<f64>) = xs.iter().partition(|x| FEATURES[*feature](*x) <= *threshold);
        assert!(!lo.is_empty() && !hi.is_empty(), "empty side at threshold {threshold}");
        assert_eq!(lo.len() + hi.len(), xs.len());
        assert_branches_partition(low, &lo);
        assert_branches_partition(high, &hi);
    }
}

fn tolerance(reference: f64) -> f64 {
    1e-9 * (1.0 + reference.abs())
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn training_is_deterministic(examples in arb_examples(), params in arb_params()) {
        let sample = Sample::from_examples(&examples);
        let a = learn_tree(&params, &FEATURES, &sample, 0).unwrap();
        let b = learn_tree(&params, &FEATURES, &sample, 0).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn zero_depth_is_mean_leaf(examples in arb_examples(), grid in 1u32..12) {
        let sample = Sample::from_examples(&examples);
        let tree = learn_tree(&TreeParams::new(grid, 0, 1), &FEATURES, &sample, 0).unwrap();
        prop_assert_eq!(&tree, &Tree::leaf(sample.mean_target().unwrap()));
        prop_assert_eq!(tree_cost(&tree, &sample), variance(&sample).unwrap());
    }

    #[test]
    fn fit_is_monotone_in_depth(examples in arb_examples(), grid in 1u32..12, depth in 0u32..4) {
        let sample = Sample::from_examples(&examples);
        let shallow = learn_tree(&TreeParams::new(grid, depth, 1), &FEATURES, &sample, 0).unwrap();
        let deep = learn_tree(&TreeParams::new(grid, depth + 1, 1), &FEATURES, &sample, 0).unwrap();
        let (c_shallow, c_deep) = (tree_cost(&shallow, &sample), tree_cost(&deep, &sample));
        prop_assert!(c_deep <= c_shallow + tolerance(c_shallow), "{} > {}", c_deep, c_shallow);
    }

    #[test]
    fn branches_partition_their_sample(examples in arb_examples(), params in arb_params()) {
        let sample = Sample::from_examples(&examples);
        let tree = learn_tree(&params, &FEATURES, &sample, 0).unwrap();
        let xs: Vec<f64> = examples.iter().map(|e| e.observation).collect();
        assert_branches_partition(&tree, &xs);
        prop_assert!(tree.depth() <= params.max_depth as usize);
    }

    #[test]
    fn boosting_never_increases_training_cost(examples in arb_examples(), params in arb_params(), rounds in 1u32..8) {
        let sample = Sample::from_examples(&examples);
        let trainer = GBDTTrainer::new(GBDTParams { n_rounds: rounds, tree: params, ..Default::default() });
        let (forest, history) = trainer.train(&FEATURES, &sample, &[]).unwrap();
        prop_assert_eq!(forest.n_trees(), rounds as usize);

        let mut previous = variance(&sample).unwrap();
        for value in history.values("train-mse") {
            prop_assert!(value <= previous + tolerance(previous), "{} > {}", value, previous);
            previous = value;
        }
    }

    #[test]
    fn zero_rounds_is_constant_mean(examples in arb_examples(), params in arb_params(), probe in -60.0f64..60.0) {
        let sample = Sample::from_examples(&examples);
        let forest = boosted_learn(&params, &FEATURES, &sample, 0).unwrap();
        prop_assert_eq!(forest.n_trees(), 0);
        prop_assert_eq!(forest.predict(&FEATURES, &probe), sample.mean_target().unwrap());
    }
}
