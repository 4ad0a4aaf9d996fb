//! Tree learner behavior on hand-built samples.

use approx::assert_relative_eq;
use rstest::rstest;

use gridboost::data::{Example, Sample};
use gridboost::model::TreeParams;
use gridboost::repr::Tree;
use gridboost::training::{cost, learn_stump, learn_tree, levels, variance, TrainError};

type Feat = fn(&f64) -> f64;

const IDENTITY: Feat = |x| *x;

fn step_points() -> Vec<Example<f64>> {
    [(1.0, 2.0), (2.0, 2.0), (3.0, 8.0), (4.0, 8.0)]
        .iter()
        .map(|&(x, y)| Example::new(x, y))
        .collect()
}

fn tree_cost(tree: &Tree, features: &[Feat], sample: &Sample<'_, f64>) -> f64 {
    cost(sample, &|o: &f64| tree.predict(features, o)).unwrap()
}

// =============================================================================
// Grid Search
// =============================================================================

#[rstest]
#[case(1, vec![])]
#[case(2, vec![2.5])]
#[case(3, vec![2.0, 3.0])]
#[case(6, vec![1.5, 2.0, 2.5, 3.0, 3.5])]
fn levels_are_interior_grid_points(#[case] n: u32, #[case] expected: Vec<f64>) {
    let examples = step_points();
    let sample = Sample::from_examples(&examples);
    let got = levels(&sample, &IDENTITY, n);
    assert_eq!(got.len(), expected.len());
    for (g, e) in got.iter().zip(&expected) {
        assert_relative_eq!(g, e, epsilon = 1e-12);
    }
}

#[test]
fn levels_of_constant_feature_are_empty() {
    let examples = step_points();
    let sample = Sample::from_examples(&examples);
    assert!(levels(&sample, &|_: &f64| 3.0, 10).is_empty());
}

// =============================================================================
// Stump
// =============================================================================

#[test]
fn stump_boundary_is_inclusive_low() {
    let examples = step_points();
    let sample = Sample::from_examples(&examples);
    let stump = learn_stump(&sample, &IDENTITY, 2.0).unwrap();

    assert_eq!(stump.low_value(), 2.0);
    assert_eq!(stump.high_value(), 8.0);
    assert_eq!(cost(&sample, &stump).unwrap(), 0.0);
}

#[test]
fn stump_with_empty_side_fails() {
    let examples = step_points();
    let sample = Sample::from_examples(&examples);
    assert_eq!(
        learn_stump(&sample, &IDENTITY, 4.0).unwrap_err(),
        TrainError::DegenerateSplit { threshold: 4.0 }
    );
}

// =============================================================================
// Tree Learner
// =============================================================================

#[test]
fn single_split_scenario() {
    let examples = step_points();
    let sample = Sample::from_examples(&examples);
    let features = [IDENTITY];

    let tree = learn_tree(&TreeParams::new(2, 1, 1), &features, &sample, 0).unwrap();
    assert_eq!(tree, Tree::branch(0, 2.5, Tree::leaf(2.0), Tree::leaf(8.0)));
    assert_eq!(tree_cost(&tree, &features, &sample), 0.0);
}

#[test]
fn zero_depth_scenario() {
    let examples = step_points();
    let sample = Sample::from_examples(&examples);
    let features = [IDENTITY];

    let tree = learn_tree(&TreeParams::new(2, 0, 1), &features, &sample, 0).unwrap();
    assert_eq!(tree, Tree::leaf(5.0));
    assert_eq!(tree_cost(&tree, &features, &sample), 9.0);
    assert_eq!(variance(&sample).unwrap(), 9.0);
}

#[rstest]
#[case::constant_first([|_: &f64| 7.0, IDENTITY], 1)]
#[case::constant_last([IDENTITY, |_: &f64| 7.0], 0)]
fn constant_feature_is_never_selected(#[case] features: [Feat; 2], #[case] informative: usize) {
    let examples = step_points();
    let sample = Sample::from_examples(&examples);

    let tree = learn_tree(&TreeParams::new(4, 3, 1), &features, &sample, 0).unwrap();
    assert_eq!(tree.split_features(), vec![informative]);
}

#[test]
fn equal_cost_ties_prefer_lower_feature_index() {
    let examples = step_points();
    let sample = Sample::from_examples(&examples);
    let features = [IDENTITY, IDENTITY];

    let tree = learn_tree(&TreeParams::new(2, 1, 1), &features, &sample, 0).unwrap();
    assert_eq!(tree.split_features(), vec![0]);
}

#[test]
fn equal_cost_ties_prefer_lower_threshold() {
    // Only two distinct values: every interior grid point induces the same split.
    let examples = vec![Example::new(0.0, 1.0), Example::new(10.0, 5.0)];
    let sample = Sample::from_examples(&examples);
    let features = [IDENTITY];

    let tree = learn_tree(&TreeParams::new(4, 1, 1), &features, &sample, 0).unwrap();
    assert_eq!(tree, Tree::branch(0, 2.5, Tree::leaf(1.0), Tree::leaf(5.0)));
}

#[test]
fn two_features_interact() {
    // Target depends on both coordinates; a depth-2 tree recovers the four quadrants.
    let points: Vec<(f64, f64)> = (0..16).map(|i| ((i % 4) as f64, (i / 4) as f64)).collect();
    let targets: Vec<f64> = points
        .iter()
        .map(|&(a, b)| match (a < 2.0, b < 2.0) {
            (true, true) => 1.0,
            (true, false) => 2.0,
            (false, true) => 3.0,
            (false, false) => 4.0,
        })
        .collect();
    let sample = Sample::new(&points, targets).unwrap();
    let features: [fn(&(f64, f64)) -> f64; 2] = [|p| p.0, |p| p.1];

    let tree = learn_tree(&TreeParams::new(2, 2, 1), &features, &sample, 0).unwrap();
    assert_eq!(tree.n_leaves(), 4);
    assert_eq!(tree.split_features(), vec![0, 1]);
    assert_eq!(cost(&sample, &|p: &(f64, f64)| tree.predict(&features, p)).unwrap(), 0.0);
}

#[test]
fn deeper_trees_fit_no_worse() {
    let examples: Vec<_> = (0..30)
        .map(|i| {
            let x = i as f64 / 3.0;
            Example::new(x, (x * 0.7).sin() * 4.0 + x)
        })
        .collect();
    let sample = Sample::from_examples(&examples);
    let features = [IDENTITY];

    let costs: Vec<f64> = (0..6)
        .map(|depth| {
            let tree = learn_tree(&TreeParams::new(8, depth, 1), &features, &sample, 0).unwrap();
            tree_cost(&tree, &features, &sample)
        })
        .collect();
    for pair in costs.windows(2) {
        assert!(pair[1] <= pair[0] + 1e-9, "{costs:?}");
    }
}

#[test]
fn empty_sample_is_rejected() {
    let examples: Vec<Example<f64>> = Vec::new();
    let sample = Sample::from_examples(&examples);
    assert_eq!(
        learn_tree(&TreeParams::default(), &[IDENTITY], &sample, 0),
        Err(TrainError::EmptySample)
    );
    assert_eq!(variance(&sample), Err(TrainError::EmptySample));
}
