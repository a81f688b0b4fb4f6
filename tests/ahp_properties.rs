//! Property-based tests for the AHP math engine.
//!
//! Uses proptest to check the numeric invariants of weight estimation,
//! consistency evaluation, and aggregation over generated matrices.

use std::collections::HashMap;

use ahp_engine::domain::ahp::{
    calculate_all_results, random_index, Aggregator, ComparisonMatrix, ConsistencyEvaluator,
    WeightEstimator, WeightVector, RECIPROCAL_TOLERANCE,
};
use ahp_engine::domain::foundation::SaatyScale;
use proptest::prelude::*;

const EPS: f64 = 1e-9;

/// A reciprocal matrix built from upper-triangle judgments on the Saaty scale.
fn reciprocal_matrix(max_size: usize) -> impl Strategy<Value = ComparisonMatrix> {
    (1usize..=max_size).prop_flat_map(|n| {
        let pairs = n * (n - 1) / 2;
        prop::collection::vec(
            (prop::sample::select(SaatyScale::ALL.to_vec()), any::<bool>()),
            pairs,
        )
        .prop_map(move |judgments| {
            let mut builder = ComparisonMatrix::builder(n);
            let mut k = 0;
            for i in 0..n {
                for j in (i + 1)..n {
                    let (scale, inverted) = judgments[k];
                    let value = if inverted {
                        scale.reciprocal()
                    } else {
                        scale.as_f64()
                    };
                    builder = builder.judgment(i, j, value);
                    k += 1;
                }
            }
            builder.build().unwrap()
        })
    })
}

/// A normalized vector of `len` strictly positive entries.
fn weight_vector(len: usize) -> impl Strategy<Value = WeightVector> {
    prop::collection::vec(0.01f64..10.0, len)
        .prop_map(|raw| WeightVector::normalized(raw).unwrap())
}

fn names(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{}{}", prefix, i)).collect()
}

proptest! {
    // ==================== Weight Estimator ====================

    #[test]
    fn all_ones_matrix_is_uniform_and_consistent(n in 1usize..=20) {
        let matrix = ComparisonMatrix::ones(n).unwrap();
        let weights = WeightEstimator::estimate_weights(&matrix).unwrap();

        for w in weights.iter() {
            prop_assert!((w - 1.0 / n as f64).abs() < EPS);
        }

        let metrics = ConsistencyEvaluator::evaluate_consistency(&matrix, &weights).unwrap();
        prop_assert!((metrics.lambda_max - n as f64).abs() < EPS);
        prop_assert!(metrics.consistency_index.abs() < EPS);
        prop_assert!(metrics.consistency_ratio.abs() < EPS);
    }

    #[test]
    fn weights_sum_to_one_and_are_positive(matrix in reciprocal_matrix(12)) {
        let weights = WeightEstimator::estimate_weights(&matrix).unwrap();

        prop_assert_eq!(weights.len(), matrix.size());
        prop_assert!((weights.sum() - 1.0).abs() < EPS);
        prop_assert!(weights.iter().all(|w| *w > 0.0));
    }

    #[test]
    fn generated_matrices_pass_reciprocal_check(matrix in reciprocal_matrix(12)) {
        prop_assert!(matrix.validate_reciprocal(RECIPROCAL_TOLERANCE).is_ok());
    }

    #[test]
    fn perfectly_consistent_matrix_recovers_its_weights(target in (2usize..=10).prop_flat_map(weight_vector)) {
        let n = target.len();
        let rows: Vec<Vec<f64>> = (0..n)
            .map(|i| (0..n).map(|j| target.values()[i] / target.values()[j]).collect())
            .collect();
        let matrix = ComparisonMatrix::from_rows(rows).unwrap();

        let weights = WeightEstimator::estimate_weights(&matrix).unwrap();
        for (estimated, expected) in weights.iter().zip(target.iter()) {
            prop_assert!((estimated - expected).abs() < 1e-9);
        }

        let metrics = ConsistencyEvaluator::evaluate_consistency(&matrix, &weights).unwrap();
        prop_assert!(metrics.consistency_ratio.abs() < 1e-9);
    }

    // ==================== Consistency Evaluator ====================

    #[test]
    fn consistency_values_are_finite(matrix in reciprocal_matrix(12)) {
        let weights = WeightEstimator::estimate_weights(&matrix).unwrap();
        let (cr, lambda_max, ci) = ConsistencyEvaluator::evaluate_consistency(&matrix, &weights)
            .unwrap()
            .as_tuple();

        prop_assert!(cr.is_finite() && lambda_max.is_finite() && ci.is_finite());
        // λmax of a positive reciprocal matrix is never below n
        prop_assert!(lambda_max >= matrix.size() as f64 - 1e-9);
    }

    #[test]
    fn two_by_two_is_always_consistent(matrix in reciprocal_matrix(2)) {
        let weights = WeightEstimator::estimate_weights(&matrix).unwrap();
        let metrics = ConsistencyEvaluator::evaluate_consistency(&matrix, &weights).unwrap();
        prop_assert_eq!(metrics.consistency_ratio, 0.0);
    }

    #[test]
    fn random_index_lookup_covers_large_matrices(n in 16usize..=50) {
        prop_assert_eq!(random_index(n), 1.59);

        let matrix = ComparisonMatrix::ones(n).unwrap();
        let weights = WeightEstimator::estimate_weights(&matrix).unwrap();
        prop_assert!(ConsistencyEvaluator::evaluate_consistency(&matrix, &weights).is_ok());
    }

    // ==================== Aggregator ====================

    #[test]
    fn aggregate_sums_to_one(
        (criteria_weights, alternative_weights) in (1usize..=6, 1usize..=6).prop_flat_map(|(c, a)| {
            (weight_vector(c), prop::collection::vec(weight_vector(a), c))
        })
    ) {
        let criteria = names("c", criteria_weights.len());
        let alternatives = names("a", alternative_weights[0].len());
        let by_criterion: HashMap<String, WeightVector> =
            criteria.iter().cloned().zip(alternative_weights).collect();

        let scores = Aggregator::aggregate(&criteria_weights, &by_criterion, &criteria, &alternatives).unwrap();

        prop_assert_eq!(scores.len(), alternatives.len());
        prop_assert!((scores.iter().sum::<f64>() - 1.0).abs() < EPS);
    }

    #[test]
    fn aggregate_is_scale_invariant_after_renormalization(
        (criteria_weights, alternative_weights) in (1usize..=6, 1usize..=6).prop_flat_map(|(c, a)| {
            (weight_vector(c), prop::collection::vec(weight_vector(a), c))
        }),
        k in 0.1f64..100.0
    ) {
        let criteria = names("c", criteria_weights.len());
        let alternatives = names("a", alternative_weights[0].len());
        let by_criterion: HashMap<String, WeightVector> =
            criteria.iter().cloned().zip(alternative_weights).collect();

        let scaled = WeightVector::normalized(criteria_weights.iter().map(|w| w * k).collect()).unwrap();

        let original = Aggregator::aggregate(&criteria_weights, &by_criterion, &criteria, &alternatives).unwrap();
        let rescaled = Aggregator::aggregate(&scaled, &by_criterion, &criteria, &alternatives).unwrap();

        for (a, b) in original.iter().zip(rescaled.iter()) {
            prop_assert!((a - b).abs() < EPS);
        }
    }

    // ==================== Synthesis ====================

    #[test]
    fn final_scores_sum_to_one_for_any_judgments(
        criteria_matrix in reciprocal_matrix(5),
        alternative_matrix in reciprocal_matrix(5),
    ) {
        let criteria = names("c", criteria_matrix.size());
        let alternatives = names("a", alternative_matrix.size());
        let matrices: HashMap<String, ComparisonMatrix> = criteria
            .iter()
            .map(|c| (c.clone(), alternative_matrix.clone()))
            .collect();

        let results = calculate_all_results(&criteria_matrix, &matrices, &criteria, &alternatives).unwrap();

        prop_assert!((results.final_scores.iter().sum::<f64>() - 1.0).abs() < EPS);
        prop_assert_eq!(results.ranking().len(), alternatives.len());
        prop_assert_eq!(results.alternative_consistency.len(), criteria.len());
    }
}

#[test]
fn saaty_example_orders_by_dominance() {
    let matrix = ComparisonMatrix::from_rows(vec![
        vec![1.0, 3.0, 5.0],
        vec![1.0 / 3.0, 1.0, 2.0],
        vec![1.0 / 5.0, 1.0 / 2.0, 1.0],
    ])
    .unwrap();

    let weights = WeightEstimator::estimate_weights(&matrix).unwrap();
    assert!(weights.values()[0] > weights.values()[1]);
    assert!(weights.values()[1] > weights.values()[2]);

    let metrics = ConsistencyEvaluator::evaluate_consistency(&matrix, &weights).unwrap();
    assert!(metrics.is_acceptable(0.1));
}

#[test]
fn n_sixteen_reuses_last_random_index() {
    assert_eq!(random_index(15), random_index(16));
}
