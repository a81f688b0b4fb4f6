//! Consistency Evaluator - λmax, consistency index, and consistency ratio.

use serde::{Deserialize, Serialize};

use super::{AhpError, ComparisonMatrix, WeightVector};

/// Judgments are acceptable when CR is strictly below this value.
pub const CONSISTENCY_ACCEPTABLE_THRESHOLD: f64 = 0.1;

/// Weights at or below this magnitude make the λmax ratio undefined.
pub const ZERO_WEIGHT_EPSILON: f64 = 1e-12;

/// Random consistency index by matrix size, for n = 1 through 15.
pub const RANDOM_INDEX: [f64; 15] = [
    0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49, 1.51, 1.54, 1.56, 1.57, 1.59,
];

/// Returns RI for a matrix of size `n`; sizes above 15 reuse the n = 15 value.
pub fn random_index(n: usize) -> f64 {
    match n {
        0 => 0.0,
        n if n <= RANDOM_INDEX.len() => RANDOM_INDEX[n - 1],
        _ => RANDOM_INDEX[RANDOM_INDEX.len() - 1],
    }
}

/// Consistency measures for one comparison matrix and its weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyMetrics {
    /// CI / RI; the value callers gate on.
    pub consistency_ratio: f64,
    /// Principal eigenvalue estimate.
    pub lambda_max: f64,
    /// (λmax - n) / (n - 1).
    pub consistency_index: f64,
}

impl ConsistencyMetrics {
    /// Returns true if CR is below `threshold`.
    pub fn is_acceptable(&self, threshold: f64) -> bool {
        self.consistency_ratio < threshold
    }

    /// Returns the metrics as the `(CR, λmax, CI)` triple.
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.consistency_ratio, self.lambda_max, self.consistency_index)
    }
}

/// Consistency analysis functions.
pub struct ConsistencyEvaluator;

impl ConsistencyEvaluator {
    /// Evaluates the consistency of `matrix` given its estimated `weights`.
    ///
    /// # Algorithm
    /// 1. weighted_sum = matrix · weights
    /// 2. ratio[i] = weighted_sum[i] / weights[i]
    /// 3. λmax = mean(ratio)
    /// 4. CI = (λmax - n) / (n - 1), or 0 when n = 1
    /// 5. CR = CI / RI[n], or 0 when RI[n] = 0 (n ≤ 2)
    ///
    /// λmax is the mean of the elementwise ratios rather than a Rayleigh
    /// quotient; the RI table is calibrated against this estimator.
    ///
    /// # Errors
    /// - `InvalidMatrix` if `weights` does not match the matrix size
    /// - `ComputationError` if a weight is within [`ZERO_WEIGHT_EPSILON`] of zero
    pub fn evaluate_consistency(
        matrix: &ComparisonMatrix,
        weights: &WeightVector,
    ) -> Result<ConsistencyMetrics, AhpError> {
        Self::evaluate_with_epsilon(matrix, weights, ZERO_WEIGHT_EPSILON)
    }

    /// Same as [`Self::evaluate_consistency`] with a caller-chosen zero-weight guard.
    pub fn evaluate_with_epsilon(
        matrix: &ComparisonMatrix,
        weights: &WeightVector,
        zero_weight_epsilon: f64,
    ) -> Result<ConsistencyMetrics, AhpError> {
        let n = matrix.size();
        if weights.len() != n {
            return Err(AhpError::invalid_matrix(format!(
                "weight vector has {} entries but the matrix is {}x{}",
                weights.len(),
                n,
                n
            )));
        }

        let w = weights.values();
        if let Some(i) = w.iter().position(|wi| wi.abs() <= zero_weight_epsilon) {
            return Err(AhpError::computation(format!(
                "weight {} is too close to zero to evaluate consistency",
                i + 1
            )));
        }

        let ratio_total: f64 = matrix
            .rows()
            .iter()
            .zip(w)
            .map(|(row, wi)| {
                let weighted_sum: f64 = row.iter().zip(w).map(|(m, wj)| m * wj).sum();
                weighted_sum / wi
            })
            .sum();
        let lambda_max = ratio_total / n as f64;

        if !lambda_max.is_finite() {
            return Err(AhpError::computation("principal eigenvalue estimate is not finite"));
        }

        let consistency_index = if n > 1 {
            (lambda_max - n as f64) / (n as f64 - 1.0)
        } else {
            0.0
        };

        let ri = random_index(n);
        let consistency_ratio = if ri > 0.0 { consistency_index / ri } else { 0.0 };

        Ok(ConsistencyMetrics {
            consistency_ratio,
            lambda_max,
            consistency_index,
        })
    }
}
