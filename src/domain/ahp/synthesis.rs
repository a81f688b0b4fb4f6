//! Synthesis - Full AHP calculation from a set of comparison matrices.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::{
    AhpError, Aggregator, ComparisonMatrix, ConsistencyEvaluator, ConsistencyMetrics,
    WeightEstimator, WeightVector,
};
use crate::domain::foundation::Timestamp;

/// Identifies one comparison matrix within an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "criterion")]
pub enum MatrixKey {
    /// The criteria-vs-criteria matrix.
    Criteria,
    /// The alternatives-vs-alternatives matrix for one criterion.
    Alternatives(String),
}

impl fmt::Display for MatrixKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixKey::Criteria => write!(f, "criteria"),
            MatrixKey::Alternatives(criterion) => write!(f, "{}", criterion),
        }
    }
}

/// A matrix whose consistency ratio is at or above the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InconsistentMatrix {
    pub matrix: MatrixKey,
    pub consistency_ratio: f64,
}

/// One alternative's position in the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    /// 1-based rank; 1 is the best alternative.
    pub rank: usize,
    pub alternative: String,
    pub score: f64,
}

/// Everything produced by one "calculate results" run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub criteria: Vec<String>,
    pub alternatives: Vec<String>,
    pub criteria_weights: WeightVector,
    /// Alternative weights keyed by criterion name.
    pub alternative_weights: HashMap<String, WeightVector>,
    /// Synthesized score per alternative, in `alternatives` order.
    pub final_scores: Vec<f64>,
    pub criteria_consistency: ConsistencyMetrics,
    /// Consistency of each criterion's alternative matrix.
    pub alternative_consistency: HashMap<String, ConsistencyMetrics>,
    pub computed_at: Timestamp,
}

impl AnalysisResults {
    /// Returns consistency metrics for every matrix, criteria first,
    /// then each criterion in canonical order.
    pub fn consistency_by_matrix(&self) -> Vec<(MatrixKey, ConsistencyMetrics)> {
        std::iter::once((MatrixKey::Criteria, self.criteria_consistency))
            .chain(self.criteria.iter().filter_map(|criterion| {
                self.alternative_consistency
                    .get(criterion)
                    .map(|m| (MatrixKey::Alternatives(criterion.clone()), *m))
            }))
            .collect()
    }

    /// Returns matrices whose CR is at or above `threshold`.
    pub fn inconsistent_matrices(&self, threshold: f64) -> Vec<InconsistentMatrix> {
        self.consistency_by_matrix()
            .into_iter()
            .filter(|(_, metrics)| !metrics.is_acceptable(threshold))
            .map(|(matrix, metrics)| InconsistentMatrix {
                matrix,
                consistency_ratio: metrics.consistency_ratio,
            })
            .collect()
    }

    /// Returns true if every matrix has CR below `threshold`.
    pub fn is_consistent(&self, threshold: f64) -> bool {
        self.inconsistent_matrices(threshold).is_empty()
    }

    /// Returns alternatives sorted by descending final score.
    ///
    /// Ties keep the canonical alternative order. Alternatives and scores
    /// are paired positionally, so a length mismatch in stored results
    /// drops the unpaired entries instead of failing.
    pub fn ranking(&self) -> Vec<RankedAlternative> {
        let mut paired: Vec<(&String, f64)> = self
            .alternatives
            .iter()
            .zip(self.final_scores.iter().copied())
            .collect();
        paired.sort_by(|(_, a), (_, b)| b.total_cmp(a));

        paired
            .into_iter()
            .enumerate()
            .map(|(position, (alternative, score))| RankedAlternative {
                rank: position + 1,
                alternative: alternative.clone(),
                score,
            })
            .collect()
    }

    /// Returns the top-ranked alternative, if any.
    pub fn best_alternative(&self) -> Option<RankedAlternative> {
        self.ranking().into_iter().next()
    }
}

/// Runs the full AHP pipeline.
///
/// Weights and consistency are computed for the criteria matrix and for each
/// criterion's alternative matrix; the alternative weights are then
/// synthesized into final scores. The first malformed matrix aborts the run.
///
/// # Errors
/// - `MissingCriterion` if a criterion has no alternative matrix
/// - `DimensionMismatch` if a matrix size does not match its label list
/// - any error from weight estimation or consistency evaluation
pub fn calculate_all_results(
    criteria_matrix: &ComparisonMatrix,
    alternative_matrices: &HashMap<String, ComparisonMatrix>,
    criteria: &[String],
    alternatives: &[String],
) -> Result<AnalysisResults, AhpError> {
    if criteria_matrix.size() != criteria.len() {
        return Err(AhpError::dimension_mismatch(
            "criteria matrix",
            criteria.len(),
            criteria_matrix.size(),
        ));
    }

    let criteria_weights = WeightEstimator::estimate_weights(criteria_matrix)?;
    let criteria_consistency =
        ConsistencyEvaluator::evaluate_consistency(criteria_matrix, &criteria_weights)?;

    let mut alternative_weights = HashMap::with_capacity(criteria.len());
    let mut alternative_consistency = HashMap::with_capacity(criteria.len());

    for criterion in criteria {
        let matrix = alternative_matrices
            .get(criterion)
            .ok_or_else(|| AhpError::missing_criterion(criterion.clone()))?;

        if matrix.size() != alternatives.len() {
            return Err(AhpError::dimension_mismatch(
                format!("alternative matrix for '{}'", criterion),
                alternatives.len(),
                matrix.size(),
            ));
        }

        let weights = WeightEstimator::estimate_weights(matrix)?;
        let metrics = ConsistencyEvaluator::evaluate_consistency(matrix, &weights)?;

        alternative_weights.insert(criterion.clone(), weights);
        alternative_consistency.insert(criterion.clone(), metrics);
    }

    let final_scores =
        Aggregator::aggregate(&criteria_weights, &alternative_weights, criteria, alternatives)?;

    Ok(AnalysisResults {
        criteria: criteria.to_vec(),
        alternatives: alternatives.to_vec(),
        criteria_weights,
        alternative_weights,
        final_scores,
        criteria_consistency,
        alternative_consistency,
        computed_at: Timestamp::now(),
    })
}
