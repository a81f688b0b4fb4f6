//! Aggregator - Additive synthesis of criteria and alternative weights.

use std::collections::HashMap;

use super::{AhpError, WeightVector};

/// Additive AHP synthesis.
pub struct Aggregator;

impl Aggregator {
    /// Combines criteria weights with per-criterion alternative weights.
    ///
    /// # Algorithm
    /// For each alternative: score[a] = Σ(criteria_weights[i] × alt_weight_i[a]),
    /// accumulated in `criteria` order starting from zero.
    ///
    /// # Errors
    /// - `DimensionMismatch` if `criteria_weights` does not match `criteria`,
    ///   or an alternative vector does not match `alternatives`
    /// - `MissingCriterion` if a criterion has no alternative weights
    pub fn aggregate(
        criteria_weights: &WeightVector,
        alternative_weights_by_criterion: &HashMap<String, WeightVector>,
        criteria: &[String],
        alternatives: &[String],
    ) -> Result<Vec<f64>, AhpError> {
        if criteria_weights.len() != criteria.len() {
            return Err(AhpError::dimension_mismatch(
                "criteria weights",
                criteria.len(),
                criteria_weights.len(),
            ));
        }

        let mut scores = vec![0.0; alternatives.len()];

        for (criterion, criterion_weight) in criteria.iter().zip(criteria_weights.iter()) {
            let alt_weights = alternative_weights_by_criterion
                .get(criterion)
                .ok_or_else(|| AhpError::missing_criterion(criterion.clone()))?;

            if alt_weights.len() != alternatives.len() {
                return Err(AhpError::dimension_mismatch(
                    format!("alternative weights for '{}'", criterion),
                    alternatives.len(),
                    alt_weights.len(),
                ));
            }

            for (score, alt_weight) in scores.iter_mut().zip(alt_weights.iter()) {
                *score += criterion_weight * alt_weight;
            }
        }

        Ok(scores)
    }
}
