//! Weight Estimator - Priority vectors from comparison matrices.

use serde::{Deserialize, Serialize};

use super::{AhpError, ComparisonMatrix};

/// Allowed drift from 1.0 when accepting an already normalized vector.
const SUM_TOLERANCE: f64 = 1e-9;

/// Normalized priority weights, one per matrix row, summing to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Scales non-negative values so they sum to 1.0.
    ///
    /// # Errors
    /// `ComputationError` if the input is empty, contains negative or
    /// non-finite values, or sums to zero.
    pub fn normalized(values: Vec<f64>) -> Result<Self, AhpError> {
        Self::check_entries(&values)?;

        let total: f64 = values.iter().sum();
        if total <= 0.0 || !total.is_finite() {
            return Err(AhpError::computation("weights sum to zero"));
        }

        Ok(Self(values.into_iter().map(|v| v / total).collect()))
    }

    fn check_entries(values: &[f64]) -> Result<(), AhpError> {
        if values.is_empty() {
            return Err(AhpError::computation("weight vector is empty"));
        }
        if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(AhpError::computation(
                "weights must be finite and non-negative",
            ));
        }
        Ok(())
    }

    /// Returns the weights in row order.
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Returns the weight at position `i`.
    pub fn get(&self, i: usize) -> Option<f64> {
        self.0.get(i).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.0.iter()
    }
}

/// Accepts stored weights as they are; they must already sum to 1.0.
impl TryFrom<Vec<f64>> for WeightVector {
    type Error = AhpError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::check_entries(&values)?;

        let total: f64 = values.iter().sum();
        if (total - 1.0).abs() > SUM_TOLERANCE {
            return Err(AhpError::computation(format!(
                "weights sum to {} instead of 1",
                total
            )));
        }
        Ok(Self(values))
    }
}

impl From<WeightVector> for Vec<f64> {
    fn from(weights: WeightVector) -> Self {
        weights.0
    }
}

/// Derives priority weights from comparison matrices.
pub struct WeightEstimator;

impl WeightEstimator {
    /// Estimates the principal eigenvector of a comparison matrix.
    ///
    /// # Algorithm
    /// 1. Divide every entry by its column sum.
    /// 2. Average each row of the normalized matrix.
    /// 3. Divide by the total so the result sums to exactly 1.0.
    ///
    /// Deterministic and O(n²); there is no convergence loop.
    ///
    /// # Errors
    /// `InvalidMatrix` if a column sum overflows to infinity.
    pub fn estimate_weights(matrix: &ComparisonMatrix) -> Result<WeightVector, AhpError> {
        let n = matrix.size();
        let rows = matrix.rows();

        let column_sums: Vec<f64> = (0..n)
            .map(|j| rows.iter().map(|row| row[j]).sum())
            .collect();

        if let Some(j) = column_sums.iter().position(|s| !s.is_finite() || *s <= 0.0) {
            return Err(AhpError::invalid_matrix(format!(
                "column {} does not have a finite positive sum",
                j + 1
            )));
        }

        let row_means: Vec<f64> = rows
            .iter()
            .map(|row| {
                let normalized_sum: f64 = row
                    .iter()
                    .zip(&column_sums)
                    .map(|(value, column_sum)| value / column_sum)
                    .sum();
                normalized_sum / n as f64
            })
            .collect();

        WeightVector::normalized(row_means)
    }
}
