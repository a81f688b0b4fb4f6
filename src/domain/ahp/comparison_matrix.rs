//! Comparison Matrix - Square table of pairwise importance judgments.

use serde::{Deserialize, Serialize};

use super::AhpError;

/// Tolerance for `M[i][j] * M[j][i] == 1` when validating external input.
pub const RECIPROCAL_TOLERANCE: f64 = 0.01;

/// A square matrix of strictly positive pairwise judgments.
///
/// Construction guarantees the matrix is non-empty, square, and holds only
/// finite positive entries. The reciprocal property is guaranteed when the
/// matrix is built through [`ComparisonMatrix::set_judgment`] or the builder;
/// matrices imported from elsewhere are checked with
/// [`ComparisonMatrix::validate_reciprocal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct ComparisonMatrix {
    rows: Vec<Vec<f64>>,
}

impl ComparisonMatrix {
    /// Creates an n×n matrix with every entry set to 1 (all items equally important).
    pub fn ones(size: usize) -> Result<Self, AhpError> {
        if size == 0 {
            return Err(AhpError::invalid_matrix("matrix must have at least one row"));
        }
        Ok(Self {
            rows: vec![vec![1.0; size]; size],
        })
    }

    /// Creates a matrix from rows, checking shape and entry positivity.
    ///
    /// Does not check the reciprocal property.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, AhpError> {
        let n = rows.len();
        if n == 0 {
            return Err(AhpError::invalid_matrix("matrix must have at least one row"));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(AhpError::invalid_matrix(format!(
                    "matrix must be square: row {} has {} entries, expected {}",
                    i + 1,
                    row.len(),
                    n
                )));
            }
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() || value <= 0.0 {
                    return Err(AhpError::invalid_matrix(format!(
                        "entry ({},{}) must be a positive number, got {}",
                        i + 1,
                        j + 1,
                        value
                    )));
                }
            }
        }

        Ok(Self { rows })
    }

    /// Creates a builder for an n×n matrix starting from all ones.
    pub fn builder(size: usize) -> ComparisonMatrixBuilder {
        ComparisonMatrixBuilder::new(size)
    }

    /// Returns the dimension n.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns the entry at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.rows.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Returns the rows in order.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Records that item `i` is `value` times as important as item `j`.
    ///
    /// Writes the pair `M[i][j] = value` and `M[j][i] = 1 / value`.
    pub fn set_judgment(&mut self, i: usize, j: usize, value: f64) -> Result<(), AhpError> {
        let n = self.size();
        if i >= n || j >= n {
            return Err(AhpError::invalid_matrix(format!(
                "cell ({},{}) is outside a {}x{} matrix",
                i + 1,
                j + 1,
                n,
                n
            )));
        }
        if i == j {
            return Err(AhpError::invalid_matrix(
                "diagonal entries are fixed at 1",
            ));
        }
        if !value.is_finite() || value <= 0.0 {
            return Err(AhpError::invalid_matrix(format!(
                "judgment must be a positive number, got {}",
                value
            )));
        }

        self.rows[i][j] = value;
        self.rows[j][i] = 1.0 / value;
        Ok(())
    }

    /// Checks the diagonal is 1 and `M[i][j] * M[j][i]` is within `tolerance` of 1.
    pub fn validate_reciprocal(&self, tolerance: f64) -> Result<(), AhpError> {
        let n = self.size();
        for i in 0..n {
            let diagonal = self.rows[i][i];
            if (diagonal - 1.0).abs() > tolerance {
                return Err(AhpError::invalid_matrix(format!(
                    "diagonal entry ({},{}) must be 1, got {:.3}",
                    i + 1,
                    i + 1,
                    diagonal
                )));
            }
            for j in (i + 1)..n {
                let upper = self.rows[i][j];
                let lower = self.rows[j][i];
                if (upper * lower - 1.0).abs() > tolerance {
                    return Err(AhpError::invalid_matrix(format!(
                        "cells ({},{}) and ({},{}) are not reciprocal: {:.3} and {:.3}",
                        i + 1,
                        j + 1,
                        j + 1,
                        i + 1,
                        upper,
                        lower
                    )));
                }
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<f64>>> for ComparisonMatrix {
    type Error = AhpError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<ComparisonMatrix> for Vec<Vec<f64>> {
    fn from(matrix: ComparisonMatrix) -> Self {
        matrix.rows
    }
}

/// Builder for constructing reciprocal ComparisonMatrix instances.
#[derive(Debug)]
pub struct ComparisonMatrixBuilder {
    size: usize,
    judgments: Vec<(usize, usize, f64)>,
}

impl ComparisonMatrixBuilder {
    /// Creates a new builder for an n×n matrix.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            judgments: Vec::new(),
        }
    }

    /// Adds a judgment: item `i` is `value` times as important as item `j`.
    pub fn judgment(mut self, i: usize, j: usize, value: f64) -> Self {
        self.judgments.push((i, j, value));
        self
    }

    /// Builds the matrix, applying judgments in insertion order.
    pub fn build(self) -> Result<ComparisonMatrix, AhpError> {
        let mut matrix = ComparisonMatrix::ones(self.size)?;
        for (i, j, value) in self.judgments {
            matrix.set_judgment(i, j, value)?;
        }
        Ok(matrix)
    }
}
