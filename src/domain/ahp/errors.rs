//! AHP-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised by the AHP engine.
///
/// An inconsistent matrix (CR at or above the threshold) is not an error;
/// it is reported through `ConsistencyMetrics`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AhpError {
    /// Matrix is empty, non-square, has non-positive or non-finite entries,
    /// or violates the reciprocal property.
    #[error("Invalid matrix: {0}")]
    InvalidMatrix(String),

    /// A numeric step could not be completed without producing NaN or infinity.
    #[error("Computation error: {0}")]
    ComputationError(String),

    /// Two inputs that must agree in length do not.
    #[error("Dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    /// A criterion has no alternative weights or matrix.
    #[error("No entry for criterion '{0}'")]
    MissingCriterion(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl AhpError {
    pub fn invalid_matrix(reason: impl Into<String>) -> Self {
        AhpError::InvalidMatrix(reason.into())
    }

    pub fn computation(reason: impl Into<String>) -> Self {
        AhpError::ComputationError(reason.into())
    }

    pub fn dimension_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        AhpError::DimensionMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }

    pub fn missing_criterion(name: impl Into<String>) -> Self {
        AhpError::MissingCriterion(name.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AhpError::InvalidMatrix(_) => ErrorCode::InvalidMatrix,
            AhpError::ComputationError(_) => ErrorCode::ComputationFailed,
            AhpError::DimensionMismatch { .. } => ErrorCode::DimensionMismatch,
            AhpError::MissingCriterion(_) => ErrorCode::CriterionNotFound,
            AhpError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }
}

impl From<AhpError> for DomainError {
    fn from(err: AhpError) -> Self {
        match err {
            AhpError::Validation(inner) => inner.into(),
            other => DomainError::new(other.code(), other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_matrix_displays_reason() {
        let err = AhpError::invalid_matrix("matrix must be square");
        assert_eq!(err.to_string(), "Invalid matrix: matrix must be square");
        assert_eq!(err.code(), ErrorCode::InvalidMatrix);
    }

    #[test]
    fn dimension_mismatch_displays_sizes() {
        let err = AhpError::dimension_mismatch("criteria weights", 3, 2);
        assert_eq!(
            err.to_string(),
            "Dimension mismatch for criteria weights: expected 3, got 2"
        );
    }

    #[test]
    fn converts_into_domain_error_with_code() {
        let err: DomainError = AhpError::computation("weight 0 is zero").into();
        assert_eq!(err.code, ErrorCode::ComputationFailed);
        assert!(err.message.contains("weight 0 is zero"));
    }

    #[test]
    fn validation_errors_keep_their_own_code() {
        let err: DomainError = AhpError::from(ValidationError::empty_field("criterion")).into();
        assert_eq!(err.code, ErrorCode::EmptyField);
    }
}
