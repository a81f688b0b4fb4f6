//! Calculation engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ahp::{CONSISTENCY_ACCEPTABLE_THRESHOLD, RECIPROCAL_TOLERANCE};

/// Numeric settings applied around the AHP core
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Matrices with a consistency ratio at or above this are flagged
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,

    /// Allowed deviation of `M[i][j] * M[j][i]` from 1 for imported matrices
    #[serde(default = "default_reciprocal_tolerance")]
    pub reciprocal_tolerance: f64,
}

impl EngineConfig {
    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.consistency_threshold > 0.0 && self.consistency_threshold <= 1.0) {
            return Err(ValidationError::InvalidThreshold(self.consistency_threshold));
        }
        if !(self.reciprocal_tolerance >= 0.0 && self.reciprocal_tolerance < 1.0) {
            return Err(ValidationError::InvalidTolerance(self.reciprocal_tolerance));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            consistency_threshold: default_consistency_threshold(),
            reciprocal_tolerance: default_reciprocal_tolerance(),
        }
    }
}

fn default_consistency_threshold() -> f64 {
    CONSISTENCY_ACCEPTABLE_THRESHOLD
}

fn default_reciprocal_tolerance() -> f64 {
    RECIPROCAL_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.consistency_threshold, 0.1);
        assert_eq!(config.reciprocal_tolerance, 0.01);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_threshold() {
        let config = EngineConfig {
            consistency_threshold: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidThreshold(0.0)));
    }

    #[test]
    fn test_rejects_nan_threshold() {
        let config = EngineConfig {
            consistency_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_rejects_negative_tolerance() {
        let config = EngineConfig {
            reciprocal_tolerance: -0.5,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTolerance(-0.5)));
    }

    #[test]
    fn test_accepts_exact_reciprocity() {
        let config = EngineConfig {
            reciprocal_tolerance: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
