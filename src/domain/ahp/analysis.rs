//! Analysis aggregate - Criteria, alternatives, and their comparison matrices.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{calculate_all_results, AhpError, AnalysisResults, ComparisonMatrix};
use crate::domain::foundation::{AnalysisId, ValidationError};

/// Fewest criteria an analysis can be set up with.
pub const MIN_CRITERIA: usize = 2;

/// Fewest alternatives an analysis can be set up with.
pub const MIN_ALTERNATIVES: usize = 2;

/// Checks a criterion or alternative name and returns it trimmed.
///
/// # Errors
/// - `EmptyField` if the name is blank
/// - `Duplicate` if the trimmed name is already in `existing`
pub fn validate_name(
    field: &str,
    name: &str,
    existing: &[String],
) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    if existing.iter().any(|e| e == trimmed) {
        return Err(ValidationError::duplicate(field, trimmed));
    }
    Ok(trimmed.to_string())
}

fn validate_names(field: &str, names: Vec<String>, minimum: usize) -> Result<Vec<String>, ValidationError> {
    let mut accepted = Vec::with_capacity(names.len());
    for name in names {
        let valid = validate_name(field, &name, &accepted)?;
        accepted.push(valid);
    }
    if accepted.len() < minimum {
        return Err(ValidationError::invalid_format(
            field,
            format!("at least {} are required, got {}", minimum, accepted.len()),
        ));
    }
    Ok(accepted)
}

/// An AHP analysis session.
///
/// Matrices start with every entry at 1. Any change to a matrix discards
/// previously calculated results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    id: AnalysisId,
    name: String,
    description: Option<String>,
    criteria: Vec<String>,
    alternatives: Vec<String>,
    criteria_matrix: ComparisonMatrix,
    alternative_matrices: HashMap<String, ComparisonMatrix>,
    results: Option<AnalysisResults>,
}

impl Analysis {
    /// Creates a new analysis with all-ones matrices.
    ///
    /// # Errors
    /// - `Validation` if the name is blank, a criterion or alternative name
    ///   is blank or duplicated, or fewer than two of either are given
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        criteria: Vec<String>,
        alternatives: Vec<String>,
    ) -> Result<Self, AhpError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }

        let criteria = validate_names("criteria", criteria, MIN_CRITERIA)?;
        let alternatives = validate_names("alternatives", alternatives, MIN_ALTERNATIVES)?;

        let criteria_matrix = ComparisonMatrix::ones(criteria.len())?;
        let mut alternative_matrices = HashMap::with_capacity(criteria.len());
        for criterion in &criteria {
            alternative_matrices.insert(
                criterion.clone(),
                ComparisonMatrix::ones(alternatives.len())?,
            );
        }

        Ok(Self {
            id: AnalysisId::new(),
            name,
            description: description.filter(|d| !d.trim().is_empty()),
            criteria,
            alternatives,
            criteria_matrix,
            alternative_matrices,
            results: None,
        })
    }

    pub fn id(&self) -> &AnalysisId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn criteria_matrix(&self) -> &ComparisonMatrix {
        &self.criteria_matrix
    }

    /// Returns the alternative matrix for `criterion`.
    pub fn alternative_matrix(&self, criterion: &str) -> Option<&ComparisonMatrix> {
        self.alternative_matrices.get(criterion)
    }

    pub fn alternative_matrices(&self) -> &HashMap<String, ComparisonMatrix> {
        &self.alternative_matrices
    }

    /// Returns the last calculated results, if still current.
    pub fn results(&self) -> Option<&AnalysisResults> {
        self.results.as_ref()
    }

    /// Records that criterion `i` is `value` times as important as criterion `j`.
    pub fn set_criteria_judgment(&mut self, i: usize, j: usize, value: f64) -> Result<(), AhpError> {
        self.criteria_matrix.set_judgment(i, j, value)?;
        self.results = None;
        Ok(())
    }

    /// Records that, for `criterion`, alternative `i` is `value` times as
    /// preferable as alternative `j`.
    pub fn set_alternative_judgment(
        &mut self,
        criterion: &str,
        i: usize,
        j: usize,
        value: f64,
    ) -> Result<(), AhpError> {
        let matrix = self
            .alternative_matrices
            .get_mut(criterion)
            .ok_or_else(|| AhpError::missing_criterion(criterion))?;
        matrix.set_judgment(i, j, value)?;
        self.results = None;
        Ok(())
    }

    /// Replaces the criteria matrix with one sourced from outside the aggregate.
    ///
    /// # Errors
    /// - `DimensionMismatch` if the size differs from the criteria count
    /// - `InvalidMatrix` if the reciprocal check fails within `tolerance`
    pub fn replace_criteria_matrix(
        &mut self,
        matrix: ComparisonMatrix,
        tolerance: f64,
    ) -> Result<(), AhpError> {
        Self::check_imported(&matrix, self.criteria.len(), "criteria matrix", tolerance)?;
        self.criteria_matrix = matrix;
        self.results = None;
        Ok(())
    }

    /// Replaces one criterion's alternative matrix with an imported matrix.
    pub fn replace_alternative_matrix(
        &mut self,
        criterion: &str,
        matrix: ComparisonMatrix,
        tolerance: f64,
    ) -> Result<(), AhpError> {
        if !self.alternative_matrices.contains_key(criterion) {
            return Err(AhpError::missing_criterion(criterion));
        }
        Self::check_imported(
            &matrix,
            self.alternatives.len(),
            &format!("alternative matrix for '{}'", criterion),
            tolerance,
        )?;
        self.alternative_matrices.insert(criterion.to_string(), matrix);
        self.results = None;
        Ok(())
    }

    fn check_imported(
        matrix: &ComparisonMatrix,
        expected: usize,
        what: &str,
        tolerance: f64,
    ) -> Result<(), AhpError> {
        if matrix.size() != expected {
            return Err(AhpError::dimension_mismatch(what, expected, matrix.size()));
        }
        matrix.validate_reciprocal(tolerance)
    }

    /// Calculates weights, consistency, and final scores, and keeps them
    /// on the aggregate.
    pub fn calculate(&mut self) -> Result<&AnalysisResults, AhpError> {
        let results = calculate_all_results(
            &self.criteria_matrix,
            &self.alternative_matrices,
            &self.criteria,
            &self.alternatives,
        )?;
        Ok(self.results.insert(results))
    }
}

/// Serializable description of an analysis as supplied by callers
/// (for example a JSON or YAML file handed to the CLI).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisDocument {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub criteria: Vec<String>,
    pub alternatives: Vec<String>,
    /// Omitted means all criteria are equally important.
    #[serde(default)]
    pub criteria_matrix: Option<ComparisonMatrix>,
    /// Criteria without an entry keep the all-ones matrix.
    #[serde(default)]
    pub alternative_matrices: HashMap<String, ComparisonMatrix>,
}

impl AnalysisDocument {
    /// Builds an [`Analysis`], validating every supplied matrix against
    /// the reciprocal `tolerance`.
    pub fn into_analysis(self, tolerance: f64) -> Result<Analysis, AhpError> {
        let mut analysis = Analysis::new(
            self.name,
            self.description,
            self.criteria,
            self.alternatives,
        )?;

        if let Some(matrix) = self.criteria_matrix {
            analysis.replace_criteria_matrix(matrix, tolerance)?;
        }
        let mut matrices: HashMap<String, ComparisonMatrix> =
            HashMap::with_capacity(self.alternative_matrices.len());
        for (criterion, matrix) in self.alternative_matrices {
            let key = criterion.trim().to_string();
            if matrices.contains_key(&key) {
                return Err(ValidationError::duplicate("alternative_matrices", key).into());
            }
            matrices.insert(key, matrix);
        }

        let mut unknown: Vec<&String> = matrices
            .keys()
            .filter(|key| !analysis.criteria.contains(*key))
            .collect();
        unknown.sort();
        if let Some(criterion) = unknown.first() {
            return Err(AhpError::missing_criterion(criterion.as_str()));
        }

        // Applied in criteria order so the first reported error is stable.
        for criterion in analysis.criteria.clone() {
            if let Some(matrix) = matrices.remove(&criterion) {
                analysis.replace_alternative_matrix(&criterion, matrix, tolerance)?;
            }
        }

        Ok(analysis)
    }
}
