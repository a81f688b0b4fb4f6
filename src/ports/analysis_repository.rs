//! Analysis repository port.
//!
//! Defines the contract for persisting analyses together with their
//! calculated results, keyed by analysis id. The math engine never touches
//! this port; handlers in the application layer do.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::ahp::Analysis;
use crate::domain::foundation::{AnalysisId, DomainError, Timestamp};

/// Listing entry for a stored analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub id: AnalysisId,
    pub name: String,
    /// When results were last calculated; `None` if never calculated.
    pub computed_at: Option<Timestamp>,
}

impl AnalysisSummary {
    pub fn of(analysis: &Analysis) -> Self {
        Self {
            id: *analysis.id(),
            name: analysis.name().to_string(),
            computed_at: analysis.results().map(|r| r.computed_at),
        }
    }
}

/// Orders summaries newest first; never-calculated analyses go last.
pub fn sort_newest_first(summaries: &mut [AnalysisSummary]) {
    summaries.sort_by(|a, b| b.computed_at.cmp(&a.computed_at));
}

/// Repository port for Analysis persistence.
#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    /// Save an analysis, replacing any stored version with the same id.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, analysis: &Analysis) -> Result<(), DomainError>;

    /// Find an analysis by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &AnalysisId) -> Result<Option<Analysis>, DomainError>;

    /// List all stored analyses, most recently calculated first.
    async fn list_summaries(&self) -> Result<Vec<AnalysisSummary>, DomainError>;

    /// Delete an analysis.
    ///
    /// # Errors
    ///
    /// - `AnalysisNotFound` if the analysis doesn't exist
    /// - `StorageError` on persistence failure
    async fn delete(&self, id: &AnalysisId) -> Result<(), DomainError>;
}
