//! In-Memory Analysis Storage Adapter
//!
//! Stores analyses in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::ahp::Analysis;
use crate::domain::foundation::{AnalysisId, DomainError, ErrorCode};
use crate::ports::{sort_newest_first, AnalysisRepository, AnalysisSummary};

/// In-memory storage for analyses
#[derive(Debug, Clone, Default)]
pub struct InMemoryAnalysisStorage {
    analyses: Arc<RwLock<HashMap<AnalysisId, Analysis>>>,
}

impl InMemoryAnalysisStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored analyses
    pub async fn count(&self) -> usize {
        self.analyses.read().await.len()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.analyses.write().await.clear();
    }
}

#[async_trait]
impl AnalysisRepository for InMemoryAnalysisStorage {
    async fn save(&self, analysis: &Analysis) -> Result<(), DomainError> {
        let mut analyses = self.analyses.write().await;
        analyses.insert(*analysis.id(), analysis.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &AnalysisId) -> Result<Option<Analysis>, DomainError> {
        let analyses = self.analyses.read().await;
        Ok(analyses.get(id).cloned())
    }

    async fn list_summaries(&self) -> Result<Vec<AnalysisSummary>, DomainError> {
        let analyses = self.analyses.read().await;
        let mut summaries: Vec<_> = analyses.values().map(AnalysisSummary::of).collect();
        sort_newest_first(&mut summaries);
        Ok(summaries)
    }

    async fn delete(&self, id: &AnalysisId) -> Result<(), DomainError> {
        let mut analyses = self.analyses.write().await;
        analyses.remove(id).map(|_| ()).ok_or_else(|| {
            DomainError::new(ErrorCode::AnalysisNotFound, format!("Analysis not found: {}", id))
        })
    }
}
