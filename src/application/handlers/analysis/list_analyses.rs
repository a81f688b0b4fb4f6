//! ListAnalysesHandler - Query handler for listing stored analyses.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::{AnalysisRepository, AnalysisSummary};

/// Query to list analyses.
#[derive(Debug, Clone, Default)]
pub struct ListAnalysesQuery {
    /// Only include analyses that have results.
    pub calculated_only: bool,
}

/// Handler for listing analyses, newest results first.
pub struct ListAnalysesHandler {
    repository: Arc<dyn AnalysisRepository>,
}

impl ListAnalysesHandler {
    pub fn new(repository: Arc<dyn AnalysisRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListAnalysesQuery) -> Result<Vec<AnalysisSummary>, DomainError> {
        let mut summaries = self.repository.list_summaries().await?;
        if query.calculated_only {
            summaries.retain(|s| s.computed_at.is_some());
        }
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryAnalysisStorage;
    use crate::domain::ahp::Analysis;

    fn test_analysis(name: &str) -> Analysis {
        Analysis::new(
            name,
            None,
            vec!["Price".to_string(), "Battery".to_string()],
            vec!["X1".to_string(), "M3".to_string()],
        )
        .unwrap()
    }

    async fn seeded_storage() -> Arc<InMemoryAnalysisStorage> {
        let storage = Arc::new(InMemoryAnalysisStorage::new());
        let mut calculated = test_analysis("Calculated");
        calculated.calculate().unwrap();
        storage.save(&calculated).await.unwrap();
        storage.save(&test_analysis("Draft")).await.unwrap();
        storage
    }

    #[tokio::test]
    async fn lists_all_analyses() {
        let handler = ListAnalysesHandler::new(seeded_storage().await);

        let summaries = handler.handle(ListAnalysesQuery::default()).await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "Calculated");
    }

    #[tokio::test]
    async fn filters_to_calculated_analyses() {
        let handler = ListAnalysesHandler::new(seeded_storage().await);

        let query = ListAnalysesQuery {
            calculated_only: true,
        };
        let summaries = handler.handle(query).await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].name, "Calculated");
    }

    #[tokio::test]
    async fn empty_repository_lists_nothing() {
        let storage = Arc::new(InMemoryAnalysisStorage::new());
        let handler = ListAnalysesHandler::new(storage);

        let summaries = handler.handle(ListAnalysesQuery::default()).await.unwrap();
        assert!(summaries.is_empty());
    }
}
