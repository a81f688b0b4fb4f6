//! GetAnalysisHandler - Query handler for retrieving a stored analysis.

use std::sync::Arc;

use crate::domain::ahp::Analysis;
use crate::domain::foundation::{AnalysisId, DomainError, ErrorCode};
use crate::ports::AnalysisRepository;

/// Query to get an analysis by ID.
#[derive(Debug, Clone)]
pub struct GetAnalysisQuery {
    pub analysis_id: AnalysisId,
}

/// Handler for retrieving analyses.
pub struct GetAnalysisHandler {
    repository: Arc<dyn AnalysisRepository>,
}

impl GetAnalysisHandler {
    pub fn new(repository: Arc<dyn AnalysisRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetAnalysisQuery) -> Result<Analysis, DomainError> {
        self.repository
            .find_by_id(&query.analysis_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::AnalysisNotFound,
                    format!("Analysis not found: {}", query.analysis_id),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryAnalysisStorage;

    fn test_analysis() -> Analysis {
        Analysis::new(
            "Laptop",
            None,
            vec!["Price".to_string(), "Battery".to_string()],
            vec!["X1".to_string(), "M3".to_string()],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn returns_stored_analysis() {
        let storage = Arc::new(InMemoryAnalysisStorage::new());
        let analysis = test_analysis();
        storage.save(&analysis).await.unwrap();

        let handler = GetAnalysisHandler::new(storage);
        let query = GetAnalysisQuery {
            analysis_id: *analysis.id(),
        };

        let found = handler.handle(query).await.unwrap();
        assert_eq!(found.name(), "Laptop");
    }

    #[tokio::test]
    async fn returns_not_found_when_analysis_does_not_exist() {
        let storage = Arc::new(InMemoryAnalysisStorage::new());
        let handler = GetAnalysisHandler::new(storage);

        let query = GetAnalysisQuery {
            analysis_id: AnalysisId::new(),
        };

        let err = handler.handle(query).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AnalysisNotFound);
    }
}
