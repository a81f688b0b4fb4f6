//! CalculateResultsHandler - Command handler for the "calculate results" run.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::domain::ahp::{
    Analysis, AnalysisDocument, AnalysisResults, InconsistentMatrix, RankedAlternative,
};
use crate::domain::foundation::{AnalysisId, DomainError, ErrorCode};
use crate::ports::AnalysisRepository;

/// What to calculate.
#[derive(Debug, Clone)]
pub enum AnalysisSource {
    /// A new analysis described by a caller-supplied document.
    Document(AnalysisDocument),
    /// An analysis already in the repository.
    Stored(AnalysisId),
}

/// Command to calculate and store the results of an analysis.
#[derive(Debug, Clone)]
pub struct CalculateResultsCommand {
    pub source: AnalysisSource,
}

/// Result of a successful calculation.
#[derive(Debug, Clone)]
pub struct CalculateResultsResult {
    pub analysis: Analysis,
    pub results: AnalysisResults,
    pub ranking: Vec<RankedAlternative>,
    /// Matrices at or above the configured consistency threshold.
    pub inconsistent_matrices: Vec<InconsistentMatrix>,
}

impl CalculateResultsResult {
    pub fn is_consistent(&self) -> bool {
        self.inconsistent_matrices.is_empty()
    }
}

/// Handler for calculating analysis results.
pub struct CalculateResultsHandler {
    repository: Arc<dyn AnalysisRepository>,
    engine: EngineConfig,
}

impl CalculateResultsHandler {
    pub fn new(repository: Arc<dyn AnalysisRepository>, engine: EngineConfig) -> Self {
        Self { repository, engine }
    }

    pub async fn handle(
        &self,
        cmd: CalculateResultsCommand,
    ) -> Result<CalculateResultsResult, DomainError> {
        // 1. Resolve the analysis
        let mut analysis = match cmd.source {
            AnalysisSource::Document(document) => {
                document.into_analysis(self.engine.reciprocal_tolerance)?
            }
            AnalysisSource::Stored(id) => self
                .repository
                .find_by_id(&id)
                .await?
                .ok_or_else(|| {
                    DomainError::new(ErrorCode::AnalysisNotFound, format!("Analysis not found: {}", id))
                })?,
        };

        // 2. Run the math engine
        let results = analysis.calculate()?.clone();
        let inconsistent_matrices = results.inconsistent_matrices(self.engine.consistency_threshold);

        for matrix in &inconsistent_matrices {
            warn!(
                analysis_id = %analysis.id(),
                matrix = %matrix.matrix,
                consistency_ratio = matrix.consistency_ratio,
                threshold = self.engine.consistency_threshold,
                "Judgments are inconsistent"
            );
        }

        // 3. Persist analysis with its results
        self.repository.save(&analysis).await?;

        let ranking = results.ranking();
        info!(
            analysis_id = %analysis.id(),
            criteria = analysis.criteria().len(),
            alternatives = analysis.alternatives().len(),
            best = ranking.first().map(|r| r.alternative.as_str()).unwrap_or_default(),
            "Analysis results calculated"
        );

        Ok(CalculateResultsResult {
            analysis,
            results,
            ranking,
            inconsistent_matrices,
        })
    }
}
