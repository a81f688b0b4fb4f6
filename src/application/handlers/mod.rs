//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analysis;

pub use analysis::{
    // Commands
    AnalysisSource, CalculateResultsCommand, CalculateResultsHandler, CalculateResultsResult,
    // Queries
    GetAnalysisHandler, GetAnalysisQuery, ListAnalysesHandler, ListAnalysesQuery,
};
