//! Analysis command and query handlers.

mod calculate_results;
mod get_analysis;
mod list_analyses;

pub use calculate_results::{
    AnalysisSource, CalculateResultsCommand, CalculateResultsHandler, CalculateResultsResult,
};
pub use get_analysis::{GetAnalysisHandler, GetAnalysisQuery};
pub use list_analyses::{ListAnalysesHandler, ListAnalysesQuery};
