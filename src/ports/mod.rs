//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `AnalysisRepository` - Stores analyses and their calculated results

mod analysis_repository;

pub use analysis_repository::{sort_newest_first, AnalysisRepository, AnalysisSummary};
