//! AHP Module - Analytic Hierarchy Process math engine.
//!
//! Pure, stateless functions that turn pairwise comparison matrices into
//! priority weights, consistency metrics, and synthesized scores.
//!
//! # Components
//!
//! - `ComparisonMatrix` - Square reciprocal matrix of pairwise judgments
//! - `WeightEstimator` - Column-normalize, row-average priority vectors
//! - `ConsistencyEvaluator` - λmax, CI, and CR against the random index table
//! - `Aggregator` - Additive synthesis of criteria and alternative weights
//! - `calculate_all_results` - The full pipeline for one analysis
//! - `Analysis` - Session aggregate holding criteria, alternatives, and matrices
//!
//! # Design Philosophy
//!
//! The numeric core takes every input as an argument and returns new values.
//! It never reads or writes storage; inconsistent judgments are reported as
//! data, not errors.

mod aggregator;
mod analysis;
mod comparison_matrix;
mod consistency;
mod errors;
mod formatting;
mod synthesis;
mod weight_estimator;

pub use aggregator::Aggregator;
pub use analysis::{validate_name, Analysis, AnalysisDocument, MIN_ALTERNATIVES, MIN_CRITERIA};
pub use comparison_matrix::{ComparisonMatrix, ComparisonMatrixBuilder, RECIPROCAL_TOLERANCE};
pub use consistency::{
    random_index, ConsistencyEvaluator, ConsistencyMetrics, CONSISTENCY_ACCEPTABLE_THRESHOLD,
    RANDOM_INDEX, ZERO_WEIGHT_EPSILON,
};
pub use errors::AhpError;
pub use formatting::{
    format_decimal, format_percentage, DEFAULT_DECIMAL_PLACES, DEFAULT_PERCENTAGE_PLACES,
};
pub use synthesis::{
    calculate_all_results, AnalysisResults, InconsistentMatrix, MatrixKey, RankedAlternative,
};
pub use weight_estimator::{WeightEstimator, WeightVector};
