//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the AHP domain.

mod errors;
mod ids;
mod saaty_scale;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::AnalysisId;
pub use saaty_scale::{saaty_description, Language, SaatyScale};
pub use timestamp::Timestamp;
