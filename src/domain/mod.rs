//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `ahp` - Pairwise comparison math, consistency checks, synthesis, analysis aggregate

pub mod ahp;
pub mod foundation;
