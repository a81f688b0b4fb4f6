//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Analysis persistence (YAML files, in-memory)

pub mod storage;

pub use storage::{FileAnalysisStorage, InMemoryAnalysisStorage};
