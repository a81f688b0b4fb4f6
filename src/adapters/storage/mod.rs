//! Storage Adapters
//!
//! Implementations of the AnalysisRepository port.
//!
//! ## Available Adapters
//!
//! - **FileAnalysisStorage** - Stores analyses as YAML files on disk
//! - **InMemoryAnalysisStorage** - Stores analyses in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileAnalysisStorage, InMemoryAnalysisStorage};
//!
//! // Production: file-based storage
//! let storage = FileAnalysisStorage::new("./data/analyses");
//!
//! // Testing: in-memory storage
//! let storage = InMemoryAnalysisStorage::new();
//! ```

mod file_analysis_storage;
mod in_memory_analysis_storage;

pub use file_analysis_storage::FileAnalysisStorage;
pub use in_memory_analysis_storage::InMemoryAnalysisStorage;
