//! File-based Analysis Storage Adapter
//!
//! Stores each analysis, with its latest results, as one YAML file on disk
//! named after the analysis id.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::ahp::Analysis;
use crate::domain::foundation::{AnalysisId, DomainError, ErrorCode};
use crate::ports::{sort_newest_first, AnalysisRepository, AnalysisSummary};

const FILE_EXTENSION: &str = "yaml";

fn io_error(context: &str, path: &Path, err: std::io::Error) -> DomainError {
    DomainError::new(ErrorCode::StorageError, format!("{}: {}", context, err))
        .with_detail("path", path.display().to_string())
}

/// File-based storage for analyses
#[derive(Debug, Clone)]
pub struct FileAnalysisStorage {
    base_path: PathBuf,
}

impl FileAnalysisStorage {
    /// Create a new file storage with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileAnalysisStorage::new("./data/analyses");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn analysis_file_path(&self, id: &AnalysisId) -> PathBuf {
        self.base_path.join(format!("{}.{}", id, FILE_EXTENSION))
    }

    async fn ensure_dir(&self) -> Result<(), DomainError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| io_error("Failed to create storage directory", &self.base_path, e))
    }

    async fn read_analysis(&self, path: &Path) -> Result<Analysis, DomainError> {
        let yaml = fs::read_to_string(path)
            .await
            .map_err(|e| io_error("Failed to read analysis", path, e))?;

        serde_yaml::from_str(&yaml).map_err(|e| {
            DomainError::new(
                ErrorCode::StorageError,
                format!("Failed to deserialize analysis: {}", e),
            )
            .with_detail("path", path.display().to_string())
        })
    }
}

#[async_trait]
impl AnalysisRepository for FileAnalysisStorage {
    async fn save(&self, analysis: &Analysis) -> Result<(), DomainError> {
        self.ensure_dir().await?;

        let file_path = self.analysis_file_path(analysis.id());

        let yaml = serde_yaml::to_string(analysis).map_err(|e| {
            DomainError::new(
                ErrorCode::StorageError,
                format!("Failed to serialize analysis: {}", e),
            )
        })?;

        fs::write(&file_path, yaml)
            .await
            .map_err(|e| io_error("Failed to write analysis", &file_path, e))?;

        debug!(analysis_id = %analysis.id(), path = %file_path.display(), "Analysis saved");
        Ok(())
    }

    async fn find_by_id(&self, id: &AnalysisId) -> Result<Option<Analysis>, DomainError> {
        let file_path = self.analysis_file_path(id);

        if !file_path.exists() {
            return Ok(None);
        }

        self.read_analysis(&file_path).await.map(Some)
    }

    async fn list_summaries(&self) -> Result<Vec<AnalysisSummary>, DomainError> {
        if !self.base_path.exists() {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.base_path)
            .await
            .map_err(|e| io_error("Failed to list analyses", &self.base_path, e))?;

        let mut summaries = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| io_error("Failed to list analyses", &self.base_path, e))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(FILE_EXTENSION) {
                continue;
            }

            // An unreadable file must not hide the rest of the listing.
            match self.read_analysis(&path).await {
                Ok(analysis) => summaries.push(AnalysisSummary::of(&analysis)),
                Err(err) => warn!(path = %path.display(), error = %err, "Skipping unreadable analysis file"),
            }
        }

        sort_newest_first(&mut summaries);
        Ok(summaries)
    }

    async fn delete(&self, id: &AnalysisId) -> Result<(), DomainError> {
        let file_path = self.analysis_file_path(id);

        if !file_path.exists() {
            return Err(DomainError::new(
                ErrorCode::AnalysisNotFound,
                format!("Analysis not found: {}", id),
            ));
        }

        fs::remove_file(&file_path)
            .await
            .map_err(|e| io_error("Failed to delete analysis", &file_path, e))?;

        debug!(analysis_id = %id, "Analysis deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_analysis(name: &str) -> Analysis {
        Analysis::new(
            name,
            Some("Test analysis".to_string()),
            vec!["Cost".to_string(), "Quality".to_string()],
            vec!["A".to_string(), "B".to_string()],
        )
        .unwrap()
    }

    fn setup() -> (TempDir, FileAnalysisStorage) {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileAnalysisStorage::new(temp_dir.path().join("analyses"));
        (temp_dir, storage)
    }

    #[tokio::test]
    async fn test_file_storage_save_and_find() {
        let (_temp, storage) = setup();
        let mut analysis = test_analysis("Car");
        analysis.set_criteria_judgment(0, 1, 3.0).unwrap();
        analysis.calculate().unwrap();

        storage.save(&analysis).await.unwrap();
        let loaded = storage.find_by_id(analysis.id()).await.unwrap();

        assert_eq!(loaded, Some(analysis));
    }

    #[tokio::test]
    async fn test_file_storage_creates_yaml_file() {
        let (_temp, storage) = setup();
        let analysis = test_analysis("Car");

        storage.save(&analysis).await.unwrap();

        let path = storage
            .base_path()
            .join(format!("{}.yaml", analysis.id()));
        assert!(path.exists());
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.contains("name: Car"));
    }

    #[tokio::test]
    async fn test_file_storage_find_missing_returns_none() {
        let (_temp, storage) = setup();
        let loaded = storage.find_by_id(&AnalysisId::new()).await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_file_storage_list_empty_when_directory_missing() {
        let (_temp, storage) = setup();
        let summaries = storage.list_summaries().await.unwrap();
        assert!(summaries.is_empty());
    }

    #[tokio::test]
    async fn test_file_storage_list_skips_foreign_and_corrupt_files() {
        let (_temp, storage) = setup();
        let analysis = test_analysis("Car");
        storage.save(&analysis).await.unwrap();

        std::fs::write(storage.base_path().join("notes.txt"), "ignore me").unwrap();
        std::fs::write(storage.base_path().join("broken.yaml"), "{{ not yaml").unwrap();

        let summaries = storage.list_summaries().await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].id, *analysis.id());
    }

    #[tokio::test]
    async fn test_file_storage_find_corrupt_file_is_storage_error() {
        let (_temp, storage) = setup();
        let id = AnalysisId::new();
        std::fs::create_dir_all(storage.base_path()).unwrap();
        std::fs::write(storage.base_path().join(format!("{}.yaml", id)), "name: [").unwrap();

        let err = storage.find_by_id(&id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
    }

    #[tokio::test]
    async fn test_file_storage_delete() {
        let (_temp, storage) = setup();
        let analysis = test_analysis("Car");
        storage.save(&analysis).await.unwrap();

        storage.delete(analysis.id()).await.unwrap();
        assert!(storage.find_by_id(analysis.id()).await.unwrap().is_none());

        let err = storage.delete(analysis.id()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AnalysisNotFound);
    }
}
