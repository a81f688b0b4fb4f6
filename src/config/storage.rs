//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where analyses are persisted
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// Directory holding one YAML file per analysis
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_dir"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data/analyses")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("./data/analyses"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_data_dir_is_rejected() {
        let config = StorageConfig {
            data_dir: PathBuf::new(),
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("storage.data_dir"))
        );
    }
}
