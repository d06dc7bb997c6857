use crate::config::RuntimeConfig;
use crate::domain::model::Platform;
use crate::utils::error::{PaydialError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// TOML config file. Every field is optional; anything unset falls back to
/// the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub platform: Option<Platform>,
    pub country_code_digits: Option<usize>,
    pub storage_path: Option<PathBuf>,
    pub contacts_file: Option<PathBuf>,
}

impl FileConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PaydialError::ConfigError {
            message: format!("cannot read config file {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PaydialError::ConfigError {
            message: format!("invalid config file: {}", e),
        })
    }

    pub fn into_runtime(self) -> RuntimeConfig {
        let defaults = RuntimeConfig::default();
        RuntimeConfig {
            platform: self.platform.unwrap_or(defaults.platform),
            country_code_digits: self
                .country_code_digits
                .unwrap_or(defaults.country_code_digits),
            storage_path: self.storage_path.unwrap_or(defaults.storage_path),
            contacts_file: self.contacts_file.unwrap_or(defaults.contacts_file),
        }
    }
}
