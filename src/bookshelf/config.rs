use crate::error::{LibraryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_STORE_PATH: &str = "library_information.csv";
const DEFAULT_PAGE_SIZE: usize = 5;

/// Settings supplied at construction to the API and the navigation loop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibraryConfig {
    /// Path of the catalog CSV file
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// Books shown per page when listing
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl LibraryConfig {
    /// Load config from a JSON file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: LibraryConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(LibraryError::Store(
                "page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
