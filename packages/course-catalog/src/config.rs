//! Catalog configuration.
//!
//! Read from an optional YAML file, then overridden by command-line flags.
//!
//! ```yaml
//! bucket_count: 20
//! delimiter: ","
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::index::DEFAULT_BUCKET_COUNT;

/// Field separator used when none is configured.
pub const DEFAULT_DELIMITER: char = ',';

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Number of hash buckets in the course index. Fixed for the session.
    pub bucket_count: usize,
    /// Field separator of the course file.
    pub delimiter: char,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl CatalogConfig {
    /// Load and validate a YAML config file. Missing keys take defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty document deserializes as null, not as an empty mapping.
        let config: Self = if text.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(text)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.bucket_count == 0 {
            return Err(CatalogError::InvalidConfig(
                "bucket_count must be at least 1".into(),
            ));
        }
        if self.delimiter.is_whitespace() {
            return Err(CatalogError::InvalidConfig(format!(
                "delimiter {:?} cannot be whitespace",
                self.delimiter
            )));
        }
        Ok(())
    }
}
