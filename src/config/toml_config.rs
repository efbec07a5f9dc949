use crate::core::{Order, OutputFormat, Principle};
use crate::utils::error::{Result, SolidError};
use crate::utils::validation::{validate_unique, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML file for the catalog reader. Every key may be left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub catalog: CatalogSection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogSection {
    /// Slugs, titles or single letters.
    pub principles: Vec<Principle>,
    pub order: Option<Order>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
    pub pretty: Option<bool>,
}

impl FileConfig {
    /// Reads and validates a config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading config file: {}", path.display());
        let content = std::fs::read_to_string(path).map_err(SolidError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FileConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validate_unique("catalog.principles", &self.catalog.principles)
    }
}
