use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_DEPENDENCY_THRESHOLD;
use crate::error::{LexisError, Result};

/// Name of the optional config file looked up in the current directory
pub const CONFIG_FILE_NAME: &str = "lexis.toml";

/// Output style for the serialized result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Single line, `", "` and `": "` separators
    #[default]
    Compact,
    /// Indented, one field per line
    Pretty,
}

/// Main configuration for lexis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexisConfig {
    /// Group ratio above which the note becomes "High Dependency Risk"
    pub dependency_threshold: f64,
    /// Output style (compact or pretty)
    pub output_style: OutputStyle,
    /// Print diagnostics to stderr
    pub verbose: bool,
    /// Emit the journal insight (themes, score, feedback) instead of the keyword report
    pub insight: bool,
}

impl Default for LexisConfig {
    fn default() -> Self {
        Self {
            dependency_threshold: DEFAULT_DEPENDENCY_THRESHOLD,
            output_style: OutputStyle::Compact,
            verbose: false,
            insight: false,
        }
    }
}

impl LexisConfig {
    /// Validates the configuration, ensuring the threshold is a ratio.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.dependency_threshold) {
            return Err(LexisError::InvalidThreshold(self.dependency_threshold));
        }
        Ok(())
    }

    /// Loads configuration from `lexis.toml` in the current directory.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn load_from_file() -> Result<Option<Self>> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from_path(&path).map(Some)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| LexisError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| LexisError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
