use std::path::PathBuf;

use thiserror::Error;

/// Errors raised around the analysis. The keyword report itself never fails.
#[derive(Debug, Error)]
pub enum LexisError {
    #[error("failed to read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("dependency threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("journal entry too short: {length} characters, need at least {min}")]
    EntryTooShort { length: usize, min: usize },

    #[error("failed to serialize analysis result: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LexisError>;
