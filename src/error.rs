use std::path::PathBuf;

use thiserror::Error;

/// Errors raised around the engine. The core scan itself cannot fail.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("no code to analyze")]
    EmptyCode,

    #[error("code is {size} bytes, limit is {limit}")]
    CodeTooLarge { size: usize, limit: usize },

    #[error("project has no files to analyze")]
    EmptyProject,

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
