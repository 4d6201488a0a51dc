//! Analyzer limits, loaded from `code-analysis.toml` when present.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{AnalysisError, Result};

pub const CONFIG_FILE_NAME: &str = "code-analysis.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Inputs larger than this are rejected before scanning.
    pub max_code_bytes: usize,
    /// Issues kept when merging several files.
    pub max_issues: usize,
    /// Strengths and improvements kept when merging several files.
    pub max_notes: usize,
    /// Run language-aware enrichment after the core scan.
    pub enrich: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_code_bytes: 10_000,
            max_issues: 10,
            max_notes: 5,
            enrich: true,
        }
    }
}

impl AnalyzerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| AnalysisError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&raw).map_err(|source| AnalysisError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load `code-analysis.toml` from `dir`, or defaults when there is none.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Guard applied by callers before the engine sees `code`.
    pub fn validate_code(&self, code: &str) -> Result<()> {
        if code.trim().is_empty() {
            warn!("rejecting empty code");
            return Err(AnalysisError::EmptyCode);
        }
        if code.len() > self.max_code_bytes {
            warn!(size = code.len(), limit = self.max_code_bytes, "rejecting oversized code");
            return Err(AnalysisError::CodeTooLarge {
                size: code.len(),
                limit: self.max_code_bytes,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "max_issues = 3\n").unwrap();
        let cfg = AnalyzerConfig::discover(dir.path()).unwrap();
        assert_eq!(cfg.max_issues, 3);
        assert_eq!(cfg.max_code_bytes, 10_000);
        assert_eq!(cfg.max_notes, 5);
        assert!(cfg.enrich);
    }

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AnalyzerConfig::discover(dir.path()).unwrap();
        assert_eq!(cfg, AnalyzerConfig::default());
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "max_issues = \"lots\"\n").unwrap();
        let err = AnalyzerConfig::load(&path).unwrap_err();
        assert!(matches!(err, AnalysisError::Config { .. }));
    }

    #[test]
    fn validation_rejects_empty_and_oversized() {
        let cfg = AnalyzerConfig {
            max_code_bytes: 8,
            ..AnalyzerConfig::default()
        };
        assert!(matches!(cfg.validate_code("  \n"), Err(AnalysisError::EmptyCode)));
        assert!(matches!(
            cfg.validate_code("let abc = 1;"),
            Err(AnalysisError::CodeTooLarge { size: 12, limit: 8 })
        ));
        assert!(cfg.validate_code("x = 1;").is_ok());
    }
}
