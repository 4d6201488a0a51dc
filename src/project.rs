//! Merging per-file results into one project-level result.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::AnalyzerConfig;
use crate::error::{AnalysisError, Result};
use crate::model::AnalysisResult;
use crate::{analyze, enrich};

#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Read one file as a [`SourceFile`] named after its path.
pub fn read_source(path: &Path) -> Result<SourceFile> {
    let content = std::fs::read_to_string(path).map_err(|source| AnalysisError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SourceFile::new(path.to_string_lossy(), content))
}

/// Read every readable file of a project. Unreadable ones are logged and left out.
pub fn load_sources(paths: &[PathBuf]) -> Vec<SourceFile> {
    paths
        .iter()
        .filter_map(|path| match read_source(path) {
            Ok(file) => Some(file),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping unreadable project file");
                None
            }
        })
        .collect()
}

pub fn analyze_project(files: &[SourceFile], config: &AnalyzerConfig) -> Result<AnalysisResult> {
    let results: Vec<AnalysisResult> = files
        .iter()
        .map(|file| {
            let mut result = analyze(&file.content, Some(&file.name));
            if config.enrich {
                enrich::enhance(&mut result, &file.content, Some(&file.name));
            }
            result
        })
        .collect();
    merge_results(&results, config)
}

/// Average the scores, keep the most severe issues and the first unique notes.
pub fn merge_results(
    results: &[AnalysisResult],
    config: &AnalyzerConfig,
) -> Result<AnalysisResult> {
    if results.is_empty() {
        return Err(AnalysisError::EmptyProject);
    }

    let mean = |pick: fn(&AnalysisResult) -> i32| -> i32 {
        let sum: i32 = results.iter().map(pick).sum();
        (sum as f64 / results.len() as f64).round() as i32
    };

    let mut issues: Vec<_> = results.iter().flat_map(|r| r.issues.iter().cloned()).collect();
    // Stable: equal severities keep file order.
    issues.sort_by(|a, b| b.severity.rank().cmp(&a.severity.rank()));
    issues.truncate(config.max_issues);

    let merged = AnalysisResult {
        overall_score: mean(|r| r.overall_score),
        best_practices: mean(|r| r.best_practices),
        performance: mean(|r| r.performance),
        maintainability: mean(|r| r.maintainability),
        security: mean(|r| r.security),
        issues,
        strengths: unique_notes(results.iter().map(|r| &r.strengths), config.max_notes),
        improvements: unique_notes(results.iter().map(|r| &r.improvements), config.max_notes),
    };
    debug!(files = results.len(), overall = merged.overall_score, "merged project results");
    Ok(merged)
}

fn unique_notes<'a>(lists: impl Iterator<Item = &'a Vec<String>>, cap: usize) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut unique = Vec::new();
    for note in lists.flatten() {
        if unique.len() == cap {
            break;
        }
        if seen.insert(note.as_str()) {
            unique.push(note.clone());
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;

    fn no_enrich() -> AnalyzerConfig {
        AnalyzerConfig {
            enrich: false,
            ..AnalyzerConfig::default()
        }
    }

    #[test]
    fn unreadable_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.js");
        std::fs::write(&good, "const a = 1;").unwrap();
        let missing = dir.path().join("missing.js");

        let sources = load_sources(&[missing.clone(), good.clone()]);
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name, good.to_string_lossy());
        assert_eq!(sources[0].content, "const a = 1;");

        let err = read_source(&missing).unwrap_err();
        assert!(matches!(err, AnalysisError::Io { .. }));
    }

    #[test]
    fn empty_project_is_an_error() {
        let err = analyze_project(&[], &AnalyzerConfig::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyProject));
    }

    #[test]
    fn scores_are_averaged() {
        let files = [
            SourceFile::new("a.js", "eval(x);"),
            SourceFile::new("b.js", "export const b = 2;"),
        ];
        let merged = analyze_project(&files, &no_enrich()).unwrap();
        // security 80 and 100
        assert_eq!(merged.security, 90);
        assert_eq!(merged.performance, 100);
        // overall 95 and 100
        assert_eq!(merged.overall_score, 98);
    }

    #[test]
    fn issues_sorted_by_severity_and_capped() {
        let files = [
            SourceFile::new("a.js", "console.log(1);\nvar a = 1;"),
            SourceFile::new("b.js", "eval(a);"),
        ];
        let config = AnalyzerConfig {
            max_issues: 2,
            ..no_enrich()
        };
        let merged = analyze_project(&files, &config).unwrap();
        let severities: Vec<Severity> = merged.issues.iter().map(|i| i.severity).collect();
        assert_eq!(severities, vec![Severity::Error, Severity::Warning]);
    }

    #[test]
    fn notes_deduplicated_in_first_seen_order() {
        let files = [
            SourceFile::new("a.js", "const a = 1;"),
            SourceFile::new("b.js", "const b = 1; export { b };"),
        ];
        let merged = analyze_project(&files, &no_enrich()).unwrap();
        assert_eq!(
            merged.strengths,
            vec![
                "Good use of modern variable declarations".to_string(),
                "Good modular code structure".to_string(),
            ]
        );
    }
}
