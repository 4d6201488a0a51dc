//! Heuristic code-quality analysis.
//!
//! Submitted source text is scanned against a fixed catalog of regex rules in
//! four categories (security, performance, best practices, maintainability).
//! Each match becomes an issue and costs its category points; the four
//! category scores are then averaged into an overall score. Independent
//! presence checks add free-text strengths and improvement suggestions.
//!
//! [`analyze`] is pure and deterministic. Everything around it (input
//! validation, language-aware enrichment, project merging, report stamping)
//! lives in the other modules.

pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod enrich;
pub mod error;
pub mod language;
pub mod model;
pub mod notes;
pub mod project;
pub mod report;
pub mod scanner;

use tracing::debug;

pub use catalog::{Catalog, PatternRule, CATALOG};
pub use config::AnalyzerConfig;
pub use error::{AnalysisError, Result};
pub use language::{detect_language, Language};
pub use model::{AnalysisIssue, AnalysisResult, Category, CategoryDeltas, Severity};
pub use project::{analyze_project, load_sources, merge_results, read_source, SourceFile};
pub use report::AnalysisReport;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Analyze `code` with the built-in catalog.
///
/// `file_name` is only a label here; language-specific checks live in
/// [`enrich::enhance`].
pub fn analyze(code: &str, file_name: Option<&str>) -> AnalysisResult {
    analyze_with(&CATALOG, code, file_name)
}

pub fn analyze_with(catalog: &Catalog, code: &str, file_name: Option<&str>) -> AnalysisResult {
    debug!(
        file = file_name.unwrap_or("<snippet>"),
        bytes = code.len(),
        "analyzing"
    );

    let scanned = scanner::scan(catalog, code);
    let strengths = notes::positive_signals(catalog, code);
    let improvements = notes::negative_signals(code);

    aggregate::aggregate(&scanned.deltas, scanned.issues, strengths, improvements)
}
