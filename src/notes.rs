use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::{Catalog, COMMENT_STRENGTH};

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

struct Thresholds {
    /// Trimmed length below which a missing comment is not worth mentioning.
    comment_min_chars: usize,
    /// Length above which code with no named function gets flagged.
    function_min_chars: usize,
}

static TH: Thresholds = Thresholds {
    comment_min_chars: 20,
    function_min_chars: 100,
};

static DOC_COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\*\*(?s:.)*?\*/").unwrap());

static FUNCTION_DEF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"function\s+\w+").unwrap());

// ---------------------------------------------------------------------------
// Signals
// ---------------------------------------------------------------------------

/// Strengths observed in `text`. Each check contributes at most once.
pub fn positive_signals(catalog: &Catalog, text: &str) -> Vec<String> {
    let mut strengths = Vec::new();

    if catalog.has_comment(text) {
        strengths.push(COMMENT_STRENGTH.to_string());
    }
    if text.contains("const ") || text.contains("let ") {
        strengths.push("Good use of modern variable declarations".to_string());
    }
    if text.contains("async ") && text.contains("await ") {
        strengths.push("Proper async/await usage".to_string());
    }
    if text.contains("try {") && text.contains("catch") {
        strengths.push("Good error handling with try-catch blocks".to_string());
    }
    if DOC_COMMENT_RE.is_match(text) {
        strengths.push("Well-documented code with JSDoc comments".to_string());
    }
    if text.contains("export ") || text.contains("import ") {
        strengths.push("Good modular code structure".to_string());
    }
    strengths
}

/// Improvement suggestions for `text`. Each check contributes at most once.
pub fn negative_signals(text: &str) -> Vec<String> {
    let mut improvements = Vec::new();

    if text.contains("var ") {
        improvements.push("Replace var declarations with const or let".to_string());
    }
    if text.contains("== ") && !text.contains("=== ") {
        improvements.push("Use strict equality (===) for better type safety".to_string());
    }
    if !text.contains("//")
        && !text.contains("/*")
        && text.trim().chars().count() > TH.comment_min_chars
    {
        improvements.push("Add comments to explain complex logic".to_string());
    }
    if !FUNCTION_DEF_RE.is_match(text) && text.chars().count() > TH.function_min_chars {
        improvements.push("Consider breaking code into smaller functions".to_string());
    }
    if text.contains("console.log") {
        improvements.push("Remove or replace console.log statements for production".to_string());
    }
    improvements
}
