//! Language-aware notes and complexity checks layered on top of the core scan.
//!
//! Enrichment only ever appends notes it has not already recorded, and the only
//! score it touches is maintainability (for high branching complexity), after
//! which the overall score is recomputed.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::language::{detect_language, Language};
use crate::model::{AnalysisIssue, AnalysisResult, Severity};

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

struct Thresholds {
    complexity_max: usize,
    complexity_penalty: i32,
    large_file_lines: usize,
    documented_ratio: f64,
    underdocumented_ratio: f64,
    long_function_lines: usize,
    magic_number_max: usize,
}

static TH: Thresholds = Thresholds {
    complexity_max: 10,
    complexity_penalty: 10,
    large_file_lines: 100,
    documented_ratio: 0.1,
    underdocumented_ratio: 0.05,
    long_function_lines: 20,
    magic_number_max: 3,
};

static BRANCH_KEYWORD_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    ["if", r"else\s+if", "while", "for", "switch", "case", "catch"]
        .iter()
        .map(|kw| Regex::new(&format!(r"\b{kw}\b")).unwrap())
        .collect()
});

const BRANCH_OPERATORS: [&str; 3] = ["&&", "||", "?"];

static DOCSTRING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?s)""".*?""""#).unwrap());

static FUNCTION_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"function\s+\w+[^{]*\{[^}]*\}").unwrap());

static MAGIC_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{2,}\b").unwrap());

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Enrich `result` in place and return the detected language.
pub fn enhance(result: &mut AnalysisResult, code: &str, file_name: Option<&str>) -> Language {
    let language = detect_language(code, file_name);
    debug!(%language, file = file_name.unwrap_or("<snippet>"), "enriching analysis");

    match language {
        lang if lang.is_javascript_like() => javascript_notes(result, code),
        Language::Python => python_notes(result, code),
        Language::Java => java_notes(result, code),
        _ => {}
    }
    complexity_check(result, code);
    maintainability_insights(result, code);
    language
}

fn push_unique(notes: &mut Vec<String>, note: &str) {
    if !notes.iter().any(|n| n == note) {
        notes.push(note.to_string());
    }
}

// ---------------------------------------------------------------------------
// Language-specific notes
// ---------------------------------------------------------------------------

fn javascript_notes(result: &mut AnalysisResult, code: &str) {
    if code.contains("useState") || code.contains("useEffect") {
        push_unique(&mut result.strengths, "Proper React hooks usage");
    }
    if code.contains("async ") && code.contains("await ") {
        push_unique(&mut result.strengths, "Modern asynchronous programming");
    }
    if code.contains("document.getElementById") {
        push_unique(
            &mut result.improvements,
            "Consider using React refs or modern DOM selection methods",
        );
    }
    if code.contains("var ") {
        push_unique(
            &mut result.improvements,
            "Replace var with const or let for better scoping",
        );
    }
}

fn python_notes(result: &mut AnalysisResult, code: &str) {
    if code.contains(r#"if __name__ == "__main__":"#) {
        push_unique(&mut result.strengths, "Proper Python script structure");
    }
    if DOCSTRING_RE.is_match(code) {
        push_unique(&mut result.strengths, "Good documentation with docstrings");
    }
    if code.contains('[') && code.contains("for ") && code.contains(" in ") {
        push_unique(&mut result.strengths, "Efficient use of list comprehensions");
    }
    if code.contains("range(len(") {
        push_unique(
            &mut result.improvements,
            "Consider using enumerate() instead of range(len())",
        );
    }
}

fn java_notes(result: &mut AnalysisResult, code: &str) {
    if code.contains("public static void main") {
        push_unique(&mut result.strengths, "Proper Java entry point");
    }
    if code.contains("@Override") {
        push_unique(&mut result.strengths, "Good use of annotations");
    }
    if code.contains("System.out.println") && !code.contains("logger") {
        push_unique(
            &mut result.improvements,
            "Consider using a logging framework instead of System.out",
        );
    }
}

// ---------------------------------------------------------------------------
// Complexity and maintainability
// ---------------------------------------------------------------------------

/// Rough cyclomatic complexity: one plus every branching keyword and operator.
pub fn cyclomatic_complexity(code: &str) -> usize {
    let keywords: usize = BRANCH_KEYWORD_RES
        .iter()
        .map(|re| re.find_iter(code).count())
        .sum();
    let operators: usize = BRANCH_OPERATORS
        .iter()
        .map(|op| code.matches(op).count())
        .sum();
    1 + keywords + operators
}

fn complexity_check(result: &mut AnalysisResult, code: &str) {
    let complexity = cyclomatic_complexity(code);
    if complexity > TH.complexity_max {
        debug!(complexity, "high cyclomatic complexity");
        result.issues.push(AnalysisIssue {
            issue_type: "Complexity".to_string(),
            severity: Severity::Warning,
            message: format!(
                "High cyclomatic complexity ({complexity}). Consider breaking down complex functions."
            ),
            // Whole-file finding; line 1 is the same fallback the scanner uses.
            line: 1,
            suggestion: Some(
                "Split complex functions into smaller, more focused functions".to_string(),
            ),
        });
        result.maintainability = (result.maintainability - TH.complexity_penalty).max(0);
        result.recompute_overall();
    }

    let non_blank = code.split('\n').filter(|l| !l.trim().is_empty()).count();
    if non_blank > TH.large_file_lines {
        push_unique(
            &mut result.improvements,
            "Consider breaking down large files into smaller modules",
        );
    }
}

fn is_comment_line(line: &str) -> bool {
    let t = line.trim();
    t.starts_with("//") || t.starts_with("/*") || t.starts_with('*') || t.starts_with('#')
}

fn maintainability_insights(result: &mut AnalysisResult, code: &str) {
    let lines: Vec<&str> = code.split('\n').collect();
    let comment_lines = lines.iter().filter(|l| is_comment_line(l)).count();
    let ratio = comment_lines as f64 / lines.len() as f64;

    if ratio > TH.documented_ratio {
        push_unique(&mut result.strengths, "Well-documented code");
    } else if ratio < TH.underdocumented_ratio {
        push_unique(
            &mut result.improvements,
            "Add more comments to explain complex logic",
        );
    }

    let long_function = FUNCTION_BLOCK_RE
        .find_iter(code)
        .any(|m| m.as_str().split('\n').count() > TH.long_function_lines);
    if long_function {
        push_unique(
            &mut result.improvements,
            "Some functions are quite long - consider breaking them down",
        );
    }

    if MAGIC_NUMBER_RE.find_iter(code).count() > TH.magic_number_max {
        push_unique(
            &mut result.improvements,
            "Consider using named constants instead of magic numbers",
        );
    }
}
