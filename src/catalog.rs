//! The fixed table of pattern rules.
//!
//! Every rule owns its penalty explicitly, so the amount taken off a category
//! never depends on how severities happen to map in another category.

use once_cell::sync::Lazy;
use regex::{Match, Regex};

use crate::model::{Category, Severity};

#[derive(Debug, Clone)]
pub struct PatternRule {
    pub category: Category,
    pub matcher: Regex,
    pub severity: Severity,
    pub message: &'static str,
    pub suggestion: Option<&'static str>,
    pub penalty: i32,
    /// Matches whose text this also matches are discarded.
    pub exclude: Option<Regex>,
}

impl PatternRule {
    fn excluding(mut self, pattern: &str) -> Self {
        self.exclude = Some(Regex::new(pattern).unwrap());
        self
    }

    /// Non-overlapping matches of `matcher` in `text`, minus excluded ones.
    pub fn matches<'r, 't>(&'r self, text: &'t str) -> impl Iterator<Item = Match<'t>> + 'r
    where
        't: 'r,
    {
        self.matcher
            .find_iter(text)
            .filter(move |m| !self.exclude.as_ref().is_some_and(|ex| ex.is_match(m.as_str())))
    }
}

/// Immutable rule set plus the comment signal reported as a strength.
#[derive(Debug, Clone)]
pub struct Catalog {
    rules: Vec<PatternRule>,
    comment_signal: Regex,
}

pub const COMMENT_STRENGTH: &str = "Good use of comments for documentation";

/// Process-wide built-in catalog.
pub static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::builtin);

fn rule(
    category: Category,
    pattern: &str,
    severity: Severity,
    penalty: i32,
    message: &'static str,
    suggestion: Option<&'static str>,
) -> PatternRule {
    PatternRule {
        category,
        matcher: Regex::new(pattern).unwrap(),
        severity,
        message,
        suggestion,
        penalty,
        exclude: None,
    }
}

impl Catalog {
    pub fn builtin() -> Self {
        use Category::*;
        use Severity::*;

        let rules = vec![
            // Security
            rule(
                Security,
                r"eval\s*\(",
                Error,
                20,
                "Use of eval() is dangerous and should be avoided",
                Some("Use JSON.parse() for parsing JSON or other safe alternatives"),
            ),
            rule(
                Security,
                r"innerHTML\s*=",
                Warning,
                10,
                "innerHTML can lead to XSS vulnerabilities",
                Some("Use textContent, createElement, or sanitize HTML content"),
            ),
            rule(
                Security,
                r"document\.write\s*\(",
                Warning,
                10,
                "document.write() can be dangerous and affect performance",
                Some("Use DOM manipulation methods instead"),
            ),
            // Performance
            rule(
                Performance,
                r"for\s*\(\s*var\s+\w+\s*=\s*0\s*;\s*\w+\s*<\s*\w+\.length\s*;\s*\w+\+\+\s*\)",
                Info,
                5,
                "Consider caching array length in loops",
                Some("Cache array.length in a variable before the loop"),
            ),
            rule(
                Performance,
                r#"querySelector(?:All)?\s*\(\s*['"]"#,
                Info,
                5,
                "Multiple DOM queries can impact performance",
                Some("Cache DOM elements in variables when used multiple times"),
            ),
            // Best practices
            rule(
                BestPractices,
                r"var\s+",
                Warning,
                5,
                "Use const or let instead of var",
                Some("const for values that never change, let for variables that change"),
            ),
            // The optional leading `=`/`!` swallows `===` and `!==` so the
            // exclusion can drop them without eating the next comparison.
            rule(
                BestPractices,
                r"[=!]?==\s*[^=]",
                Warning,
                5,
                "Use strict equality (===) instead of loose equality (==)",
                Some("Replace == with === for type-safe comparisons"),
            )
            .excluding(r"^[=!]"),
            rule(
                BestPractices,
                r"console\.log\s*\(",
                Info,
                5,
                "Remove console.log statements in production code",
                Some("Use a proper logging library or remove debug statements"),
            ),
            // Maintainability
            rule(
                Maintainability,
                r"function\s+\w+\s*\([^)]*\)\s*\{[^}]{200,}",
                Warning,
                10,
                "Function appears to be too long",
                Some("Consider breaking down into smaller, focused functions"),
            ),
        ];

        Self {
            rules,
            comment_signal: Regex::new(r"(?m)/\*(?s:.)*?\*/|//.+$").unwrap(),
        }
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    pub fn rules_for(&self, category: Category) -> impl Iterator<Item = &PatternRule> {
        self.rules.iter().filter(move |r| r.category == category)
    }

    pub fn has_comment(&self, text: &str) -> bool {
        self.comment_signal.is_match(text)
    }
}
