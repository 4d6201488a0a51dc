use tracing::{debug, trace};

use crate::catalog::{Catalog, PatternRule};
use crate::model::{AnalysisIssue, CategoryDeltas};

#[derive(Debug, Default)]
pub struct ScanOutput {
    pub issues: Vec<AnalysisIssue>,
    pub deltas: CategoryDeltas,
}

/// Apply every catalog rule to `text`, one issue per non-overlapping match.
pub fn scan(catalog: &Catalog, text: &str) -> ScanOutput {
    let mut out = ScanOutput::default();
    if text.is_empty() {
        return out;
    }

    for rule in catalog.rules() {
        let before = out.issues.len();
        for m in rule.matches(text) {
            let issue = issue_for(rule, line_of(text, m.as_str()));
            trace!(rule = rule.message, line = issue.line, "pattern hit");
            out.issues.push(issue);
            out.deltas.add(rule.category, rule.penalty);
        }
        let hits = out.issues.len() - before;
        if hits > 0 {
            debug!(category = ?rule.category, hits, rule = rule.message, "rule matched");
        }
    }
    out
}

fn issue_for(rule: &PatternRule, line: usize) -> AnalysisIssue {
    AnalysisIssue {
        issue_type: rule.category.label().to_string(),
        severity: rule.severity,
        message: rule.message.to_string(),
        line,
        suggestion: rule.suggestion.map(str::to_string),
    }
}

// Line of the first line that contains the matched text verbatim, not the
// line the match actually started on. Matches spanning several lines are
// never found this way and land on line 1.
fn line_of(text: &str, needle: &str) -> usize {
    text.split('\n')
        .position(|line| line.contains(needle))
        .map_or(1, |idx| idx + 1)
}
