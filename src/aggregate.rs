use tracing::debug;

use crate::model::{AnalysisIssue, AnalysisResult, Category, CategoryDeltas};

pub const MAX_SCORE: i32 = 100;

/// Category score after its accumulated penalty, floored at zero.
pub fn category_score(deltas: &CategoryDeltas, category: Category) -> i32 {
    (MAX_SCORE - deltas.get(category)).clamp(0, MAX_SCORE)
}

/// Rounded mean of the four category scores (halves round up).
pub fn overall_score(
    security: i32,
    performance: i32,
    best_practices: i32,
    maintainability: i32,
) -> i32 {
    let sum = security + performance + best_practices + maintainability;
    (sum as f64 / 4.0).round() as i32
}

pub fn aggregate(
    deltas: &CategoryDeltas,
    issues: Vec<AnalysisIssue>,
    strengths: Vec<String>,
    improvements: Vec<String>,
) -> AnalysisResult {
    let security = category_score(deltas, Category::Security);
    let performance = category_score(deltas, Category::Performance);
    let best_practices = category_score(deltas, Category::BestPractices);
    let maintainability = category_score(deltas, Category::Maintainability);
    let overall = overall_score(security, performance, best_practices, maintainability);

    debug!(
        overall,
        security,
        performance,
        best_practices,
        maintainability,
        issues = issues.len(),
        "aggregated scores"
    );

    AnalysisResult {
        overall_score: overall,
        best_practices,
        performance,
        maintainability,
        security,
        issues,
        strengths,
        improvements,
    }
}
