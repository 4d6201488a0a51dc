use serde::Serialize;

// ---------------------------------------------------------------------------
// Categories and severities
// ---------------------------------------------------------------------------

/// One of the four scored quality dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Security,
    Performance,
    BestPractices,
    Maintainability,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Security,
        Category::Performance,
        Category::BestPractices,
        Category::Maintainability,
    ];

    /// Display label used as an issue's `type`.
    pub fn label(self) -> &'static str {
        match self {
            Category::Security => "Security",
            Category::Performance => "Performance",
            Category::BestPractices => "Best Practice",
            Category::Maintainability => "Maintainability",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Higher is more severe. Used to order merged issue lists.
    pub fn rank(self) -> u8 {
        match self {
            Severity::Error => 3,
            Severity::Warning => 2,
            Severity::Info => 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisIssue {
    #[serde(rename = "type")]
    pub issue_type: String,
    pub severity: Severity,
    pub message: String,
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_score: i32,
    pub best_practices: i32,
    pub performance: i32,
    pub maintainability: i32,
    pub security: i32,
    pub issues: Vec<AnalysisIssue>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

impl AnalysisResult {
    pub fn score(&self, category: Category) -> i32 {
        match category {
            Category::Security => self.security,
            Category::Performance => self.performance,
            Category::BestPractices => self.best_practices,
            Category::Maintainability => self.maintainability,
        }
    }

    /// Recompute `overall_score` from the four category scores.
    pub fn recompute_overall(&mut self) {
        self.overall_score = crate::aggregate::overall_score(
            self.security,
            self.performance,
            self.best_practices,
            self.maintainability,
        );
    }
}

/// Points taken off each category while scanning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryDeltas {
    pub security: i32,
    pub performance: i32,
    pub best_practices: i32,
    pub maintainability: i32,
}

impl CategoryDeltas {
    pub fn add(&mut self, category: Category, penalty: i32) {
        *self.slot(category) += penalty;
    }

    pub fn get(&self, category: Category) -> i32 {
        match category {
            Category::Security => self.security,
            Category::Performance => self.performance,
            Category::BestPractices => self.best_practices,
            Category::Maintainability => self.maintainability,
        }
    }

    pub fn is_zero(&self) -> bool {
        Category::ALL.iter().all(|c| self.get(*c) == 0)
    }

    fn slot(&mut self, category: Category) -> &mut i32 {
        match category {
            Category::Security => &mut self.security,
            Category::Performance => &mut self.performance,
            Category::BestPractices => &mut self.best_practices,
            Category::Maintainability => &mut self.maintainability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
        assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), "\"warning\"");
        assert_eq!(serde_json::to_string(&Severity::Info).unwrap(), "\"info\"");
    }

    #[test]
    fn deltas_accumulate_per_category() {
        let mut d = CategoryDeltas::default();
        assert!(d.is_zero());
        d.add(Category::Security, 20);
        d.add(Category::Security, 10);
        d.add(Category::BestPractices, 5);
        assert_eq!(d.get(Category::Security), 30);
        assert_eq!(d.get(Category::BestPractices), 5);
        assert_eq!(d.get(Category::Performance), 0);
        assert!(!d.is_zero());
    }

    #[test]
    fn issue_omits_missing_suggestion() {
        let issue = AnalysisIssue {
            issue_type: Category::Security.label().to_string(),
            severity: Severity::Warning,
            message: "m".to_string(),
            line: 3,
            suggestion: None,
        };
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["type"], "Security");
        assert_eq!(json["line"], 3);
        assert!(json.get("suggestion").is_none());
    }
}
