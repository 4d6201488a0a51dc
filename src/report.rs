use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::language::{detect_language, Language};
use crate::model::AnalysisResult;
use crate::project::{analyze_project, SourceFile};
use crate::{analyze, enrich};

/// A stamped analysis, shaped like the web service's response body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub language: Language,
    pub analysis_results: AnalysisResult,
}

impl AnalysisReport {
    fn stamp(file_name: Option<String>, language: Language, results: AnalysisResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            file_name,
            language,
            analysis_results: results,
        }
    }

    /// Validate, analyze and (when configured) enrich a single input.
    pub fn for_code(code: &str, file_name: Option<&str>, config: &AnalyzerConfig) -> Result<Self> {
        config.validate_code(code)?;
        let mut results = analyze(code, file_name);
        let language = if config.enrich {
            enrich::enhance(&mut results, code, file_name)
        } else {
            detect_language(code, file_name)
        };
        Ok(Self::stamp(file_name.map(str::to_string), language, results))
    }

    pub fn for_project(files: &[SourceFile], config: &AnalyzerConfig) -> Result<Self> {
        for file in files {
            config.validate_code(&file.content)?;
        }
        let results = analyze_project(files, config)?;
        Ok(Self::stamp(None, Language::Unknown, results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;

    #[test]
    fn report_fields_are_camel_case() {
        let report =
            AnalysisReport::for_code("eval(x);", Some("a.js"), &AnalyzerConfig::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("id").is_some());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["fileName"], "a.js");
        assert_eq!(json["language"], "javascript");
        let results = &json["analysisResults"];
        assert_eq!(results["security"], 80);
        assert!(results.get("overallScore").is_some());
        assert!(results.get("bestPractices").is_some());
        assert_eq!(results["issues"][0]["severity"], "error");
        assert_eq!(results["issues"][0]["type"], "Security");
    }

    #[test]
    fn reports_get_distinct_ids() {
        let cfg = AnalyzerConfig::default();
        let a = AnalysisReport::for_code("x = 1;", None, &cfg).unwrap();
        let b = AnalysisReport::for_code("x = 1;", None, &cfg).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.analysis_results, b.analysis_results);
    }

    #[test]
    fn invalid_input_is_rejected() {
        let cfg = AnalyzerConfig::default();
        assert!(matches!(
            AnalysisReport::for_code("", None, &cfg),
            Err(AnalysisError::EmptyCode)
        ));
        let files = [SourceFile::new("a.js", "const a = 1;"), SourceFile::new("b.js", " ")];
        assert!(matches!(
            AnalysisReport::for_project(&files, &cfg),
            Err(AnalysisError::EmptyCode)
        ));
    }

    #[test]
    fn disabling_enrichment_still_detects_language() {
        let cfg = AnalyzerConfig {
            enrich: false,
            ..AnalyzerConfig::default()
        };
        let report = AnalysisReport::for_code("def f():\n    pass", None, &cfg).unwrap();
        assert_eq!(report.language, Language::Python);
        assert!(report.analysis_results.issues.is_empty());
    }
}
