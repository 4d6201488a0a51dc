//! Best-effort language detection from a filename, falling back to content.

use std::fmt;
use std::path::Path;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
    Python,
    Java,
    Cpp,
    C,
    CSharp,
    Php,
    Ruby,
    Go,
    Rust,
    Swift,
    Kotlin,
    #[default]
    Unknown,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Python => "python",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::C => "c",
            Language::CSharp => "csharp",
            Language::Php => "php",
            Language::Ruby => "ruby",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
            Language::Unknown => "unknown",
        }
    }

    /// Map a file extension (case-insensitive, without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        let lang = match ext.to_ascii_lowercase().as_str() {
            "js" | "jsx" => Language::JavaScript,
            "ts" | "tsx" => Language::TypeScript,
            "py" => Language::Python,
            "java" => Language::Java,
            "cpp" => Language::Cpp,
            "c" => Language::C,
            "cs" => Language::CSharp,
            "php" => Language::Php,
            "rb" => Language::Ruby,
            "go" => Language::Go,
            "rs" => Language::Rust,
            "swift" => Language::Swift,
            "kt" => Language::Kotlin,
            _ => return None,
        };
        Some(lang)
    }

    pub fn is_javascript_like(self) -> bool {
        matches!(self, Language::JavaScript | Language::TypeScript)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn detect_language(code: &str, file_name: Option<&str>) -> Language {
    if let Some(lang) = file_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .and_then(Language::from_extension)
    {
        return lang;
    }
    detect_from_content(code)
}

fn detect_from_content(code: &str) -> Language {
    if code.contains("function ") || code.contains("const ") || code.contains("let ") {
        return if code.contains("interface ") || code.contains(": string") {
            Language::TypeScript
        } else {
            Language::JavaScript
        };
    }
    if code.contains("def ") || (code.contains("import ") && code.contains("from ")) {
        return Language::Python;
    }
    if code.contains("public class ") || code.contains("private ") || code.contains("System.out") {
        return Language::Java;
    }
    Language::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_wins_over_content() {
        assert_eq!(detect_language("def f(): pass", Some("app.js")), Language::JavaScript);
        assert_eq!(detect_language("", Some("src/App.TSX")), Language::TypeScript);
        assert_eq!(detect_language("", Some("main.rs")), Language::Rust);
        assert_eq!(detect_language("", Some("Program.cs")), Language::CSharp);
        assert_eq!(detect_language("", Some("build.kt")), Language::Kotlin);
    }

    #[test]
    fn unknown_extension_falls_back_to_content() {
        assert_eq!(detect_language("def main():\n    pass", Some("script")), Language::Python);
        assert_eq!(detect_language("let x: string = 'a';", Some("notes.txt")), Language::TypeScript);
    }

    #[test]
    fn content_heuristics() {
        assert_eq!(detect_language("const a = 1;", None), Language::JavaScript);
        assert_eq!(detect_language("interface A {}\nconst a = 1;", None), Language::TypeScript);
        assert_eq!(detect_language("from os import path", None), Language::Python);
        assert_eq!(detect_language("public class Main {}", None), Language::Java);
        assert_eq!(detect_language("SELECT 1;", None), Language::Unknown);
    }

    #[test]
    fn javascript_family() {
        assert!(Language::JavaScript.is_javascript_like());
        assert!(Language::TypeScript.is_javascript_like());
        assert!(!Language::Python.is_javascript_like());
        assert!(!Language::Unknown.is_javascript_like());
    }

    #[test]
    fn serializes_as_identifier() {
        assert_eq!(serde_json::to_string(&Language::CSharp).unwrap(), "\"csharp\"");
        assert_eq!(Language::Cpp.to_string(), "cpp");
    }
}
