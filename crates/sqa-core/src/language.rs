//! The closed set of languages this analyzer understands (`S_lang`).
//!
//! Grammar handles and tree-sitter-specific plumbing live in `sqa-query`;
//! this enum is pure data so it can be carried on `Symbol` and `Node` without
//! pulling tree-sitter into `sqa-core`.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    TypeScript,
    Tsx,
    JavaScript,
    Jsx,
    Java,
    Python,
    Go,
    Markdown,
}

impl Language {
    /// Detects language from a file extension (without the leading dot).
    /// Unknown extensions are a no-op, matching "unknown → skip" in §4.6.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "ts" => Some(Self::TypeScript),
            "tsx" => Some(Self::Tsx),
            "js" | "mjs" | "cjs" => Some(Self::JavaScript),
            "jsx" => Some(Self::Jsx),
            "java" => Some(Self::Java),
            "py" => Some(Self::Python),
            "go" => Some(Self::Go),
            "md" | "markdown" => Some(Self::Markdown),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Display name, also used as the prefix of every query key this
    /// language registers (`ts-*`, `js-*`, `java-*`, `python-*`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
            Self::JavaScript => "javascript",
            Self::Jsx => "jsx",
            Self::Java => "java",
            Self::Python => "python",
            Self::Go => "go",
            Self::Markdown => "markdown",
        }
    }

    /// `true` for languages whose definition/dependency queries are shared
    /// under the `ts-*`/`js-*` families (TSX and JSX both parse with their
    /// respective base grammar's JSX-enabled dialect).
    pub fn is_js_family(&self) -> bool {
        matches!(
            self,
            Self::TypeScript | Self::Tsx | Self::JavaScript | Self::Jsx
        )
    }

    /// Query-key namespace prefix for this language: `ts`, `js`, `java`, or
    /// `python`. Markdown and Go have no shared-family prefix split, so they
    /// use their own name.
    pub fn query_prefix(&self) -> &'static str {
        match self {
            Self::TypeScript | Self::Tsx => "ts",
            Self::JavaScript | Self::Jsx => "js",
            Self::Java => "java",
            Self::Python => "python",
            Self::Go => "go",
            Self::Markdown => "markdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_detection_covers_closed_set() {
        assert_eq!(Language::from_extension("ts"), Some(Language::TypeScript));
        assert_eq!(Language::from_extension("tsx"), Some(Language::Tsx));
        assert_eq!(Language::from_extension("jsx"), Some(Language::Jsx));
        assert_eq!(Language::from_extension("mjs"), Some(Language::JavaScript));
        assert_eq!(Language::from_extension("py"), Some(Language::Python));
        assert_eq!(Language::from_extension("go"), Some(Language::Go));
        assert_eq!(Language::from_extension("java"), Some(Language::Java));
        assert_eq!(Language::from_extension("md"), Some(Language::Markdown));
        assert_eq!(Language::from_extension("rs"), None);
    }

    #[test]
    fn js_family_grouping() {
        assert!(Language::TypeScript.is_js_family());
        assert!(Language::Jsx.is_js_family());
        assert!(!Language::Python.is_js_family());
    }
}
