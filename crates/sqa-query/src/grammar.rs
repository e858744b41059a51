//! Maps the closed `Language` set to tree-sitter grammar handles.
//!
//! Markdown has no tree-sitter grammar in this pipeline — it is extracted by
//! the custom line-oriented extractor in [`crate::markdown`] instead (§6).

use sqa_core::Language;

/// Returns the tree-sitter grammar for `language`, or `None` for Markdown,
/// which has no grammar to compile against.
pub fn grammar_for(language: Language) -> Option<tree_sitter::Language> {
    match language {
        Language::TypeScript => Some(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
        Language::Tsx => Some(tree_sitter_typescript::LANGUAGE_TSX.into()),
        Language::JavaScript | Language::Jsx => Some(tree_sitter_javascript::LANGUAGE.into()),
        Language::Java => Some(tree_sitter_java::LANGUAGE.into()),
        Language::Python => Some(tree_sitter_python::LANGUAGE.into()),
        Language::Go => Some(tree_sitter_go::LANGUAGE.into()),
        Language::Markdown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_non_markdown_language_has_a_grammar() {
        for lang in [
            Language::TypeScript,
            Language::Tsx,
            Language::JavaScript,
            Language::Jsx,
            Language::Java,
            Language::Python,
            Language::Go,
        ] {
            assert!(grammar_for(lang).is_some(), "{lang:?} missing grammar");
        }
    }

    #[test]
    fn markdown_has_no_grammar() {
        assert!(grammar_for(Language::Markdown).is_none());
    }
}
