//! Per-language query-key tables the Symbol Extractor walks (§4.6).
//!
//! The per-language query modules in `sqa_query::queries` name their keys
//! consistently but not identically (Java says "declarations", everyone
//! else says "definitions"), so this module is the single place that knows
//! which literal key and query-string constant to use for each language.

use sqa_core::Language;
use sqa_query::queries::{go, java, javascript, python, typescript};

pub struct LanguageFamily {
    /// Keys run once over the whole file: every definition query except
    /// class/method/property, which are handled by the class-nesting pass.
    pub top_level_definition_keys: &'static [&'static str],
    /// `(key, query_string)` for the class-definition query, if this
    /// language has a class construct.
    pub class_definitions: Option<(&'static str, &'static str)>,
    /// `(key, query_string)` for the method query, run scoped to each
    /// class's subtree.
    pub method_definitions: Option<(&'static str, &'static str)>,
    /// `(key, query_string)` for the property query, run scoped to each
    /// class's subtree.
    pub property_definitions: Option<(&'static str, &'static str)>,
    /// Dependency-producing keys: calls, instantiation, member access, type
    /// references, extends/implements clauses.
    pub dependency_keys: &'static [&'static str],
}

pub fn family_for(language: Language) -> Option<LanguageFamily> {
    match language {
        Language::TypeScript | Language::Tsx => Some(LanguageFamily {
            top_level_definition_keys: &[
                "ts-interface-definitions",
                "ts-function-definitions",
                "ts-type-definitions",
                "ts-enum-definitions",
                "ts-variable-definitions",
                "ts-arrow-function-definitions",
            ],
            class_definitions: Some(("ts-class-definitions", typescript::CLASS_DEFINITIONS)),
            method_definitions: Some(("ts-method-definitions", typescript::METHOD_DEFINITIONS)),
            property_definitions: Some(("ts-property-definitions", typescript::PROPERTY_DEFINITIONS)),
            dependency_keys: &[
                "ts-call-expressions",
                "ts-new-expressions",
                "ts-member-expressions",
                "ts-type-references",
                "ts-extends-clause",
                "ts-implements-clause",
            ],
        }),
        Language::JavaScript | Language::Jsx => Some(LanguageFamily {
            top_level_definition_keys: &["js-function-definitions", "js-variable-definitions", "js-arrow-function-definitions"],
            class_definitions: Some(("js-class-definitions", javascript::CLASS_DEFINITIONS)),
            method_definitions: Some(("js-method-definitions", javascript::METHOD_DEFINITIONS)),
            property_definitions: Some(("js-property-definitions", javascript::PROPERTY_DEFINITIONS)),
            dependency_keys: &[
                "js-call-expressions",
                "js-new-expressions",
                "js-member-expressions",
                "js-extends-clause",
            ],
        }),
        Language::Java => Some(LanguageFamily {
            top_level_definition_keys: &["java-interface-declarations", "java-enum-declarations"],
            class_definitions: Some(("java-class-declarations", java::CLASS_DECLARATIONS)),
            method_definitions: Some(("java-method-declarations", java::METHOD_DECLARATIONS)),
            property_definitions: None,
            dependency_keys: &[],
        }),
        Language::Python => Some(LanguageFamily {
            top_level_definition_keys: &["python-function-definitions", "python-variable-definitions"],
            class_definitions: Some(("python-class-definitions", python::CLASS_DEFINITIONS)),
            method_definitions: Some(("python-method-definitions", python::METHOD_DEFINITIONS)),
            property_definitions: None,
            dependency_keys: &[],
        }),
        Language::Go => Some(LanguageFamily {
            // Go has no class construct; methods (which have a receiver, not
            // a containing class) and functions are both top-level.
            top_level_definition_keys: &[
                "go-function-definitions",
                "go-method-definitions",
                "go-type-definitions",
                "go-variable-definitions",
            ],
            class_definitions: None,
            method_definitions: None,
            property_definitions: None,
            dependency_keys: &["go-call-expressions"],
        }),
        Language::Markdown => None,
    }
}
