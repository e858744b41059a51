//! Normative query strings for the closed language set (§6).

pub mod go;
pub mod java;
pub mod javascript;
pub mod python;
pub mod typescript;

use sqa_core::Language;

/// All `(key, query_string)` pairs registered for `language`. TSX and JSX
/// reuse the TypeScript/JavaScript families respectively — the same grammar
/// family parses both, and §6 only namespaces by family (`ts-`/`js-`), not by
/// extension.
pub fn queries_for(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::TypeScript | Language::Tsx => typescript::ALL,
        Language::JavaScript | Language::Jsx => javascript::ALL,
        Language::Java => java::ALL,
        Language::Python => python::ALL,
        Language::Go => go::ALL,
        Language::Markdown => &[],
    }
}

/// Every query key this workspace registers, across all languages. Used to
/// assert §9 Open Question (d): no key collides across languages because
/// each carries its language-family prefix.
pub fn all_keys() -> Vec<&'static str> {
    [
        typescript::ALL,
        javascript::ALL,
        java::ALL,
        python::ALL,
        go::ALL,
    ]
    .into_iter()
    .flat_map(|family| family.iter().map(|(k, _)| *k))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_query_key_collides_across_language_families() {
        let keys = all_keys();
        let mut seen = std::collections::HashSet::new();
        for key in keys {
            assert!(seen.insert(key), "duplicate query key {key:?}");
        }
    }
}
