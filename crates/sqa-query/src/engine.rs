//! The Tree-sitter Query Engine (§4.1).
//!
//! Holds, per supported language, a parser handle and a map of named query
//! strings. Queries are compiled lazily on first execution and cached;
//! compilation failures are absorbed — `executeQuery` never throws, it logs
//! and returns an empty list, keeping the pipeline best-effort across
//! languages of varying grammar maturity.
//!
//! Grounded on the compiled-query cache in the teacher's paradigm query
//! engine: a `(language, name) -> compiled query` map built with
//! `tree_sitter::Query::new` and walked with `tree_sitter::QueryCursor` +
//! `StreamingIterator`.

use crate::capture::{Capture, Match};
use crate::grammar::grammar_for;
use sqa_core::Language;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use tree_sitter::{Node, Parser, Query, QueryCursor, StreamingIterator, Tree};

#[derive(Hash, PartialEq, Eq, Clone)]
struct QueryKey {
    language: Language,
    name: String,
}

#[derive(Default)]
pub struct QueryEngine {
    parsers: RwLock<HashMap<Language, Arc<Mutex<Parser>>>>,
    raw_queries: RwLock<HashMap<QueryKey, String>>,
    compiled: RwLock<HashMap<QueryKey, Arc<Query>>>,
}

impl QueryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent upsert of a named query string for `language`. Overwriting
    /// an existing entry invalidates its compiled-query cache entry so the
    /// next execution recompiles from the new text.
    pub fn register_query(&self, language: Language, name: &str, query_string: &str) {
        let key = QueryKey {
            language,
            name: name.to_string(),
        };
        self.raw_queries
            .write()
            .unwrap()
            .insert(key.clone(), query_string.to_string());
        self.compiled.write().unwrap().remove(&key);
    }

    /// Records the parser used to compile/run queries for `language`.
    /// Replaces §9 Open Question (b)'s `getParser`-via-string-indexing hack
    /// with an explicit accessor ([`QueryEngine::parser_for`]).
    pub fn set_parser(&self, language: Language, parser: Parser) {
        self.parsers
            .write()
            .unwrap()
            .insert(language, Arc::new(Mutex::new(parser)));
    }

    /// Explicit accessor for the parser registered for `language`, if any.
    pub fn parser_for(&self, language: Language) -> Option<Arc<Mutex<Parser>>> {
        self.parsers.read().unwrap().get(&language).cloned()
    }

    fn compile_or_get(&self, language: Language, name: &str, query_string: &str) -> Option<Arc<Query>> {
        let key = QueryKey {
            language,
            name: name.to_string(),
        };
        if let Some(q) = self.compiled.read().unwrap().get(&key) {
            return Some(q.clone());
        }
        let ts_lang = match grammar_for(language) {
            Some(l) => l,
            None => {
                tracing::warn!(?language, query = name, "no grammar for language");
                return None;
            }
        };
        match Query::new(&ts_lang, query_string) {
            Ok(q) => {
                let q = Arc::new(q);
                self.compiled.write().unwrap().insert(key, q.clone());
                Some(q)
            }
            Err(e) => {
                tracing::warn!(?language, query = name, error = %e, "query compile failed");
                None
            }
        }
    }

    /// Runs `query_string` (registered or ad hoc, under `name`) against
    /// `tree`, returning matches in source-text order, tie-broken by pattern
    /// index then capture order (§4.1 step 3). Never panics or propagates an
    /// error: any failure yields an empty `Vec` and a logged warning.
    pub fn execute_query<'tree>(
        &self,
        name: &str,
        query_string: &str,
        tree: &'tree Tree,
        language: Language,
        source: &str,
    ) -> Vec<Match<'tree>> {
        self.execute_query_on_node(name, query_string, tree.root_node(), language, source)
    }

    /// Runs a query rooted at an arbitrary `node` rather than the tree root —
    /// used by the Symbol Extractor (§4.6) to scope method/property queries
    /// to a single class's subtree so their results carry the right
    /// `parentSymbol`.
    pub fn execute_query_on_node<'tree>(
        &self,
        name: &str,
        query_string: &str,
        node: Node<'tree>,
        language: Language,
        source: &str,
    ) -> Vec<Match<'tree>> {
        let Some(query) = self.compile_or_get(language, name, query_string) else {
            return Vec::new();
        };
        let capture_names = query.capture_names();
        let mut cursor = QueryCursor::new();
        let mut stream = cursor.matches(&query, node, source.as_bytes());
        let mut matches = Vec::new();
        while let Some(m) = stream.next() {
            let captures = m
                .captures
                .iter()
                .map(|c| Capture {
                    name: capture_names[c.index as usize].to_string(),
                    node: c.node,
                })
                .collect();
            matches.push(Match {
                query_name: name.to_string(),
                captures,
                pattern_index: m.pattern_index,
            });
        }
        matches.sort_by_key(|m| (m.start_byte(), m.pattern_index));
        matches
    }

    /// Runs every query registered for `language`, keyed by query name.
    pub fn execute_all_queries<'tree>(
        &self,
        tree: &'tree Tree,
        language: Language,
        source: &str,
    ) -> HashMap<String, Vec<Match<'tree>>> {
        let names: Vec<(String, String)> = self
            .raw_queries
            .read()
            .unwrap()
            .iter()
            .filter(|(k, _)| k.language == language)
            .map(|(k, v)| (k.name.clone(), v.clone()))
            .collect();
        let mut out = HashMap::new();
        for (name, text) in names {
            let matches = self.execute_query(&name, &text, tree, language, source);
            out.insert(name, matches);
        }
        out
    }

    /// Runs only `names`' registered queries for `language`.
    pub fn execute_selected_queries<'tree>(
        &self,
        names: &[&str],
        tree: &'tree Tree,
        language: Language,
        source: &str,
    ) -> HashMap<String, Vec<Match<'tree>>> {
        let mut out = HashMap::new();
        for &name in names {
            let key = QueryKey {
                language,
                name: name.to_string(),
            };
            let Some(text) = self.raw_queries.read().unwrap().get(&key).cloned() else {
                tracing::warn!(?language, query = name, "query not registered");
                continue;
            };
            let matches = self.execute_query(name, &text, tree, language, source);
            out.insert(name.to_string(), matches);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqa_core::Language;

    fn parse(language: Language, source: &str) -> Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&grammar_for(language).unwrap())
            .unwrap();
        parser.parse(source, None).unwrap()
    }

    #[test]
    fn executes_a_registered_query_and_returns_sorted_matches() {
        let engine = QueryEngine::new();
        let query = "(class_declaration name: (type_identifier) @class_name) @class";
        engine.register_query(Language::TypeScript, "ts-class-definitions", query);
        let source = "class A {}\nclass B {}\n";
        let tree = parse(Language::TypeScript, source);
        let matches =
            engine.execute_query("ts-class-definitions", query, &tree, Language::TypeScript, source);
        assert_eq!(matches.len(), 2);
        assert_eq!(
            source[matches[0].capture("class_name").unwrap().node.byte_range()].to_string(),
            "A"
        );
        assert_eq!(
            source[matches[1].capture("class_name").unwrap().node.byte_range()].to_string(),
            "B"
        );
    }

    #[test]
    fn grammar_less_language_returns_empty_without_panicking() {
        let engine = QueryEngine::new();
        let tree = parse(Language::TypeScript, "class A {}");
        let matches = engine.execute_query("x", "(foo) @bar", &tree, Language::Markdown, "");
        assert!(matches.is_empty());
    }

    #[test]
    fn compile_error_returns_empty_and_does_not_panic() {
        let engine = QueryEngine::new();
        let source = "class A {}";
        let tree = parse(Language::TypeScript, source);
        let matches = engine.execute_query(
            "bogus",
            "(this is not a valid query",
            &tree,
            Language::TypeScript,
            source,
        );
        assert!(matches.is_empty());
    }
}
