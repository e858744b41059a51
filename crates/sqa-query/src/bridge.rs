//! Query Bridge (§4.3): glues raw tree-sitter query strings to the Typed
//! Processor registry.
//!
//! Net-new glue code; grounded on the call shape of the teacher's
//! `execute_entity_queries`/`execute_dep_queries` (parse once, look a query
//! up, run it, hand matches to a consumer) generalized behind the registry.

use crate::engine::QueryEngine;
use crate::processor::{QueryContext, TypedResult};
use crate::queries::queries_for;
use crate::registry::QueryRegistry;
use sqa_core::Language;
use tree_sitter::Tree;

/// The execution context a bridge call runs under (§4.3).
pub struct BridgeContext<'a, 'tree> {
    pub tree: &'tree Tree,
    pub language: Language,
    pub source: &'a str,
    pub file_path: &'a str,
}

pub struct QueryBridge<'a> {
    pub engine: &'a QueryEngine,
    pub registry: &'a QueryRegistry,
}

impl<'a> QueryBridge<'a> {
    pub fn new(engine: &'a QueryEngine, registry: &'a QueryRegistry) -> Self {
        Self { engine, registry }
    }

    fn query_text(&self, language: Language, key: &str) -> Option<&'static str> {
        queries_for(language)
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, q)| *q)
    }

    /// Executes a single key: look up its raw query string, run it through
    /// the Tree-sitter Query Engine, hand the matches to the registry.
    pub fn execute(&self, key: &str, ctx: &BridgeContext<'_, '_>) -> Vec<TypedResult> {
        let Some(query_text) = self.query_text(ctx.language, key) else {
            tracing::warn!(query = key, language = ctx.language.name(), "no query text for key");
            return Vec::new();
        };
        let matches = self
            .engine
            .execute_query(key, query_text, ctx.tree, ctx.language, ctx.source);
        let proc_ctx = QueryContext {
            file_path: ctx.file_path,
            source: ctx.source,
        };
        self.registry.execute(key, &matches, &proc_ctx, ctx.language)
    }

    /// Runs every key defined for this language's query family that also has
    /// a registered, language-supporting processor — the intersection §4.3
    /// calls for.
    pub fn execute_all_language_queries(
        &self,
        ctx: &BridgeContext<'_, '_>,
    ) -> std::collections::HashMap<String, Vec<TypedResult>> {
        queries_for(ctx.language)
            .iter()
            .map(|(key, _)| (key.to_string(), self.execute(key, ctx)))
            .collect()
    }
}
