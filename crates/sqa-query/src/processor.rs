//! Typed query results (§4.4) and the processor trait that produces them.
//!
//! §9 Design Notes asks for either a tagged union over all result shapes or a
//! trait+associated-type pattern, either preserving "registry[K] produces
//! ResultOf<K>". This workspace uses a tagged union (`ResultData`): every
//! `TypedResult` carries the common `{queryName, location, nodeText}` fields
//! from §3 plus a `ResultData` variant holding the query-specific fields,
//! mirroring the corpus's general taste for plain enums over generic
//! associated-type machinery.

use crate::capture::Match;
use sqa_core::{Location, Signature};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypedResult {
    pub query_name: String,
    pub location: Location,
    pub node_text: String,
    pub data: ResultData,
}

impl TypedResult {
    /// Invariant I1 / testable property P1: `r.queryName` must equal the key
    /// under which the processor that produced it is registered.
    pub fn satisfies_query_name(&self, key: &str) -> bool {
        self.query_name == key
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ResultData {
    ImportSource {
        source: String,
        is_relative: bool,
        import_type: String,
    },
    NamedImport {
        name: String,
        alias: Option<String>,
    },
    DefaultImport {
        name: String,
    },
    TypeImport {
        name: String,
        alias: Option<String>,
    },
    ExportDeclaration {
        export_type: String,
        source: Option<String>,
        export_name: Option<String>,
    },
    ExportAssignment {
        name: String,
    },
    ClassDefinition {
        name: String,
        extends: Option<String>,
        implements: Vec<String>,
    },
    InterfaceDefinition {
        name: String,
        extends: Vec<String>,
    },
    FunctionDefinition {
        name: String,
        signature: Signature,
    },
    MethodDefinition {
        name: String,
        parent_class: String,
        signature: Signature,
    },
    TypeDefinition {
        name: String,
    },
    EnumDefinition {
        name: String,
        members: Vec<String>,
    },
    VariableDefinition {
        name: String,
        var_type: Option<String>,
    },
    ArrowFunctionDefinition {
        name: String,
        signature: Signature,
    },
    PropertyDefinition {
        name: String,
        parent_class: String,
        prop_type: Option<String>,
    },
    CallExpression {
        callee: String,
    },
    NewExpression {
        callee: String,
    },
    MemberExpression {
        object: String,
        property: String,
    },
    TypeReference {
        name: String,
    },
    ExtendsClause {
        name: String,
    },
    ImplementsClause {
        name: String,
    },
    PythonFromImport {
        module: String,
        names: Vec<String>,
        relative: bool,
    },
    PythonImportAs {
        name: String,
        alias: String,
    },
    MarkdownLink {
        text: String,
        target: String,
    },
    MarkdownImage {
        alt: String,
        target: String,
    },
    MarkdownWikiLink {
        target: String,
    },
    MarkdownSymbolRef {
        name: String,
    },
    MarkdownHashtag {
        tag: String,
    },
    MarkdownCodeBlockFileRef {
        path: String,
    },
    MarkdownIncludeDirective {
        path: String,
    },
    MarkdownHeading {
        level: u8,
        text: String,
        tags: Vec<String>,
    },
}

/// Execution context threaded through a processor call (§4.3).
pub struct QueryContext<'a> {
    pub file_path: &'a str,
    pub source: &'a str,
}

/// Deterministic, pure function from matches to typed results (§4.4). No
/// I/O, no mutation of the input match list, and no panics — a processor
/// that cannot extract a name capture from a match simply skips it (§4.4
/// Policies).
pub trait QueryProcessor: Send + Sync {
    fn process(&self, query_name: &str, matches: &[Match<'_>], ctx: &QueryContext<'_>) -> Vec<TypedResult>;
}

/// Reads the byte range of a capture's node as source text.
pub fn capture_text(source: &str, m: &Match<'_>, name: &str) -> Option<String> {
    m.capture(name).map(|c| source[c.node.byte_range()].to_string())
}

pub fn location_of(m: &Match<'_>, root_capture: &str) -> Option<Location> {
    m.capture(root_capture).map(|c| {
        Location::from_ts_positions(
            (c.node.start_position().row, c.node.start_position().column),
            (c.node.end_position().row, c.node.end_position().column),
        )
    })
}

/// Drops result records that duplicate `(queryName, location, node_text)` of
/// an earlier one (§4.4 Policies: coalesce duplicates).
pub fn coalesce(mut results: Vec<TypedResult>) -> Vec<TypedResult> {
    let mut seen = std::collections::HashSet::new();
    results.retain(|r| {
        let key = (
            r.query_name.clone(),
            r.location.line,
            r.location.column,
            r.node_text.clone(),
        );
        seen.insert(key)
    });
    results
}
