//! Shared data model for the static source analyzer.
//!
//! Holds the types every other crate in the workspace builds on: source
//! locations, the language enum, symbols and symbol-level dependency edges,
//! the file-level dependency graph, RDF identifiers, and the pipeline's
//! internal configuration knobs. No tree-sitter dependency lives here —
//! parsing and query execution belong to `sqa-query`.

pub mod config;
pub mod dependency;
pub mod error;
pub mod graph;
pub mod language;
pub mod location;
pub mod rdf;
pub mod symbol;

pub use config::PipelineConfig;
pub use dependency::{EdgeKind as SymbolEdgeKind, FileDependency, SymbolDependencyEdge};
pub use error::CoreError;
pub use graph::{DependencyGraph, Edge, EdgeKind, GraphMetadata, Node, NodeKind};
pub use language::Language;
pub use location::Location;
pub use rdf::RdfId;
pub use symbol::{Signature, Symbol, SymbolKind};
