//! Symbol Extraction & Dependency Derivation (§4.6): composes the query
//! pipeline's typed results into a per-file symbol table plus the symbol
//! dependency edges used to build the file-level dependency graph.

mod extractor;
mod family;

pub use extractor::{FileSymbolTable, SymbolExtractor};
