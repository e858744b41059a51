//! Tree-sitter Query Engine, Query Registry/Processor layer, Query Bridge,
//! Custom Key Mapper, and the normative per-language query strings, plus the
//! custom (non-tree-sitter) Markdown extractor.

pub mod bridge;
pub mod capture;
pub mod engine;
pub mod grammar;
pub mod key_mapper;
pub mod markdown;
pub mod processor;
pub mod processors;
pub mod queries;
pub mod registry;

pub use bridge::{BridgeContext, QueryBridge};
pub use capture::{Capture, Match};
pub use engine::QueryEngine;
pub use grammar::grammar_for;
pub use key_mapper::{predefined_mapping, KeyMapper};
pub use processor::{capture_text, coalesce, location_of, QueryContext, QueryProcessor, ResultData, TypedResult};
pub use processors::register_default_processors;
pub use registry::{ExecutionMetric, QueryRegistry, RegisteredQuery, RegistryError};
