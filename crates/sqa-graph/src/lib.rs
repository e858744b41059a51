//! Path resolution, dependency graph assembly, and graph analysis.
//!
//! `sqa-graph` is the graph-analytics layer of the pipeline: the Path
//! Resolver (§4.7) classifies and resolves import specifiers, the
//! Dependency Graph Builder (§4.8) walks a project from a set of entry files
//! assembling the file-level graph, and the Graph Analyzer (§4.9) derives
//! cycles, depth, hubs, isolation, and unresolved-import reports from it.

pub mod analyzer;
pub mod builder;
pub mod resolver;

pub use analyzer::{analyze, AnalysisReport, AnalyzerConfig, DepthReport, HubEntry, UnresolvedEdge};
pub use builder::{build, BuildError, BuildResult};
pub use resolver::{resolve, Classification, Resolution, ResolverConfig};
