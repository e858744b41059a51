//! The file-level dependency graph (§3 Dependency graph).
//!
//! Nodes are keyed by canonical absolute path, or by a `<package>`/`<builtin>`
//! sentinel id for external and builtin dependencies. `BTreeMap` keeps node
//! enumeration order deterministic across runs (§5 ordering guarantees);
//! edges are kept in a plain `Vec` in insertion order, which is itself the
//! per-node stable order §5 asks for.

use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Internal,
    External,
    Builtin,
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeKind {
    Import,
    Export,
    Dynamic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    pub kind: NodeKind,
    pub exists: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnresolvedSpecifier {
    pub from: String,
    pub specifier: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphMetadata {
    pub analyzed_file_count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unresolved_specifiers: Vec<UnresolvedSpecifier>,
    /// SCC-derived; each cycle has >= 2 nodes and is recorded once up to
    /// rotation (invariant I4). Populated by the Graph Analyzer, not by the
    /// builder.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cycles: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependencyGraph {
    pub nodes: BTreeMap<String, Node>,
    pub edges: Vec<Edge>,
    pub metadata: GraphMetadata,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node if absent. Existing nodes are not overwritten — the
    /// first writer (typically the Path Resolver's first sighting of a
    /// specifier) wins, matching the builder's visited-once frontier walk.
    pub fn ensure_node(&mut self, node: Node) {
        self.nodes.entry(node.id.clone()).or_insert(node);
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Adds an edge unless an identical `(from, to, kind, line)` edge is
    /// already present. Multi-edges on distinct lines are permitted (§3).
    pub fn add_edge(&mut self, edge: Edge) {
        let dup = self.edges.iter().any(|e| {
            e.from == edge.from && e.to == edge.to && e.kind == edge.kind && e.line == edge.line
        });
        if !dup {
            // Invariant I3: edges reference only nodes present in the graph.
            debug_assert!(self.nodes.contains_key(&edge.from));
            debug_assert!(self.nodes.contains_key(&edge.to));
            self.edges.push(edge);
        }
    }

    pub fn out_edges<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.from == id)
    }

    pub fn in_edges<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.to == id)
    }

    /// Node ids in canonical (sorted) order, the enumeration order used by
    /// the analyzer's deterministic outputs.
    pub fn node_ids(&self) -> impl Iterator<Item = &String> {
        self.nodes.keys()
    }

    /// Checks invariant I3: every edge endpoint is a node present in the
    /// graph.
    pub fn check_edges_reference_known_nodes(&self) -> Result<(), String> {
        for edge in &self.edges {
            if !self.nodes.contains_key(&edge.from) {
                return Err(format!("edge references unknown node {:?}", edge.from));
            }
            if !self.nodes.contains_key(&edge.to) {
                return Err(format!("edge references unknown node {:?}", edge.to));
            }
        }
        Ok(())
    }
}

/// The `<package>`/`<builtin>` sentinel id for an external or builtin
/// dependency that has no file path of its own.
pub fn sentinel_id(kind: NodeKind, name: &str) -> String {
    match kind {
        NodeKind::External => format!("<package>:{name}"),
        NodeKind::Builtin => format!("<builtin>:{name}"),
        NodeKind::Internal | NodeKind::Missing => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, kind: NodeKind) -> Node {
        Node {
            id: id.to_string(),
            file_path: Some(id.to_string()),
            language: None,
            kind,
            exists: true,
        }
    }

    #[test]
    fn ensure_node_does_not_overwrite() {
        let mut g = DependencyGraph::new();
        g.ensure_node(node("a.ts", NodeKind::Internal));
        let mut replacement = node("a.ts", NodeKind::Internal);
        replacement.exists = false;
        g.ensure_node(replacement);
        assert!(g.node("a.ts").unwrap().exists);
    }

    #[test]
    fn add_edge_deduplicates_identical_edges() {
        let mut g = DependencyGraph::new();
        g.ensure_node(node("a.ts", NodeKind::Internal));
        g.ensure_node(node("b.ts", NodeKind::Internal));
        let edge = Edge {
            from: "a.ts".into(),
            to: "b.ts".into(),
            kind: EdgeKind::Import,
            specifier: Some("./b".into()),
            line: Some(1),
        };
        g.add_edge(edge.clone());
        g.add_edge(edge);
        assert_eq!(g.edges.len(), 1);
    }

    #[test]
    fn add_edge_keeps_distinct_lines_as_multi_edges() {
        let mut g = DependencyGraph::new();
        g.ensure_node(node("a.ts", NodeKind::Internal));
        g.ensure_node(node("b.ts", NodeKind::Internal));
        g.add_edge(Edge {
            from: "a.ts".into(),
            to: "b.ts".into(),
            kind: EdgeKind::Import,
            specifier: Some("./b".into()),
            line: Some(1),
        });
        g.add_edge(Edge {
            from: "a.ts".into(),
            to: "b.ts".into(),
            kind: EdgeKind::Import,
            specifier: Some("./b".into()),
            line: Some(2),
        });
        assert_eq!(g.edges.len(), 2);
    }

    #[test]
    fn check_edges_reference_known_nodes_catches_dangling_edge() {
        let mut g = DependencyGraph::new();
        g.nodes.insert("a.ts".into(), node("a.ts", NodeKind::Internal));
        g.edges.push(Edge {
            from: "a.ts".into(),
            to: "ghost.ts".into(),
            kind: EdgeKind::Import,
            specifier: None,
            line: None,
        });
        assert!(g.check_edges_reference_known_nodes().is_err());
    }
}
