//! Graph Analyzer (§4.9): pure, thread-safe analyses over an assembled
//! `DependencyGraph`.
//!
//! Cycle detection is net-new Tarjan's SCC — `rpg-nav`'s own `cycles.rs` does
//! DFS path-search over a different graph shape, not Tarjan, and §4.9 is
//! explicit about SCC. Depth/hub/isolation/unresolved analyses are grounded
//! on that same module's general report-struct conventions (`Default`-able
//! config, serde `Report` structs).

use serde::Serialize;
use sqa_core::graph::{DependencyGraph, NodeKind};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize)]
pub struct DepthReport {
    pub max: u32,
    pub mean: f64,
    /// `histogram[d]` = number of internal nodes whose longest path to a
    /// leaf is exactly `d`.
    pub histogram: Vec<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HubEntry {
    pub node_id: String,
    pub in_degree: usize,
    pub out_degree: usize,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnresolvedEdge {
    pub from: String,
    pub specifier: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub cycles: Vec<Vec<String>>,
    pub max_cycle_length: usize,
    pub depth: DepthReport,
    pub hubs: Vec<HubEntry>,
    pub isolated: Vec<String>,
    pub unresolved: Vec<UnresolvedEdge>,
}

#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Weight on in-degree in the hub score (§4.9 default `alpha_p = 1`).
    pub alpha_p: f64,
    /// Weight on out-degree in the hub score (§4.9 default `alpha_q = 0.5`).
    pub alpha_q: f64,
    pub top_k_hubs: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            alpha_p: 1.0,
            alpha_q: 0.5,
            top_k_hubs: 10,
        }
    }
}

/// Runs every §4.9 analysis over `graph` and also writes the cycle list back
/// into `graph.metadata.cycles`, matching `GraphMetadata`'s doc comment that
/// it is "populated by the Graph Analyzer, not by the builder".
pub fn analyze(graph: &mut DependencyGraph, config: &AnalyzerConfig) -> AnalysisReport {
    let cycles = find_cycles(graph);
    let max_cycle_length = cycles.iter().map(Vec::len).max().unwrap_or(0);
    graph.metadata.cycles = cycles.clone();

    let depth = compute_depth(graph, &cycles);
    let hubs = compute_hubs(graph, config);
    let isolated = find_isolated(graph);
    let unresolved = find_unresolved(graph);

    AnalysisReport {
        cycles,
        max_cycle_length,
        depth,
        hubs,
        isolated,
        unresolved,
    }
}

/// Tarjan's strongly-connected-components algorithm. A cycle is any SCC
/// with size >= 2 (self-loops through a single node's own edge are not
/// reported — §4.9 only names multi-node cycles). Each cycle is rotated to
/// start at its lexicographically smallest node id (§4.9 "canonical
/// rotation").
fn find_cycles(graph: &DependencyGraph) -> Vec<Vec<String>> {
    struct Tarjan<'g> {
        graph: &'g DependencyGraph,
        index: HashMap<String, usize>,
        lowlink: HashMap<String, usize>,
        on_stack: HashMap<String, bool>,
        stack: Vec<String>,
        counter: usize,
        sccs: Vec<Vec<String>>,
    }

    impl<'g> Tarjan<'g> {
        fn strongconnect(&mut self, v: &str) {
            self.index.insert(v.to_string(), self.counter);
            self.lowlink.insert(v.to_string(), self.counter);
            self.counter += 1;
            self.stack.push(v.to_string());
            self.on_stack.insert(v.to_string(), true);

            let successors: Vec<String> = self.graph.out_edges(v).map(|e| e.to.clone()).collect();
            for w in successors {
                if !self.index.contains_key(&w) {
                    self.strongconnect(&w);
                    let w_low = self.lowlink[&w];
                    let v_low = self.lowlink[v];
                    self.lowlink.insert(v.to_string(), v_low.min(w_low));
                } else if *self.on_stack.get(&w).unwrap_or(&false) {
                    let w_idx = self.index[&w];
                    let v_low = self.lowlink[v];
                    self.lowlink.insert(v.to_string(), v_low.min(w_idx));
                }
            }

            if self.lowlink[v] == self.index[v] {
                let mut component = Vec::new();
                loop {
                    let w = self.stack.pop().unwrap();
                    self.on_stack.insert(w.clone(), false);
                    let is_v = w == v;
                    component.push(w);
                    if is_v {
                        break;
                    }
                }
                self.sccs.push(component);
            }
        }
    }

    let mut tarjan = Tarjan {
        graph,
        index: HashMap::new(),
        lowlink: HashMap::new(),
        on_stack: HashMap::new(),
        stack: Vec::new(),
        counter: 0,
        sccs: Vec::new(),
    };

    for id in graph.node_ids() {
        if !tarjan.index.contains_key(id) {
            tarjan.strongconnect(id);
        }
    }

    tarjan
        .sccs
        .into_iter()
        .filter(|scc| scc.len() >= 2)
        .map(|scc| canonical_rotation(graph, scc))
        .collect()
}

/// Rotates `scc` to start at its lexicographically smallest node id, then
/// walks edges within the component in edge order from there.
fn canonical_rotation(graph: &DependencyGraph, scc: Vec<String>) -> Vec<String> {
    let members: std::collections::HashSet<&String> = scc.iter().collect();
    let start = scc.iter().min().cloned().unwrap_or_default();

    let mut ordered = vec![start.clone()];
    let mut current = start;
    let mut visited = std::collections::HashSet::new();
    visited.insert(ordered[0].clone());

    while ordered.len() < scc.len() {
        let next = graph
            .out_edges(&current)
            .map(|e| &e.to)
            .find(|to| members.contains(to) && !visited.contains(*to));
        match next {
            Some(n) => {
                ordered.push(n.clone());
                visited.insert(n.clone());
                current = n.clone();
            }
            None => break,
        }
    }

    // Edge-order traversal may not reach every member (e.g. two disjoint
    // sub-paths within the same SCC); append the rest in sorted order to
    // keep the result a deterministic function of the graph.
    let mut remaining: Vec<String> = scc.into_iter().filter(|n| !visited.contains(n)).collect();
    remaining.sort();
    ordered.extend(remaining);
    ordered
}

/// Longest path to any leaf in the condensation DAG, approximated directly
/// on the original graph: nodes inside a reported cycle are treated as a
/// single unit (their internal depth is 0, since the condensation collapses
/// them), and memoized DFS with cycle-guard handles everything else.
fn compute_depth(graph: &DependencyGraph, cycles: &[Vec<String>]) -> DepthReport {
    let mut scc_of: HashMap<&str, usize> = HashMap::new();
    for (i, cycle) in cycles.iter().enumerate() {
        for id in cycle {
            scc_of.insert(id.as_str(), i);
        }
    }

    let mut memo: HashMap<String, u32> = HashMap::new();
    let mut in_progress: std::collections::HashSet<String> = std::collections::HashSet::new();

    fn depth_of(
        id: &str,
        graph: &DependencyGraph,
        scc_of: &HashMap<&str, usize>,
        memo: &mut HashMap<String, u32>,
        in_progress: &mut std::collections::HashSet<String>,
    ) -> u32 {
        if let Some(&d) = memo.get(id) {
            return d;
        }
        if in_progress.contains(id) {
            return 0;
        }
        in_progress.insert(id.to_string());

        let own_scc = scc_of.get(id);
        let mut best = 0u32;
        for edge in graph.out_edges(id) {
            if own_scc.is_some() && scc_of.get(edge.to.as_str()) == own_scc {
                continue;
            }
            let d = 1 + depth_of(&edge.to, graph, scc_of, memo, in_progress);
            best = best.max(d);
        }
        in_progress.remove(id);
        memo.insert(id.to_string(), best);
        best
    }

    let internal_ids: Vec<&String> = graph
        .nodes
        .values()
        .filter(|n| n.kind == NodeKind::Internal)
        .map(|n| &n.id)
        .collect();

    let depths: Vec<u32> = internal_ids
        .iter()
        .map(|id| depth_of(id, graph, &scc_of, &mut memo, &mut in_progress))
        .collect();

    if depths.is_empty() {
        return DepthReport::default();
    }
    let max = *depths.iter().max().unwrap();
    let mean = depths.iter().map(|&d| d as f64).sum::<f64>() / depths.len() as f64;
    let mut histogram = vec![0usize; max as usize + 1];
    for d in depths {
        histogram[d as usize] += 1;
    }
    DepthReport { max, mean, histogram }
}

fn compute_hubs(graph: &DependencyGraph, config: &AnalyzerConfig) -> Vec<HubEntry> {
    let mut entries: Vec<HubEntry> = graph
        .nodes
        .values()
        .filter(|n| n.kind == NodeKind::Internal)
        .map(|n| {
            let in_degree = graph.in_edges(&n.id).count();
            let out_degree = graph.out_edges(&n.id).count();
            let score = config.alpha_p * in_degree as f64 + config.alpha_q * out_degree as f64;
            HubEntry {
                node_id: n.id.clone(),
                in_degree,
                out_degree,
                score,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap().then_with(|| a.node_id.cmp(&b.node_id)));
    entries.truncate(config.top_k_hubs);
    entries
}

fn find_isolated(graph: &DependencyGraph) -> Vec<String> {
    graph
        .nodes
        .values()
        .filter(|n| n.kind == NodeKind::Internal)
        .filter(|n| graph.in_edges(&n.id).count() == 0 && graph.out_edges(&n.id).count() == 0)
        .map(|n| n.id.clone())
        .collect()
}

fn find_unresolved(graph: &DependencyGraph) -> Vec<UnresolvedEdge> {
    graph
        .edges
        .iter()
        .filter(|e| graph.node(&e.to).is_some_and(|n| n.kind == NodeKind::Missing))
        .map(|e| UnresolvedEdge {
            from: e.from.clone(),
            specifier: e.specifier.clone().unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqa_core::graph::{Edge, EdgeKind, Node};

    fn internal(id: &str) -> Node {
        Node {
            id: id.to_string(),
            file_path: Some(id.to_string()),
            language: None,
            kind: NodeKind::Internal,
            exists: true,
        }
    }

    fn edge(from: &str, to: &str) -> Edge {
        Edge {
            from: from.to_string(),
            to: to.to_string(),
            kind: EdgeKind::Import,
            specifier: None,
            line: None,
        }
    }

    #[test]
    fn detects_a_three_node_cycle() {
        let mut g = DependencyGraph::new();
        for id in ["a", "b", "c"] {
            g.ensure_node(internal(id));
        }
        g.add_edge(edge("a", "b"));
        g.add_edge(edge("b", "c"));
        g.add_edge(edge("c", "a"));

        let cycles = find_cycles(&g);
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0][0], "a");
        assert_eq!(cycles[0].len(), 3);
    }

    #[test]
    fn acyclic_graph_has_no_cycles() {
        let mut g = DependencyGraph::new();
        g.ensure_node(internal("a"));
        g.ensure_node(internal("b"));
        g.add_edge(edge("a", "b"));
        assert!(find_cycles(&g).is_empty());
    }

    #[test]
    fn isolated_node_has_no_edges() {
        let mut g = DependencyGraph::new();
        g.ensure_node(internal("lonely"));
        g.ensure_node(internal("a"));
        g.ensure_node(internal("b"));
        g.add_edge(edge("a", "b"));
        assert_eq!(find_isolated(&g), vec!["lonely".to_string()]);
    }

    #[test]
    fn hub_score_combines_in_and_out_degree() {
        let mut g = DependencyGraph::new();
        for id in ["hub", "a", "b", "c"] {
            g.ensure_node(internal(id));
        }
        g.add_edge(edge("a", "hub"));
        g.add_edge(edge("b", "hub"));
        g.add_edge(edge("hub", "c"));
        let hubs = compute_hubs(&g, &AnalyzerConfig::default());
        assert_eq!(hubs[0].node_id, "hub");
        assert_eq!(hubs[0].score, 2.0 * 1.0 + 1.0 * 0.5);
    }

    #[test]
    fn full_analyze_populates_graph_metadata_cycles() {
        let mut g = DependencyGraph::new();
        g.ensure_node(internal("a"));
        g.ensure_node(internal("b"));
        g.add_edge(edge("a", "b"));
        g.add_edge(edge("b", "a"));
        let report = analyze(&mut g, &AnalyzerConfig::default());
        assert_eq!(report.cycles.len(), 1);
        assert_eq!(g.metadata.cycles.len(), 1);
    }
}
