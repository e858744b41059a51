use sqa_core::graph::NodeKind;
use sqa_core::PipelineConfig;
use sqa_graph::{analyze, build, AnalyzerConfig, ResolverConfig};

/// Scenario S5/S6-style end-to-end check: a small project with a real
/// import cycle and an unresolved import, run through the builder then the
/// analyzer exactly as a host would chain them (§4.8 step 5).
#[test]
fn cyclic_project_is_detected_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.ts"), "import { b } from './b';\nimport { x } from './missing';\n").unwrap();
    std::fs::write(dir.path().join("b.ts"), "import { a } from './a';\n").unwrap();

    let result = build(
        &[dir.path().join("a.ts")],
        dir.path(),
        &PipelineConfig::default(),
        &ResolverConfig::new(),
    );
    assert_eq!(result.processed_files, 2);

    let mut graph = result.graph;
    let report = analyze(&mut graph, &AnalyzerConfig::default());

    assert_eq!(report.cycles.len(), 1);
    assert!(report.cycles[0].contains(&"a.ts".to_string()));
    assert!(report.cycles[0].contains(&"b.ts".to_string()));

    assert_eq!(report.unresolved.len(), 1);
    assert_eq!(report.unresolved[0].from, "a.ts");
    assert_eq!(report.unresolved[0].specifier, "./missing");

    assert!(graph.node("missing.ts").unwrap().kind == NodeKind::Missing);
}

#[test]
fn isolated_file_with_no_imports_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("standalone.ts"), "export const x = 1;\n").unwrap();

    let result = build(
        &[dir.path().join("standalone.ts")],
        dir.path(),
        &PipelineConfig::default(),
        &ResolverConfig::new(),
    );
    let mut graph = result.graph;
    let report = analyze(&mut graph, &AnalyzerConfig::default());
    assert_eq!(report.isolated, vec!["standalone.ts".to_string()]);
}
