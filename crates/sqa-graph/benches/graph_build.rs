use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sqa_core::PipelineConfig;
use sqa_graph::{build, ResolverConfig};
use tempfile::tempdir;

/// Builds a small fan-out project on disk (one entry importing N siblings)
/// so the frontier walk has real file I/O and query work to amortize.
fn make_project(fan_out: usize) -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    let mut entry = String::new();
    for i in 0..fan_out {
        entry.push_str(&format!("import {{ v{i} }} from './mod{i}';\n"));
        std::fs::write(dir.path().join(format!("mod{i}.ts")), format!("export const v{i} = {i};\n")).unwrap();
    }
    std::fs::write(dir.path().join("entry.ts"), entry).unwrap();
    dir
}

fn bench_build_small_project(c: &mut Criterion) {
    let project = make_project(20);
    let config = PipelineConfig::default();
    let resolver_config = ResolverConfig::new();
    c.bench_function("build_graph_20_modules", |b| {
        b.iter(|| {
            let result = build(
                &[project.path().join("entry.ts")],
                project.path(),
                &config,
                &resolver_config,
            );
            black_box(result.graph.nodes.len())
        });
    });
}

criterion_group!(benches, bench_build_small_project);
criterion_main!(benches);
