use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sqa_core::Language;
use sqa_query::queries::typescript;
use sqa_query::QueryEngine;
use tree_sitter::Parser;

const SAMPLE_TS: &str = r#"
import { readFile } from "fs/promises";
import type { Options } from "./options";

export interface UserRecord {
    id: number;
    name: string;
}

export class UserService {
    private cache: Map<number, UserRecord> = new Map();

    constructor(private readonly dbUrl: string) {}

    async getUser(id: number): Promise<UserRecord | undefined> {
        if (this.cache.has(id)) {
            return this.cache.get(id);
        }
        const record = await this.fetchUser(id);
        this.cache.set(id, record);
        return record;
    }

    private async fetchUser(id: number): Promise<UserRecord> {
        const raw = await readFile(`./users/${id}.json`, "utf-8");
        return JSON.parse(raw);
    }
}

export function createService(options: Options): UserService {
    return new UserService(options.dbUrl);
}
"#;

fn parse_ts(source: &str) -> tree_sitter::Tree {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())
        .expect("typescript grammar loads");
    parser.parse(source, None).expect("parses")
}

fn bench_single_query(c: &mut Criterion) {
    let engine = QueryEngine::new();
    let tree = parse_ts(SAMPLE_TS);
    c.bench_function("execute_query_ts_class_definitions", |b| {
        b.iter(|| {
            engine.execute_query(
                "ts-class-definitions",
                typescript::CLASS_DEFINITIONS,
                black_box(&tree),
                Language::TypeScript,
                black_box(SAMPLE_TS),
            )
        })
    });
}

fn bench_all_family_queries(c: &mut Criterion) {
    let engine = QueryEngine::new();
    let tree = parse_ts(SAMPLE_TS);
    c.bench_function("execute_all_typescript_queries", |b| {
        b.iter(|| {
            for (name, query) in typescript::ALL {
                engine.execute_query(name, query, black_box(&tree), Language::TypeScript, SAMPLE_TS);
            }
        })
    });
}

fn bench_parse_and_query(c: &mut Criterion) {
    let engine = QueryEngine::new();
    c.bench_function("parse_and_query_ts_imports", |b| {
        b.iter(|| {
            let tree = parse_ts(black_box(SAMPLE_TS));
            engine.execute_query(
                "ts-import-sources",
                typescript::IMPORT_SOURCES,
                &tree,
                Language::TypeScript,
                SAMPLE_TS,
            )
        })
    });
}

criterion_group!(
    benches,
    bench_single_query,
    bench_all_family_queries,
    bench_parse_and_query,
);
criterion_main!(benches);
