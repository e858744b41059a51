//! Per-file Symbol Extractor (§4.6).
//!
//! Grounded on `rpg-core/src/graph.rs`'s `Entity`/`HierarchyNode` (the
//! namePath-bearing symbol shape) and `rpg-parser`'s per-file extraction
//! entry points, rebuilt atop the query pipeline's typed results instead of
//! ad hoc AST walks.

use crate::family::family_for;
use chrono::{DateTime, Utc};
use sqa_core::{EdgeKind, Language, Location, Signature, Symbol, SymbolDependencyEdge, SymbolKind};
use sqa_query::{
    grammar_for, markdown, queries::queries_for, QueryContext, QueryEngine, QueryRegistry, ResultData,
};
use tree_sitter::Parser;

/// `{filePath, symbols, dependencies, language, timestamp}` per §4.6 step 6.
/// `language` is `None` when the extension is unrecognized (failure policy:
/// empty result, no error).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FileSymbolTable {
    pub file_path: String,
    pub symbols: Vec<Symbol>,
    pub dependencies: Vec<SymbolDependencyEdge>,
    pub language: Option<Language>,
    pub timestamp: DateTime<Utc>,
}

impl FileSymbolTable {
    fn empty(file_path: &str, language: Option<Language>, timestamp: DateTime<Utc>) -> Self {
        Self {
            file_path: file_path.to_string(),
            symbols: Vec::new(),
            dependencies: Vec::new(),
            language,
            timestamp,
        }
    }
}

pub struct SymbolExtractor {
    engine: QueryEngine,
    registry: QueryRegistry,
}

impl Default for SymbolExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolExtractor {
    pub fn new() -> Self {
        let engine = QueryEngine::new();
        let registry = QueryRegistry::new();
        sqa_query::register_default_processors(&registry);
        Self { engine, registry }
    }

    /// §4.6's per-file pipeline. Never panics or returns an error: an
    /// unrecognized extension, missing grammar, or unparsable source all
    /// yield an empty table.
    pub fn extract_file(&self, file_path: &str, source: &str) -> FileSymbolTable {
        let timestamp = Utc::now();
        let Some(language) = Language::from_path(std::path::Path::new(file_path)) else {
            tracing::warn!(file_path, "unrecognized extension, skipping");
            return FileSymbolTable::empty(file_path, None, timestamp);
        };
        if language == Language::Markdown {
            return self.extract_markdown(file_path, source, timestamp);
        }
        let Some(family) = family_for(language) else {
            return FileSymbolTable::empty(file_path, Some(language), timestamp);
        };
        let Some(grammar) = grammar_for(language) else {
            return FileSymbolTable::empty(file_path, Some(language), timestamp);
        };
        let mut parser = Parser::new();
        if parser.set_language(&grammar).is_err() {
            return FileSymbolTable::empty(file_path, Some(language), timestamp);
        }
        let Some(tree) = parser.parse(source, None) else {
            return FileSymbolTable::empty(file_path, Some(language), timestamp);
        };

        let ctx = QueryContext { file_path, source };
        let mut symbols = Vec::new();
        let mut dependencies = Vec::new();

        if let Some((class_key, class_query)) = family.class_definitions {
            let class_matches = self.engine.execute_query(class_key, class_query, &tree, language, source);
            for m in &class_matches {
                let Some(name_cap) = m.capture("class_name") else { continue };
                let class_name = source[name_cap.node.byte_range()].to_string();
                let Some(class_cap) = m.capture("class") else { continue };
                let class_node = class_cap.node;
                let location = Location::from_ts_positions(
                    (class_node.start_position().row, class_node.start_position().column),
                    (class_node.end_position().row, class_node.end_position().column),
                );
                let name_path = Symbol::join_name_path(None, &class_name);
                let symbol = Symbol {
                    kind: SymbolKind::Class,
                    name: class_name.clone(),
                    name_path: name_path.clone(),
                    file_path: file_path.to_string(),
                    location,
                    language,
                    parent_symbol: None,
                    signature: None,
                    text: Some(source[class_node.byte_range()].to_string()),
                };
                push_symbol(&mut symbols, symbol);

                // Languages with no standalone extends/implements dependency
                // keys (java, python) still expose that relationship on the
                // class match itself.
                if family.dependency_keys.is_empty() {
                    if let Some(extends_cap) = m.capture("extends") {
                        let target = source[extends_cap.node.byte_range()].to_string();
                        dependencies.push(edge_from(&name_path, &target, EdgeKind::Extends, location, None));
                    }
                    for implements_cap in m.captures_named("implements") {
                        let target = source[implements_cap.node.byte_range()].to_string();
                        dependencies.push(edge_from(&name_path, &target, EdgeKind::Implements, location, None));
                    }
                }

                if let Some((method_key, method_query)) = family.method_definitions {
                    let method_matches =
                        self.engine
                            .execute_query_on_node(method_key, method_query, class_node, language, source);
                    let results = self.registry.execute(method_key, &method_matches, &ctx, language);
                    for r in results {
                        if let ResultData::MethodDefinition { name, signature, .. } = r.data {
                            push_nested_symbol(
                                &mut symbols,
                                SymbolKind::Method,
                                name,
                                &name_path,
                                r.location,
                                language,
                                file_path,
                                Some(signature),
                                Some(r.node_text),
                            );
                        }
                    }
                }
                if let Some((property_key, property_query)) = family.property_definitions {
                    let property_matches = self.engine.execute_query_on_node(
                        property_key,
                        property_query,
                        class_node,
                        language,
                        source,
                    );
                    let results = self.registry.execute(property_key, &property_matches, &ctx, language);
                    for r in results {
                        if let ResultData::PropertyDefinition { name, .. } = r.data {
                            push_nested_symbol(
                                &mut symbols,
                                SymbolKind::Property,
                                name,
                                &name_path,
                                r.location,
                                language,
                                file_path,
                                None,
                                Some(r.node_text),
                            );
                        }
                    }
                }
            }
        }

        for &key in family.top_level_definition_keys {
            let Some((_, query_text)) = queries_for(language).iter().find(|(k, _)| *k == key) else {
                continue;
            };
            let matches = self.engine.execute_query(key, query_text, &tree, language, source);
            let results = self.registry.execute(key, &matches, &ctx, language);
            for r in results {
                let Some((kind, name, signature)) = top_level_symbol_fields(&r.data) else {
                    continue;
                };
                let name_path = Symbol::join_name_path(None, &name);
                let symbol = Symbol {
                    kind,
                    name,
                    name_path,
                    file_path: file_path.to_string(),
                    location: r.location,
                    language,
                    parent_symbol: None,
                    signature,
                    text: Some(r.node_text),
                };
                push_symbol(&mut symbols, symbol);
            }
        }

        for &key in family.dependency_keys {
            let Some((_, query_text)) = queries_for(language).iter().find(|(k, _)| *k == key) else {
                continue;
            };
            let matches = self.engine.execute_query(key, query_text, &tree, language, source);
            let results = self.registry.execute(key, &matches, &ctx, language);
            for r in results {
                let Some((kind, target)) = dependency_edge_fields(&r.data) else {
                    continue;
                };
                let from = nearest_enclosing(&symbols, &r.location).unwrap_or_else(|| format!("file:{file_path}"));
                dependencies.push(edge_from(&from, &target, kind, r.location, Some(r.node_text)));
            }
        }

        FileSymbolTable {
            file_path: file_path.to_string(),
            symbols,
            dependencies,
            language: Some(language),
            timestamp,
        }
    }

    fn extract_markdown(&self, file_path: &str, source: &str, timestamp: DateTime<Utc>) -> FileSymbolTable {
        let mut symbols = Vec::new();
        let mut stack: Vec<(u8, String)> = Vec::new();
        for h in markdown::headings(source) {
            let ResultData::MarkdownHeading { level, text, .. } = &h.data else {
                continue;
            };
            while stack.last().is_some_and(|(lvl, _)| *lvl >= *level) {
                stack.pop();
            }
            let parent = stack.last().map(|(_, path)| path.clone());
            let name_path = Symbol::join_name_path(parent.as_deref(), text);
            stack.push((*level, name_path.clone()));
            let symbol = Symbol {
                kind: SymbolKind::Heading,
                name: text.clone(),
                name_path: name_path.clone(),
                file_path: file_path.to_string(),
                location: h.location,
                language: Language::Markdown,
                parent_symbol: parent,
                signature: None,
                text: Some(h.node_text.clone()),
            };
            push_symbol(&mut symbols, symbol);
        }

        let mut dependencies = Vec::new();
        let links = markdown::links(source).into_iter().chain(markdown::wiki_links(source));
        for link in links {
            let target = match &link.data {
                ResultData::MarkdownLink { target, .. } => target.clone(),
                ResultData::MarkdownWikiLink { target } => target.clone(),
                _ => continue,
            };
            let from = nearest_enclosing(&symbols, &link.location).unwrap_or_else(|| format!("file:{file_path}"));
            dependencies.push(edge_from(&from, &target, EdgeKind::TypeReference, link.location, Some(link.node_text)));
        }

        FileSymbolTable {
            file_path: file_path.to_string(),
            symbols,
            dependencies,
            language: Some(Language::Markdown),
            timestamp,
        }
    }
}

/// Pushes `symbol`, enforcing I2's per-file `namePath` uniqueness (§3). A
/// `const f = () => {}` declarator matches both the variable-definition and
/// arrow-function-definition queries under the same `namePath`; when that
/// happens the arrow/function shape wins and the plain variable entry is
/// dropped, since it's strictly less informative (no signature).
fn push_symbol(symbols: &mut Vec<Symbol>, symbol: Symbol) {
    if let Err(e) = symbol.check_invariant() {
        tracing::warn!(error = %e, "dropping symbol violating I2");
        return;
    }
    if let Some(pos) = symbols.iter().position(|s| s.name_path == symbol.name_path) {
        match (symbols[pos].kind, symbol.kind) {
            (SymbolKind::Variable, SymbolKind::Function) => symbols[pos] = symbol,
            (SymbolKind::Function, SymbolKind::Variable) => {}
            _ => tracing::warn!(name_path = %symbol.name_path, "dropping symbol with duplicate namePath"),
        }
        return;
    }
    symbols.push(symbol);
}

#[allow(clippy::too_many_arguments)]
fn push_nested_symbol(
    symbols: &mut Vec<Symbol>,
    kind: SymbolKind,
    name: String,
    parent_name_path: &str,
    location: Location,
    language: Language,
    file_path: &str,
    signature: Option<Signature>,
    text: Option<String>,
) {
    let name_path = Symbol::join_name_path(Some(parent_name_path), &name);
    let symbol = Symbol {
        kind,
        name,
        name_path,
        file_path: file_path.to_string(),
        location,
        language,
        parent_symbol: Some(parent_name_path.to_string()),
        signature,
        text,
    };
    push_symbol(symbols, symbol);
}

fn top_level_symbol_fields(data: &ResultData) -> Option<(SymbolKind, String, Option<Signature>)> {
    match data {
        ResultData::InterfaceDefinition { name, .. } => Some((SymbolKind::Interface, name.clone(), None)),
        ResultData::FunctionDefinition { name, signature } => {
            Some((SymbolKind::Function, name.clone(), Some(signature.clone())))
        }
        ResultData::TypeDefinition { name } => Some((SymbolKind::Type, name.clone(), None)),
        ResultData::EnumDefinition { name, .. } => Some((SymbolKind::Enum, name.clone(), None)),
        ResultData::VariableDefinition { name, .. } => Some((SymbolKind::Variable, name.clone(), None)),
        ResultData::ArrowFunctionDefinition { name, signature } => {
            Some((SymbolKind::Function, name.clone(), Some(signature.clone())))
        }
        ResultData::MethodDefinition { name, signature, .. } => {
            // Go has methods but no class construct to nest them under.
            Some((SymbolKind::Method, name.clone(), Some(signature.clone())))
        }
        _ => None,
    }
}

fn dependency_edge_fields(data: &ResultData) -> Option<(EdgeKind, String)> {
    match data {
        ResultData::CallExpression { callee } => Some((EdgeKind::Call, callee.clone())),
        ResultData::NewExpression { callee } => Some((EdgeKind::Instantiation, callee.clone())),
        ResultData::MemberExpression { object, property } => {
            Some((EdgeKind::MemberAccess, format!("{object}.{property}")))
        }
        ResultData::TypeReference { name } => Some((EdgeKind::TypeReference, name.clone())),
        ResultData::ExtendsClause { name } => Some((EdgeKind::Extends, name.clone())),
        ResultData::ImplementsClause { name } => Some((EdgeKind::Implements, name.clone())),
        _ => None,
    }
}

fn edge_from(
    from: &str,
    target: &str,
    kind: EdgeKind,
    location: Location,
    context: Option<String>,
) -> SymbolDependencyEdge {
    SymbolDependencyEdge {
        from: from.to_string(),
        to: SymbolDependencyEdge::unresolved_target(target),
        kind,
        location,
        context,
    }
}

/// The symbol whose location most tightly (lexically) contains `loc`, by
/// narrowest line span — §4.6 step 5's "nearest enclosing symbol".
fn nearest_enclosing(symbols: &[Symbol], loc: &Location) -> Option<String> {
    symbols
        .iter()
        .filter(|s| s.location.contains(loc))
        .min_by_key(|s| (s.location.end_line as i64 - s.location.line as i64, s.location.end_column as i64))
        .map(|s| s.name_path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_nested_method_with_parent_symbol() {
        let extractor = SymbolExtractor::new();
        let source = "class Greeter {\n  greet(name: string): string {\n    return name;\n  }\n}\n";
        let table = extractor.extract_file("greeter.ts", source);
        assert_eq!(table.language, Some(Language::TypeScript));
        let class = table.symbols.iter().find(|s| s.kind == SymbolKind::Class).unwrap();
        assert_eq!(class.name_path, "Greeter");
        let method = table.symbols.iter().find(|s| s.kind == SymbolKind::Method).unwrap();
        assert_eq!(method.name_path, "Greeter/greet");
        assert_eq!(method.parent_symbol.as_deref(), Some("Greeter"));
        for symbol in &table.symbols {
            symbol.check_invariant().unwrap();
        }
    }

    #[test]
    fn derives_call_dependency_with_nearest_enclosing_symbol() {
        let extractor = SymbolExtractor::new();
        let source = "function outer() {\n  helper();\n}\n";
        let table = extractor.extract_file("m.ts", source);
        let call = table
            .dependencies
            .iter()
            .find(|d| d.kind == sqa_core::EdgeKind::Call)
            .unwrap();
        assert_eq!(call.from, "outer");
        assert_eq!(call.to, "/helper");
    }

    #[test]
    fn unknown_extension_returns_empty_without_error() {
        let extractor = SymbolExtractor::new();
        let table = extractor.extract_file("README", "anything");
        assert!(table.symbols.is_empty());
        assert!(table.language.is_none());
    }

    #[test]
    fn arrow_function_variable_dedupes_to_single_function_symbol() {
        let extractor = SymbolExtractor::new();
        let source = "const f = () => {\n  return 1;\n};\n";
        let table = extractor.extract_file("m.ts", source);
        let matches: Vec<&Symbol> = table.symbols.iter().filter(|s| s.name_path == "f").collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].kind, SymbolKind::Function);
    }

    #[test]
    fn markdown_headings_become_nested_symbols() {
        let extractor = SymbolExtractor::new();
        let source = "# Title\n\n## Section One\n\nSee [other](./other.md).\n";
        let table = extractor.extract_file("doc.md", source);
        assert_eq!(table.language, Some(Language::Markdown));
        let section = table.symbols.iter().find(|s| s.name == "Section One").unwrap();
        assert_eq!(section.name_path, "Title/Section One");
        assert_eq!(table.dependencies.len(), 1);
    }
}
