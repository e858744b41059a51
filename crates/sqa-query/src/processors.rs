//! Concrete Typed Processors (§4.4) and their registration into a
//! [`QueryRegistry`].
//!
//! Grounded on `rpg-parser/src/entities.rs` and `deps.rs` for the shape of
//! per-construct extraction (signatures, parameters, edge kinds), rebuilt to
//! run off real tree-sitter query captures per §9 Open Question (a): every
//! processor here reads named captures, never a whole-node-only pattern.
//! Capture names are deliberately consistent across the per-language query
//! modules (`@class_name`, `@function_name`, `@callee`, ...), so a single
//! processor struct instance is reused across every language family whose
//! queries share that shape.

use crate::capture::Match;
use crate::processor::{location_of, QueryContext, QueryProcessor, ResultData, TypedResult};
use crate::queries::{go, java, javascript, python, typescript};
use crate::registry::QueryRegistry;
use sqa_core::{Language, Location, Param, Signature};
use std::sync::Arc;

fn text_for(source: &str, loc: &Location) -> String {
    match (loc.byte_offset(source), loc.end_offset(source)) {
        (Some(start), Some(end)) if start <= end && end <= source.len() => {
            source[start..end].to_string()
        }
        _ => String::new(),
    }
}

fn location_any(m: &Match<'_>, candidates: &[&str]) -> Option<Location> {
    candidates.iter().find_map(|c| location_of(m, c))
}

fn strip_quotes(raw: &str) -> String {
    raw.trim_matches(|c: char| c == '"' || c == '\'' || c == '`')
        .to_string()
}

fn strip_type_prefix(raw: &str) -> String {
    raw.trim_start_matches(':').trim_start_matches("->").trim().to_string()
}

fn split_top_level(s: &str, sep: char) -> Vec<String> {
    let mut depth = 0i32;
    let mut out = Vec::new();
    let mut cur = String::new();
    for ch in s.chars() {
        match ch {
            '(' | '<' | '[' | '{' => {
                depth += 1;
                cur.push(ch);
            }
            ')' | '>' | ']' | '}' => {
                depth -= 1;
                cur.push(ch);
            }
            c if c == sep && depth == 0 => out.push(std::mem::take(&mut cur)),
            c => cur.push(c),
        }
    }
    if !cur.trim().is_empty() {
        out.push(cur);
    }
    out
}

/// Best-effort parameter-list parser. The query captures give us the whole
/// parameter list as one span, not per-parameter nodes, so this recovers
/// `{name, type}` pairs with a light text parse: `name: Type` (ts/js/python)
/// or `Type name` (java/go) or a bare identifier otherwise.
fn parse_params(raw: &str) -> Vec<Param> {
    let trimmed = raw
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(')')
        .trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    split_top_level(trimmed, ',')
        .into_iter()
        .filter_map(|piece| {
            let piece = piece.trim();
            if piece.is_empty() {
                return None;
            }
            if let Some((name, ty)) = piece.split_once(':') {
                return Some(Param {
                    name: name.trim().to_string(),
                    param_type: Some(ty.trim().to_string()),
                });
            }
            let parts: Vec<&str> = piece.split_whitespace().collect();
            if parts.len() >= 2 {
                Some(Param {
                    name: parts[parts.len() - 1].to_string(),
                    param_type: Some(parts[..parts.len() - 1].join(" ")),
                })
            } else {
                Some(Param {
                    name: piece.to_string(),
                    param_type: None,
                })
            }
        })
        .collect()
}

fn signature_from(m: &Match<'_>, source: &str, params_cap: &str, return_type_cap: &str) -> Signature {
    let parameters = m
        .capture(params_cap)
        .map(|c| parse_params(&source[c.node.byte_range()]))
        .unwrap_or_default();
    let return_type = m
        .capture(return_type_cap)
        .map(|c| strip_type_prefix(&source[c.node.byte_range()]))
        .filter(|s| !s.is_empty());
    Signature {
        parameters,
        return_type,
        type_parameters: Vec::new(),
    }
}

struct ImportSourceProcessor {
    root_candidates: &'static [&'static str],
    import_type: &'static str,
}

impl QueryProcessor for ImportSourceProcessor {
    fn process(&self, query_name: &str, matches: &[Match<'_>], ctx: &QueryContext<'_>) -> Vec<TypedResult> {
        matches
            .iter()
            .filter_map(|m| {
                let source_cap = m.capture("source")?;
                let source = strip_quotes(&ctx.source[source_cap.node.byte_range()]);
                let loc = location_any(m, self.root_candidates)?;
                let node_text = text_for(ctx.source, &loc);
                let is_relative = source.starts_with('.');
                Some(TypedResult {
                    query_name: query_name.to_string(),
                    location: loc,
                    node_text,
                    data: ResultData::ImportSource {
                        source,
                        is_relative,
                        import_type: self.import_type.to_string(),
                    },
                })
            })
            .collect()
    }
}

struct NamedImportProcessor;
impl QueryProcessor for NamedImportProcessor {
    fn process(&self, query_name: &str, matches: &[Match<'_>], ctx: &QueryContext<'_>) -> Vec<TypedResult> {
        matches
            .iter()
            .filter_map(|m| {
                let name = ctx.source[m.capture("name")?.node.byte_range()].to_string();
                let alias = m
                    .capture("alias")
                    .map(|c| ctx.source[c.node.byte_range()].to_string());
                let loc = location_of(m, "named_import")?;
                Some(TypedResult {
                    query_name: query_name.to_string(),
                    node_text: text_for(ctx.source, &loc),
                    location: loc,
                    data: ResultData::NamedImport { name, alias },
                })
            })
            .collect()
    }
}

struct DefaultImportProcessor;
impl QueryProcessor for DefaultImportProcessor {
    fn process(&self, query_name: &str, matches: &[Match<'_>], ctx: &QueryContext<'_>) -> Vec<TypedResult> {
        matches
            .iter()
            .filter_map(|m| {
                let name = ctx.source[m.capture("name")?.node.byte_range()].to_string();
                let loc = location_of(m, "default_import")?;
                Some(TypedResult {
                    query_name: query_name.to_string(),
                    node_text: text_for(ctx.source, &loc),
                    location: loc,
                    data: ResultData::DefaultImport { name },
                })
            })
            .collect()
    }
}

struct TypeImportProcessor;
impl QueryProcessor for TypeImportProcessor {
    fn process(&self, query_name: &str, matches: &[Match<'_>], ctx: &QueryContext<'_>) -> Vec<TypedResult> {
        matches
            .iter()
            .filter_map(|m| {
                let name = ctx.source[m.capture("name")?.node.byte_range()].to_string();
                let alias = m
                    .capture("alias")
                    .map(|c| ctx.source[c.node.byte_range()].to_string());
                let loc = location_of(m, "type_import")?;
                Some(TypedResult {
                    query_name: query_name.to_string(),
                    node_text: text_for(ctx.source, &loc),
                    location: loc,
                    data: ResultData::TypeImport { name, alias },
                })
            })
            .collect()
    }
}

struct ExportDeclarationProcessor;
impl QueryProcessor for ExportDeclarationProcessor {
    fn process(&self, query_name: &str, matches: &[Match<'_>], ctx: &QueryContext<'_>) -> Vec<TypedResult> {
        matches
            .iter()
            .filter_map(|m| {
                let loc = location_of(m, "export")?;
                let source = m
                    .capture("source")
                    .map(|c| strip_quotes(&ctx.source[c.node.byte_range()]));
                let export_name = m
                    .capture("export_name")
                    .map(|c| ctx.source[c.node.byte_range()].to_string());
                let export_type = if source.is_some() { "re-export" } else { "named" }.to_string();
                Some(TypedResult {
                    query_name: query_name.to_string(),
                    node_text: text_for(ctx.source, &loc),
                    location: loc,
                    data: ResultData::ExportDeclaration {
                        export_type,
                        source,
                        export_name,
                    },
                })
            })
            .collect()
    }
}

struct ExportAssignmentProcessor;
impl QueryProcessor for ExportAssignmentProcessor {
    fn process(&self, query_name: &str, matches: &[Match<'_>], ctx: &QueryContext<'_>) -> Vec<TypedResult> {
        matches
            .iter()
            .filter_map(|m| {
                let name = ctx.source[m.capture("name")?.node.byte_range()].to_string();
                let loc = location_of(m, "export_assignment")?;
                Some(TypedResult {
                    query_name: query_name.to_string(),
                    node_text: text_for(ctx.source, &loc),
                    location: loc,
                    data: ResultData::ExportAssignment { name },
                })
            })
            .collect()
    }
}

/// Shared by every `*-class-definitions`/`*-class-declarations` key.
struct ClassDefinitionProcessor;
impl QueryProcessor for ClassDefinitionProcessor {
    fn process(&self, query_name: &str, matches: &[Match<'_>], ctx: &QueryContext<'_>) -> Vec<TypedResult> {
        matches
            .iter()
            .filter_map(|m| {
                let name = ctx.source[m.capture("class_name")?.node.byte_range()].to_string();
                let extends = m
                    .capture("extends")
                    .map(|c| ctx.source[c.node.byte_range()].to_string());
                let implements: Vec<String> = m
                    .captures_named("implements")
                    .map(|c| ctx.source[c.node.byte_range()].to_string())
                    .collect();
                let loc = location_of(m, "class")?;
                Some(TypedResult {
                    query_name: query_name.to_string(),
                    node_text: text_for(ctx.source, &loc),
                    location: loc,
                    data: ResultData::ClassDefinition {
                        name,
                        extends,
                        implements,
                    },
                })
            })
            .collect()
    }
}

struct InterfaceDefinitionProcessor;
impl QueryProcessor for InterfaceDefinitionProcessor {
    fn process(&self, query_name: &str, matches: &[Match<'_>], ctx: &QueryContext<'_>) -> Vec<TypedResult> {
        matches
            .iter()
            .filter_map(|m| {
                let name = ctx.source[m.capture("interface_name")?.node.byte_range()].to_string();
                let extends: Vec<String> = m
                    .captures_named("extends")
                    .map(|c| ctx.source[c.node.byte_range()].to_string())
                    .collect();
                let loc = location_of(m, "interface")?;
                Some(TypedResult {
                    query_name: query_name.to_string(),
                    node_text: text_for(ctx.source, &loc),
                    location: loc,
                    data: ResultData::InterfaceDefinition { name, extends },
                })
            })
            .collect()
    }
}

struct FunctionDefinitionProcessor;
impl QueryProcessor for FunctionDefinitionProcessor {
    fn process(&self, query_name: &str, matches: &[Match<'_>], ctx: &QueryContext<'_>) -> Vec<TypedResult> {
        matches
            .iter()
            .filter_map(|m| {
                let name = ctx.source[m.capture("function_name")?.node.byte_range()].to_string();
                let signature = signature_from(m, ctx.source, "params", "return_type");
                let loc = location_of(m, "function")?;
                Some(TypedResult {
                    query_name: query_name.to_string(),
                    node_text: text_for(ctx.source, &loc),
                    location: loc,
                    data: ResultData::FunctionDefinition { name, signature },
                })
            })
            .collect()
    }
}

/// `parent_class` is left empty here — filled in by the Symbol Extractor
/// (§4.6), which runs this key's query scoped to a specific class's subtree
/// and therefore knows which class it ran against.
struct MethodDefinitionProcessor;
impl QueryProcessor for MethodDefinitionProcessor {
    fn process(&self, query_name: &str, matches: &[Match<'_>], ctx: &QueryContext<'_>) -> Vec<TypedResult> {
        matches
            .iter()
            .filter_map(|m| {
                let name = ctx.source[m.capture("method_name")?.node.byte_range()].to_string();
                let signature = signature_from(m, ctx.source, "params", "return_type");
                let loc = location_of(m, "method")?;
                Some(TypedResult {
                    query_name: query_name.to_string(),
                    node_text: text_for(ctx.source, &loc),
                    location: loc,
                    data: ResultData::MethodDefinition {
                        name,
                        parent_class: String::new(),
                        signature,
                    },
                })
            })
            .collect()
    }
}

struct TypeDefinitionProcessor;
impl QueryProcessor for TypeDefinitionProcessor {
    fn process(&self, query_name: &str, matches: &[Match<'_>], ctx: &QueryContext<'_>) -> Vec<TypedResult> {
        matches
            .iter()
            .filter_map(|m| {
                let name = ctx.source[m.capture("type_name")?.node.byte_range()].to_string();
                let loc = location_of(m, "type_def")?;
                Some(TypedResult {
                    query_name: query_name.to_string(),
                    node_text: text_for(ctx.source, &loc),
                    location: loc,
                    data: ResultData::TypeDefinition { name },
                })
            })
            .collect()
    }
}

struct EnumDefinitionProcessor;
impl QueryProcessor for EnumDefinitionProcessor {
    fn process(&self, query_name: &str, matches: &[Match<'_>], ctx: &QueryContext<'_>) -> Vec<TypedResult> {
        matches
            .iter()
            .filter_map(|m| {
                let name = ctx.source[m.capture("enum_name")?.node.byte_range()].to_string();
                let loc = location_of(m, "enum")?;
                Some(TypedResult {
                    query_name: query_name.to_string(),
                    node_text: text_for(ctx.source, &loc),
                    location: loc,
                    data: ResultData::EnumDefinition {
                        name,
                        members: Vec::new(),
                    },
                })
            })
            .collect()
    }
}

struct VariableDefinitionProcessor;
impl QueryProcessor for VariableDefinitionProcessor {
    fn process(&self, query_name: &str, matches: &[Match<'_>], ctx: &QueryContext<'_>) -> Vec<TypedResult> {
        matches
            .iter()
            .filter_map(|m| {
                let name = ctx.source[m.capture("variable_name")?.node.byte_range()].to_string();
                let var_type = m
                    .capture("variable_type")
                    .map(|c| strip_type_prefix(&ctx.source[c.node.byte_range()]));
                let loc = location_of(m, "variable")?;
                Some(TypedResult {
                    query_name: query_name.to_string(),
                    node_text: text_for(ctx.source, &loc),
                    location: loc,
                    data: ResultData::VariableDefinition { name, var_type },
                })
            })
            .collect()
    }
}

struct ArrowFunctionDefinitionProcessor;
impl QueryProcessor for ArrowFunctionDefinitionProcessor {
    fn process(&self, query_name: &str, matches: &[Match<'_>], ctx: &QueryContext<'_>) -> Vec<TypedResult> {
        matches
            .iter()
            .filter_map(|m| {
                let name = ctx.source[m.capture("function_name")?.node.byte_range()].to_string();
                let signature = signature_from(m, ctx.source, "params", "return_type");
                let loc = location_of(m, "arrow_function")?;
                Some(TypedResult {
                    query_name: query_name.to_string(),
                    node_text: text_for(ctx.source, &loc),
                    location: loc,
                    data: ResultData::ArrowFunctionDefinition { name, signature },
                })
            })
            .collect()
    }
}

/// `parent_class` is filled in by the Symbol Extractor, as with methods.
struct PropertyDefinitionProcessor;
impl QueryProcessor for PropertyDefinitionProcessor {
    fn process(&self, query_name: &str, matches: &[Match<'_>], ctx: &QueryContext<'_>) -> Vec<TypedResult> {
        matches
            .iter()
            .filter_map(|m| {
                let name = ctx.source[m.capture("property_name")?.node.byte_range()].to_string();
                let prop_type = m
                    .capture("property_type")
                    .map(|c| strip_type_prefix(&ctx.source[c.node.byte_range()]));
                let loc = location_of(m, "property")?;
                Some(TypedResult {
                    query_name: query_name.to_string(),
                    node_text: text_for(ctx.source, &loc),
                    location: loc,
                    data: ResultData::PropertyDefinition {
                        name,
                        parent_class: String::new(),
                        prop_type,
                    },
                })
            })
            .collect()
    }
}

struct CallExpressionProcessor;
impl QueryProcessor for CallExpressionProcessor {
    fn process(&self, query_name: &str, matches: &[Match<'_>], ctx: &QueryContext<'_>) -> Vec<TypedResult> {
        matches
            .iter()
            .filter_map(|m| {
                let callee = ctx.source[m.capture("callee")?.node.byte_range()].to_string();
                let loc = location_of(m, "call")?;
                Some(TypedResult {
                    query_name: query_name.to_string(),
                    node_text: text_for(ctx.source, &loc),
                    location: loc,
                    data: ResultData::CallExpression { callee },
                })
            })
            .collect()
    }
}

struct NewExpressionProcessor;
impl QueryProcessor for NewExpressionProcessor {
    fn process(&self, query_name: &str, matches: &[Match<'_>], ctx: &QueryContext<'_>) -> Vec<TypedResult> {
        matches
            .iter()
            .filter_map(|m| {
                let callee = ctx.source[m.capture("callee")?.node.byte_range()].to_string();
                let loc = location_of(m, "new")?;
                Some(TypedResult {
                    query_name: query_name.to_string(),
                    node_text: text_for(ctx.source, &loc),
                    location: loc,
                    data: ResultData::NewExpression { callee },
                })
            })
            .collect()
    }
}

struct MemberExpressionProcessor;
impl QueryProcessor for MemberExpressionProcessor {
    fn process(&self, query_name: &str, matches: &[Match<'_>], ctx: &QueryContext<'_>) -> Vec<TypedResult> {
        matches
            .iter()
            .filter_map(|m| {
                let object = ctx.source[m.capture("object")?.node.byte_range()].to_string();
                let property = ctx.source[m.capture("property")?.node.byte_range()].to_string();
                let loc = location_of(m, "member")?;
                Some(TypedResult {
                    query_name: query_name.to_string(),
                    node_text: text_for(ctx.source, &loc),
                    location: loc,
                    data: ResultData::MemberExpression { object, property },
                })
            })
            .collect()
    }
}

/// `ts-type-references`' query has no wrapper capture — the single capture
/// names the node itself, so it doubles as the location source.
struct TypeReferenceProcessor;
impl QueryProcessor for TypeReferenceProcessor {
    fn process(&self, query_name: &str, matches: &[Match<'_>], ctx: &QueryContext<'_>) -> Vec<TypedResult> {
        matches
            .iter()
            .filter_map(|m| {
                let cap = m.capture("type_name")?;
                let name = ctx.source[cap.node.byte_range()].to_string();
                let loc = location_of(m, "type_name")?;
                Some(TypedResult {
                    query_name: query_name.to_string(),
                    node_text: text_for(ctx.source, &loc),
                    location: loc,
                    data: ResultData::TypeReference { name },
                })
            })
            .collect()
    }
}

struct ExtendsClauseProcessor;
impl QueryProcessor for ExtendsClauseProcessor {
    fn process(&self, query_name: &str, matches: &[Match<'_>], ctx: &QueryContext<'_>) -> Vec<TypedResult> {
        matches
            .iter()
            .filter_map(|m| {
                let name = ctx.source[m.capture("name")?.node.byte_range()].to_string();
                let loc = location_of(m, "extends")?;
                Some(TypedResult {
                    query_name: query_name.to_string(),
                    node_text: text_for(ctx.source, &loc),
                    location: loc,
                    data: ResultData::ExtendsClause { name },
                })
            })
            .collect()
    }
}

struct ImplementsClauseProcessor;
impl QueryProcessor for ImplementsClauseProcessor {
    fn process(&self, query_name: &str, matches: &[Match<'_>], ctx: &QueryContext<'_>) -> Vec<TypedResult> {
        matches
            .iter()
            .filter_map(|m| {
                let name = ctx.source[m.capture("name")?.node.byte_range()].to_string();
                let loc = location_of(m, "implements")?;
                Some(TypedResult {
                    query_name: query_name.to_string(),
                    node_text: text_for(ctx.source, &loc),
                    location: loc,
                    data: ResultData::ImplementsClause { name },
                })
            })
            .collect()
    }
}

struct PythonFromImportProcessor;
impl QueryProcessor for PythonFromImportProcessor {
    fn process(&self, query_name: &str, matches: &[Match<'_>], ctx: &QueryContext<'_>) -> Vec<TypedResult> {
        matches
            .iter()
            .filter_map(|m| {
                let module_cap = m.capture("module")?;
                let module = ctx.source[module_cap.node.byte_range()].to_string();
                let names: Vec<String> = m
                    .captures_named("name")
                    .map(|c| ctx.source[c.node.byte_range()].to_string())
                    .collect();
                let relative = m.capture("wildcard").is_some() || module.starts_with('.');
                let loc = location_of(m, "from_import")?;
                Some(TypedResult {
                    query_name: query_name.to_string(),
                    node_text: text_for(ctx.source, &loc),
                    location: loc,
                    data: ResultData::PythonFromImport {
                        module,
                        names,
                        relative,
                    },
                })
            })
            .collect()
    }
}

struct PythonImportAsProcessor;
impl QueryProcessor for PythonImportAsProcessor {
    fn process(&self, query_name: &str, matches: &[Match<'_>], ctx: &QueryContext<'_>) -> Vec<TypedResult> {
        matches
            .iter()
            .filter_map(|m| {
                let name = ctx.source[m.capture("name")?.node.byte_range()].to_string();
                let alias = ctx.source[m.capture("alias")?.node.byte_range()].to_string();
                let loc = location_of(m, "import_as")?;
                Some(TypedResult {
                    query_name: query_name.to_string(),
                    node_text: text_for(ctx.source, &loc),
                    location: loc,
                    data: ResultData::PythonImportAs { name, alias },
                })
            })
            .collect()
    }
}

/// Registers every normative query key (§6) with its processor and
/// language support. Call once per `QueryRegistry` the host builds.
pub fn register_default_processors(registry: &QueryRegistry) {
    use Language::*;

    let class_def = Arc::new(ClassDefinitionProcessor);
    let interface_def = Arc::new(InterfaceDefinitionProcessor);
    let function_def = Arc::new(FunctionDefinitionProcessor);
    let method_def = Arc::new(MethodDefinitionProcessor);
    let type_def = Arc::new(TypeDefinitionProcessor);
    let enum_def = Arc::new(EnumDefinitionProcessor);
    let variable_def = Arc::new(VariableDefinitionProcessor);
    let call_expr = Arc::new(CallExpressionProcessor);

    macro_rules! reg {
        ($key:expr, $proc:expr, $langs:expr) => {
            registry
                .register($key, $proc, $langs, 50, $key)
                .expect("static registration is well-formed");
        };
    }

    // TypeScript (also covers Tsx, same grammar family).
    reg!(
        typescript::ALL[0].0,
        Arc::new(ImportSourceProcessor {
            root_candidates: &["import"],
            import_type: "static",
        }),
        vec![TypeScript, Tsx]
    );
    reg!(typescript::ALL[1].0, Arc::new(NamedImportProcessor), vec![TypeScript, Tsx]);
    reg!(typescript::ALL[2].0, Arc::new(DefaultImportProcessor), vec![TypeScript, Tsx]);
    reg!(typescript::ALL[3].0, Arc::new(TypeImportProcessor), vec![TypeScript, Tsx]);
    reg!(typescript::ALL[4].0, Arc::new(ExportDeclarationProcessor), vec![TypeScript, Tsx]);
    reg!(typescript::ALL[5].0, Arc::new(ExportAssignmentProcessor), vec![TypeScript, Tsx]);
    reg!(typescript::ALL[6].0, class_def.clone(), vec![TypeScript, Tsx]);
    reg!(typescript::ALL[7].0, interface_def.clone(), vec![TypeScript, Tsx]);
    reg!(typescript::ALL[8].0, function_def.clone(), vec![TypeScript, Tsx]);
    reg!(typescript::ALL[9].0, method_def.clone(), vec![TypeScript, Tsx]);
    reg!(typescript::ALL[10].0, type_def.clone(), vec![TypeScript, Tsx]);
    reg!(typescript::ALL[11].0, enum_def.clone(), vec![TypeScript, Tsx]);
    reg!(typescript::ALL[12].0, variable_def.clone(), vec![TypeScript, Tsx]);
    reg!(typescript::ALL[13].0, Arc::new(ArrowFunctionDefinitionProcessor), vec![TypeScript, Tsx]);
    reg!(typescript::ALL[14].0, Arc::new(PropertyDefinitionProcessor), vec![TypeScript, Tsx]);
    reg!(typescript::ALL[15].0, call_expr.clone(), vec![TypeScript, Tsx]);
    reg!(typescript::ALL[16].0, Arc::new(NewExpressionProcessor), vec![TypeScript, Tsx]);
    reg!(typescript::ALL[17].0, Arc::new(MemberExpressionProcessor), vec![TypeScript, Tsx]);
    reg!(typescript::ALL[18].0, Arc::new(TypeReferenceProcessor), vec![TypeScript, Tsx]);
    reg!(typescript::ALL[19].0, Arc::new(ExtendsClauseProcessor), vec![TypeScript, Tsx]);
    reg!(typescript::ALL[20].0, Arc::new(ImplementsClauseProcessor), vec![TypeScript, Tsx]);

    // JavaScript (also covers Jsx).
    reg!(
        javascript::ALL[0].0,
        Arc::new(ImportSourceProcessor {
            root_candidates: &["import"],
            import_type: "static",
        }),
        vec![JavaScript, Jsx]
    );
    reg!(javascript::ALL[1].0, Arc::new(NamedImportProcessor), vec![JavaScript, Jsx]);
    reg!(javascript::ALL[2].0, Arc::new(DefaultImportProcessor), vec![JavaScript, Jsx]);
    reg!(javascript::ALL[3].0, Arc::new(ExportDeclarationProcessor), vec![JavaScript, Jsx]);
    reg!(javascript::ALL[4].0, Arc::new(ExportAssignmentProcessor), vec![JavaScript, Jsx]);
    reg!(javascript::ALL[5].0, class_def.clone(), vec![JavaScript, Jsx]);
    reg!(javascript::ALL[6].0, function_def.clone(), vec![JavaScript, Jsx]);
    reg!(javascript::ALL[7].0, method_def.clone(), vec![JavaScript, Jsx]);
    reg!(javascript::ALL[8].0, variable_def.clone(), vec![JavaScript, Jsx]);
    reg!(javascript::ALL[9].0, Arc::new(ArrowFunctionDefinitionProcessor), vec![JavaScript, Jsx]);
    reg!(javascript::ALL[10].0, Arc::new(PropertyDefinitionProcessor), vec![JavaScript, Jsx]);
    reg!(javascript::ALL[11].0, call_expr.clone(), vec![JavaScript, Jsx]);
    reg!(javascript::ALL[12].0, Arc::new(NewExpressionProcessor), vec![JavaScript, Jsx]);
    reg!(javascript::ALL[13].0, Arc::new(MemberExpressionProcessor), vec![JavaScript, Jsx]);
    reg!(javascript::ALL[14].0, Arc::new(ExtendsClauseProcessor), vec![JavaScript, Jsx]);

    // Java.
    reg!(
        java::ALL[0].0,
        Arc::new(ImportSourceProcessor {
            root_candidates: &["import"],
            import_type: "import",
        }),
        vec![Java]
    );
    reg!(
        java::ALL[1].0,
        Arc::new(ImportSourceProcessor {
            root_candidates: &["import_statement"],
            import_type: "import",
        }),
        vec![Java]
    );
    reg!(
        java::ALL[2].0,
        Arc::new(ImportSourceProcessor {
            root_candidates: &["static_import"],
            import_type: "static",
        }),
        vec![Java]
    );
    reg!(
        java::ALL[3].0,
        Arc::new(ImportSourceProcessor {
            root_candidates: &["wildcard_import"],
            import_type: "wildcard",
        }),
        vec![Java]
    );
    reg!(java::ALL[4].0, class_def.clone(), vec![Java]);
    reg!(java::ALL[5].0, interface_def.clone(), vec![Java]);
    reg!(java::ALL[6].0, enum_def.clone(), vec![Java]);
    reg!(java::ALL[7].0, method_def.clone(), vec![Java]);

    // Python.
    reg!(
        python::ALL[0].0,
        Arc::new(ImportSourceProcessor {
            root_candidates: &["import"],
            import_type: "import",
        }),
        vec![Python]
    );
    reg!(
        python::ALL[1].0,
        Arc::new(ImportSourceProcessor {
            root_candidates: &["import_statement"],
            import_type: "import",
        }),
        vec![Python]
    );
    reg!(python::ALL[2].0, Arc::new(PythonFromImportProcessor), vec![Python]);
    reg!(python::ALL[3].0, Arc::new(PythonImportAsProcessor), vec![Python]);
    reg!(python::ALL[4].0, function_def.clone(), vec![Python]);
    reg!(python::ALL[5].0, class_def.clone(), vec![Python]);
    reg!(python::ALL[6].0, method_def.clone(), vec![Python]);
    reg!(python::ALL[7].0, variable_def.clone(), vec![Python]);

    // Go.
    reg!(
        go::ALL[0].0,
        Arc::new(ImportSourceProcessor {
            root_candidates: &["import"],
            import_type: "import",
        }),
        vec![Go]
    );
    reg!(go::ALL[1].0, function_def.clone(), vec![Go]);
    reg!(go::ALL[2].0, method_def.clone(), vec![Go]);
    reg!(go::ALL[3].0, type_def.clone(), vec![Go]);
    reg!(go::ALL[4].0, variable_def.clone(), vec![Go]);
    reg!(go::ALL[5].0, call_expr.clone(), vec![Go]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{BridgeContext, QueryBridge};
    use crate::engine::QueryEngine;
    use crate::grammar::grammar_for;
    use tree_sitter::Parser;

    fn parse(language: Language, source: &str) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser.set_language(&grammar_for(language).unwrap()).unwrap();
        parser.parse(source, None).unwrap()
    }

    #[test]
    fn extracts_typescript_class_and_function() {
        let engine = QueryEngine::new();
        let registry = QueryRegistry::new();
        register_default_processors(&registry);
        let bridge = QueryBridge::new(&engine, &registry);
        let source = "export class Greeter {\n  greet(name: string): string {\n    return name;\n  }\n}\n\nfunction standalone(x: number): number {\n  return x;\n}\n";
        let tree = parse(Language::TypeScript, source);
        let ctx = BridgeContext {
            tree: &tree,
            language: Language::TypeScript,
            source,
            file_path: "greeter.ts",
        };
        let classes = bridge.execute("ts-class-definitions", &ctx);
        assert_eq!(classes.len(), 1);
        match &classes[0].data {
            ResultData::ClassDefinition { name, .. } => assert_eq!(name, "Greeter"),
            _ => panic!("wrong variant"),
        }
        let functions = bridge.execute("ts-function-definitions", &ctx);
        assert_eq!(functions.len(), 1);
        match &functions[0].data {
            ResultData::FunctionDefinition { name, signature } => {
                assert_eq!(name, "standalone");
                assert_eq!(signature.parameters.len(), 1);
                assert_eq!(signature.parameters[0].name, "x");
                assert_eq!(signature.return_type.as_deref(), Some("number"));
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn extracts_python_from_import_names() {
        let engine = QueryEngine::new();
        let registry = QueryRegistry::new();
        register_default_processors(&registry);
        let bridge = QueryBridge::new(&engine, &registry);
        let source = "from typing import List, Optional\n";
        let tree = parse(Language::Python, source);
        let ctx = BridgeContext {
            tree: &tree,
            language: Language::Python,
            source,
            file_path: "m.py",
        };
        let imports = bridge.execute("python-from-imports", &ctx);
        assert_eq!(imports.len(), 1);
        match &imports[0].data {
            ResultData::PythonFromImport { module, names, .. } => {
                assert_eq!(module, "typing");
                assert!(names.contains(&"List".to_string()));
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn parse_params_handles_typed_and_bare_styles() {
        assert_eq!(parse_params("(x: number, y: string)").len(), 2);
        assert_eq!(parse_params("(String name, int id)")[0].name, "name");
        assert_eq!(parse_params("()").len(), 0);
    }
}
