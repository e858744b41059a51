//! `go-*` query strings.
//!
//! §6's normative query key space is "partial, normative where named" and
//! names no Go keys even though Go is in the closed language set `S_lang`.
//! These supplement the spec for closed-set completeness (symbol extraction
//! and import resolution both need Go coverage), following the same
//! `go-<family>` namespacing §6 uses for every other language. Recorded in
//! DESIGN.md as a spec supplement, not an invented feature.

pub const IMPORT_SOURCES: &str = r#"
(import_spec path: (interpreted_string_literal) @source) @import
"#;

pub const FUNCTION_DEFINITIONS: &str = r#"
(function_declaration
  name: (identifier) @function_name
  parameters: (parameter_list) @params
  result: (_)? @return_type) @function
"#;

pub const METHOD_DEFINITIONS: &str = r#"
(method_declaration
  name: (field_identifier) @method_name
  parameters: (parameter_list) @params
  result: (_)? @return_type) @method
"#;

pub const TYPE_DEFINITIONS: &str = r#"
(type_spec name: (type_identifier) @type_name) @type_def
"#;

pub const VARIABLE_DEFINITIONS: &str = r#"
(var_spec name: (identifier) @variable_name) @variable
"#;

pub const CALL_EXPRESSIONS: &str = r#"
(call_expression function: (identifier) @callee) @call
"#;

/// `(key, query_string)` pairs, namespaced with the `go-` prefix.
pub const ALL: &[(&str, &str)] = &[
    ("go-import-sources", IMPORT_SOURCES),
    ("go-function-definitions", FUNCTION_DEFINITIONS),
    ("go-method-definitions", METHOD_DEFINITIONS),
    ("go-type-definitions", TYPE_DEFINITIONS),
    ("go-variable-definitions", VARIABLE_DEFINITIONS),
    ("go-call-expressions", CALL_EXPRESSIONS),
];
