//! Normative `js-*` query strings (§6): the `ts-*` family mirrored, minus the
//! type-specific keys JavaScript has no syntax for (type imports,
//! interfaces, type aliases, enums, type references, implements clauses).

pub const IMPORT_SOURCES: &str = r#"
(import_statement source: (string) @source) @import
"#;

pub const NAMED_IMPORTS: &str = r#"
(import_specifier
  name: (identifier) @name
  alias: (identifier)? @alias) @named_import
"#;

pub const DEFAULT_IMPORTS: &str = r#"
(import_clause (identifier) @name) @default_import
"#;

pub const EXPORT_DECLARATIONS: &str = r#"
(export_statement
  source: (string)? @source
  (export_clause (export_specifier name: (identifier) @export_name))?) @export
"#;

pub const EXPORT_ASSIGNMENTS: &str = r#"
(export_statement (identifier) @name) @export_assignment
"#;

pub const CLASS_DEFINITIONS: &str = r#"
(class_declaration
  name: (identifier) @class_name
  (class_heritage (extends_clause value: (_) @extends)?)?) @class
"#;

pub const FUNCTION_DEFINITIONS: &str = r#"
(function_declaration
  name: (identifier) @function_name
  parameters: (formal_parameters) @params) @function
"#;

pub const METHOD_DEFINITIONS: &str = r#"
(method_definition
  name: (property_identifier) @method_name
  parameters: (formal_parameters) @params) @method
"#;

pub const VARIABLE_DEFINITIONS: &str = r#"
(variable_declarator name: (identifier) @variable_name) @variable
"#;

pub const ARROW_FUNCTION_DEFINITIONS: &str = r#"
(variable_declarator
  name: (identifier) @function_name
  value: (arrow_function parameters: (formal_parameters) @params)) @arrow_function
"#;

pub const PROPERTY_DEFINITIONS: &str = r#"
(field_definition name: (property_identifier) @property_name) @property
"#;

pub const CALL_EXPRESSIONS: &str = r#"
(call_expression function: (identifier) @callee) @call
"#;

pub const NEW_EXPRESSIONS: &str = r#"
(new_expression constructor: (identifier) @callee) @new
"#;

pub const MEMBER_EXPRESSIONS: &str = r#"
(member_expression
  object: (identifier) @object
  property: (property_identifier) @property) @member
"#;

pub const EXTENDS_CLAUSE: &str = r#"
(extends_clause value: (identifier) @name) @extends
"#;

/// `(key, query_string)` pairs, namespaced with the `js-` prefix per §6.
pub const ALL: &[(&str, &str)] = &[
    ("js-import-sources", IMPORT_SOURCES),
    ("js-named-imports", NAMED_IMPORTS),
    ("js-default-imports", DEFAULT_IMPORTS),
    ("js-export-declarations", EXPORT_DECLARATIONS),
    ("js-export-assignments", EXPORT_ASSIGNMENTS),
    ("js-class-definitions", CLASS_DEFINITIONS),
    ("js-function-definitions", FUNCTION_DEFINITIONS),
    ("js-method-definitions", METHOD_DEFINITIONS),
    ("js-variable-definitions", VARIABLE_DEFINITIONS),
    ("js-arrow-function-definitions", ARROW_FUNCTION_DEFINITIONS),
    ("js-property-definitions", PROPERTY_DEFINITIONS),
    ("js-call-expressions", CALL_EXPRESSIONS),
    ("js-new-expressions", NEW_EXPRESSIONS),
    ("js-member-expressions", MEMBER_EXPRESSIONS),
    ("js-extends-clause", EXTENDS_CLAUSE),
];
