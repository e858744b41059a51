//! Normative `ts-*` query strings (§6).
//!
//! Captures follow §9 Open Question (a)'s resolution: every pattern uses
//! named `@captures` for both the whole construct and its identifying name,
//! never a whole-node-only pattern — whole-node variants lose the name and
//! parameter/type information the typed processors need.

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

pub const TYPE_IMPORTS: &str = r#"
(import_statement
  "type"
  (import_clause
    (named_imports (import_specifier name: (identifier) @name alias: (identifier)? @alias)))) @type_import
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
  name: (type_identifier) @class_name
  (class_heritage
    (extends_clause value: (_) @extends)?
    (implements_clause (type_identifier) @implements)?)?) @class
"#;

pub const INTERFACE_DEFINITIONS: &str = r#"
(interface_declaration
  name: (type_identifier) @interface_name
  (extends_type_clause (type_identifier) @extends)?) @interface
"#;

pub const FUNCTION_DEFINITIONS: &str = r#"
(function_declaration
  name: (identifier) @function_name
  parameters: (formal_parameters) @params
  return_type: (type_annotation)? @return_type) @function
"#;

pub const METHOD_DEFINITIONS: &str = r#"
(method_definition
  name: (property_identifier) @method_name
  parameters: (formal_parameters) @params
  return_type: (type_annotation)? @return_type) @method
"#;

pub const TYPE_DEFINITIONS: &str = r#"
(type_alias_declaration name: (type_identifier) @type_name) @type_def
"#;

pub const ENUM_DEFINITIONS: &str = r#"
(enum_declaration name: (identifier) @enum_name) @enum
"#;

pub const VARIABLE_DEFINITIONS: &str = r#"
(variable_declarator
  name: (identifier) @variable_name
  type: (type_annotation)? @variable_type) @variable
"#;

pub const ARROW_FUNCTION_DEFINITIONS: &str = r#"
(variable_declarator
  name: (identifier) @function_name
  value: (arrow_function
    parameters: (formal_parameters) @params
    return_type: (type_annotation)? @return_type)) @arrow_function
"#;

pub const PROPERTY_DEFINITIONS: &str = r#"
(public_field_definition
  name: (property_identifier) @property_name
  type: (type_annotation)? @property_type) @property
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

pub const TYPE_REFERENCES: &str = r#"
(type_identifier) @type_name
"#;

pub const EXTENDS_CLAUSE: &str = r#"
(extends_clause value: (identifier) @name) @extends
"#;

pub const IMPLEMENTS_CLAUSE: &str = r#"
(implements_clause (type_identifier) @name) @implements
"#;

/// `(key, query_string)` pairs, namespaced with the `ts-` prefix per §6.
pub const ALL: &[(&str, &str)] = &[
    ("ts-import-sources", IMPORT_SOURCES),
    ("ts-named-imports", NAMED_IMPORTS),
    ("ts-default-imports", DEFAULT_IMPORTS),
    ("ts-type-imports", TYPE_IMPORTS),
    ("ts-export-declarations", EXPORT_DECLARATIONS),
    ("ts-export-assignments", EXPORT_ASSIGNMENTS),
    ("ts-class-definitions", CLASS_DEFINITIONS),
    ("ts-interface-definitions", INTERFACE_DEFINITIONS),
    ("ts-function-definitions", FUNCTION_DEFINITIONS),
    ("ts-method-definitions", METHOD_DEFINITIONS),
    ("ts-type-definitions", TYPE_DEFINITIONS),
    ("ts-enum-definitions", ENUM_DEFINITIONS),
    ("ts-variable-definitions", VARIABLE_DEFINITIONS),
    ("ts-arrow-function-definitions", ARROW_FUNCTION_DEFINITIONS),
    ("ts-property-definitions", PROPERTY_DEFINITIONS),
    ("ts-call-expressions", CALL_EXPRESSIONS),
    ("ts-new-expressions", NEW_EXPRESSIONS),
    ("ts-member-expressions", MEMBER_EXPRESSIONS),
    ("ts-type-references", TYPE_REFERENCES),
    ("ts-extends-clause", EXTENDS_CLAUSE),
    ("ts-implements-clause", IMPLEMENTS_CLAUSE),
];
