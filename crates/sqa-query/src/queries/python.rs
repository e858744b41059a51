//! Normative `python-*` query strings (§6).

pub const IMPORT_SOURCES: &str = r#"
(import_statement name: (dotted_name) @source) @import
"#;

pub const IMPORT_STATEMENTS: &str = r#"
(import_statement name: (dotted_name) @source) @import_statement
"#;

pub const FROM_IMPORTS: &str = r#"
(import_from_statement
  module_name: (_) @module
  name: (dotted_name)? @name
  name: (aliased_import name: (dotted_name) @name alias: (identifier) @alias)?
  (wildcard_import)? @wildcard) @from_import
"#;

pub const IMPORT_AS: &str = r#"
(aliased_import
  name: (dotted_name) @name
  alias: (identifier) @alias) @import_as
"#;

pub const FUNCTION_DEFINITIONS: &str = r#"
(function_definition
  name: (identifier) @function_name
  parameters: (parameters) @params
  return_type: (type)? @return_type) @function
"#;

/// Run against a class body subtree (§4.4's nested sub-query) to scope
/// results to methods rather than module-level functions.
pub const METHOD_DEFINITIONS: &str = r#"
(function_definition
  name: (identifier) @method_name
  parameters: (parameters) @params
  return_type: (type)? @return_type) @method
"#;

pub const CLASS_DEFINITIONS: &str = r#"
(class_definition
  name: (identifier) @class_name
  superclasses: (argument_list (identifier) @extends)?) @class
"#;

pub const VARIABLE_DEFINITIONS: &str = r#"
(assignment left: (identifier) @variable_name) @variable
"#;

/// `(key, query_string)` pairs, namespaced with the `python-` prefix per §6.
pub const ALL: &[(&str, &str)] = &[
    ("python-import-sources", IMPORT_SOURCES),
    ("python-import-statements", IMPORT_STATEMENTS),
    ("python-from-imports", FROM_IMPORTS),
    ("python-import-as", IMPORT_AS),
    ("python-function-definitions", FUNCTION_DEFINITIONS),
    ("python-class-definitions", CLASS_DEFINITIONS),
    ("python-method-definitions", METHOD_DEFINITIONS),
    ("python-variable-definitions", VARIABLE_DEFINITIONS),
];
