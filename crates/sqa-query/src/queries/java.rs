//! Normative `java-*` query strings (§6).

pub const IMPORT_SOURCES: &str = r#"
(import_declaration (scoped_identifier) @source) @import
"#;

pub const IMPORT_STATEMENTS: &str = r#"
(import_declaration (scoped_identifier) @source) @import_statement
"#;

pub const STATIC_IMPORTS: &str = r#"
(import_declaration "static" (scoped_identifier) @source) @static_import
"#;

pub const WILDCARD_IMPORTS: &str = r#"
(import_declaration (scoped_identifier) @source "*") @wildcard_import
"#;

pub const CLASS_DECLARATIONS: &str = r#"
(class_declaration
  name: (identifier) @class_name
  superclass: (superclass (type_identifier) @extends)?
  interfaces: (super_interfaces (type_list (type_identifier) @implements))?) @class
"#;

pub const INTERFACE_DECLARATIONS: &str = r#"
(interface_declaration name: (identifier) @interface_name) @interface
"#;

pub const ENUM_DECLARATIONS: &str = r#"
(enum_declaration name: (identifier) @enum_name) @enum
"#;

pub const METHOD_DECLARATIONS: &str = r#"
(method_declaration
  name: (identifier) @method_name
  parameters: (formal_parameters) @params
  type: (_)? @return_type) @method
"#;

/// `(key, query_string)` pairs, namespaced with the `java-` prefix per §6.
pub const ALL: &[(&str, &str)] = &[
    ("java-import-sources", IMPORT_SOURCES),
    ("java-import-statements", IMPORT_STATEMENTS),
    ("java-static-imports", STATIC_IMPORTS),
    ("java-wildcard-imports", WILDCARD_IMPORTS),
    ("java-class-declarations", CLASS_DECLARATIONS),
    ("java-interface-declarations", INTERFACE_DECLARATIONS),
    ("java-enum-declarations", ENUM_DECLARATIONS),
    ("java-method-declarations", METHOD_DECLARATIONS),
];
