//! Symbols: declaration sites within a file, with hierarchical name paths.

use crate::language::Language;
use crate::location::Location;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolKind {
    Class,
    Interface,
    Function,
    Method,
    Property,
    Variable,
    Type,
    Enum,
    Namespace,
    Heading,
    Section,
    Paragraph,
    Tag,
}

/// A function/method parameter, `{name: String, type: Option<String>}` in
/// source terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,
}

/// Callable shape shared by functions, methods, and arrow functions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Param>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub name: String,
    /// Slash-separated hierarchical path, e.g. `UserService/getUser`. Unique
    /// within a file (invariant I2).
    pub name_path: String,
    pub file_path: String,
    pub location: Location,
    pub language: Language,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<Signature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Symbol {
    /// Joins a parent name path (if any) with a leaf name to form the child's
    /// `name_path`, maintaining invariant I2: the last segment of `name_path`
    /// equals `name`, and `parent_symbol` (if set) is a prefix of it.
    pub fn join_name_path(parent: Option<&str>, name: &str) -> String {
        match parent {
            Some(p) if !p.is_empty() => format!("{p}/{name}"),
            _ => name.to_string(),
        }
    }

    /// Checks invariant I2 against this symbol. Returns `Err` with a message
    /// describing the violation; never panics, so callers can log-and-skip.
    pub fn check_invariant(&self) -> Result<(), String> {
        let last = self.name_path.rsplit('/').next().unwrap_or(&self.name_path);
        if last != self.name {
            return Err(format!(
                "symbol {:?}: name_path {:?} does not end in name {:?}",
                self.file_path, self.name_path, self.name
            ));
        }
        if let Some(parent) = &self.parent_symbol {
            let prefix = format!("{parent}/");
            if !self.name_path.starts_with(&prefix) {
                return Err(format!(
                    "symbol {:?}: parent_symbol {:?} is not a prefix of name_path {:?}",
                    self.file_path, parent, self.name_path
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name_path: &str, parent: Option<&str>) -> Symbol {
        Symbol {
            kind: SymbolKind::Method,
            name: name_path.rsplit('/').next().unwrap().to_string(),
            name_path: name_path.to_string(),
            file_path: "svc.ts".to_string(),
            location: Location {
                line: 1,
                column: 0,
                end_line: 1,
                end_column: 1,
            },
            language: Language::TypeScript,
            parent_symbol: parent.map(str::to_string),
            signature: None,
            text: None,
        }
    }

    #[test]
    fn join_name_path_without_parent() {
        assert_eq!(Symbol::join_name_path(None, "UserService"), "UserService");
    }

    #[test]
    fn join_name_path_with_parent() {
        assert_eq!(
            Symbol::join_name_path(Some("UserService"), "getUser"),
            "UserService/getUser"
        );
    }

    #[test]
    fn invariant_holds_for_well_formed_symbol() {
        let s = sample("UserService/getUser", Some("UserService"));
        assert!(s.check_invariant().is_ok());
    }

    #[test]
    fn invariant_rejects_mismatched_leaf() {
        let mut s = sample("UserService/getUser", Some("UserService"));
        s.name = "wrongName".to_string();
        assert!(s.check_invariant().is_err());
    }

    #[test]
    fn invariant_rejects_parent_not_a_prefix() {
        let mut s = sample("UserService/getUser", Some("OtherClass"));
        s.parent_symbol = Some("OtherClass".to_string());
        s.name_path = "UserService/getUser".to_string();
        assert!(s.check_invariant().is_err());
        let _ = &mut s;
    }
}
