//! Symbol-level dependency edges and per-file raw dependency summaries.

use crate::language::Language;
use crate::location::Location;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeKind {
    Call,
    Instantiation,
    TypeReference,
    Extends,
    Implements,
    MemberAccess,
}

/// `from` is a symbol's `name_path`, or the file path for file-scoped
/// references. `to` is a best-effort local name; it may be unresolved, in
/// which case it is prefixed with `/` per §3.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolDependencyEdge {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl SymbolDependencyEdge {
    /// Marks `name` as an unresolved local reference, per §3: `to` targets
    /// that cannot be tied to a declaration in the current file are recorded
    /// as `/Name` rather than dropped.
    pub fn unresolved_target(name: &str) -> String {
        if name.starts_with('/') {
            name.to_string()
        } else {
            format!("/{name}")
        }
    }
}

/// Raw, per-file dependency summary as written by the author (§3 File
/// dependency). Specifiers are not yet resolved to file paths — that is the
/// Path Resolver's job (§4.7).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileDependency {
    pub file_path: String,
    pub language: Language,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub direct_dependencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub internal_dependencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_dependencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub builtin_dependencies: Vec<String>,
    pub exists: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_target_is_prefixed_once() {
        assert_eq!(SymbolDependencyEdge::unresolved_target("Base"), "/Base");
        assert_eq!(SymbolDependencyEdge::unresolved_target("/Base"), "/Base");
    }
}
