//! Path Resolver (§4.7): turns an import specifier into a classification and
//! a canonical target path.
//!
//! Net-new relative to the teacher, which stores raw import strings without
//! resolving them. Grounded on
//! `other_examples/87783db9_MonsieurBarti-code-graph-ai__src-resolver-mod.rs.rs`'s
//! classification table and resolution order, reimplemented with
//! `std::path` + file-existence probes to stay on the teacher's actual
//! dependency stack rather than pulling in a dedicated resolver crate.

use sqa_core::graph::NodeKind;
use std::path::{Path, PathBuf};

/// Extension search order for a specifier with no extension of its own
/// (§4.7 "Extension search"). Configurable; this is the spec's default.
const DEFAULT_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "json"];

/// Specifiers that never resolve to a project file (§4.7 Builtin row).
/// Not exhaustive — a best-effort recognition list covering the closed
/// language set's standard libraries.
const BUILTIN_MODULES: &[&str] = &[
    "fs", "path", "os", "http", "https", "net", "crypto", "util", "events", "stream", "child_process",
    "node:fs", "node:path", "node:os", "node:http", "node:https", "node:util", "node:events",
    "sys", "pathlib", "typing", "collections", "itertools", "functools", "re", "json", "datetime",
    "fmt", "strings", "strconv", "errors", "context", "time", "io", "bufio", "net/http",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Builtin,
    Relative,
    Absolute,
    Alias,
    External,
}

impl From<Classification> for NodeKind {
    fn from(c: Classification) -> Self {
        match c {
            Classification::Builtin => NodeKind::Builtin,
            Classification::External => NodeKind::External,
            // Relative/Absolute/Alias resolve to a concrete project file if
            // one exists; Resolution itself decides Internal vs Missing.
            Classification::Relative | Classification::Absolute | Classification::Alias => NodeKind::Internal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub classification: Classification,
    /// Canonical target: a project-relative path for Relative/Absolute/Alias
    /// specifiers, or the specifier itself for Builtin/External.
    pub target: String,
    pub exists: bool,
}

/// `{aliasPrefix -> replacement}` table consulted before falling back to
/// External (§4.7 Alias row).
#[derive(Debug, Clone, Default)]
pub struct ResolverConfig {
    pub aliases: Vec<(String, String)>,
    pub extensions: Vec<String>,
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self {
            aliases: Vec::new(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Resolves `spec`, imported from file `base` in a project rooted at `root`.
/// Deterministic; the only side effects are file-existence probes, and
/// those failures surface as `exists=false`, never as an error (§4.7).
pub fn resolve(spec: &str, base: &Path, root: &Path, config: &ResolverConfig) -> Resolution {
    if BUILTIN_MODULES.contains(&spec) {
        return Resolution {
            classification: Classification::Builtin,
            target: spec.to_string(),
            exists: true,
        };
    }

    if let Some(stripped) = spec.strip_prefix('.') {
        let _ = stripped;
        let base_dir = base.parent().unwrap_or(root);
        let candidate = base_dir.join(spec);
        return resolve_with_extension_search(Classification::Relative, &candidate, root, config);
    }

    if let Some(rest) = spec.strip_prefix('/') {
        let candidate = root.join(rest);
        return resolve_with_extension_search(Classification::Absolute, &candidate, root, config);
    }

    if let Some((prefix, replacement)) = config.aliases.iter().find(|(p, _)| spec.starts_with(p.as_str())) {
        let rest = &spec[prefix.len()..];
        let replaced = format!("{replacement}{rest}");
        let candidate = root.join(replaced.trim_start_matches('/'));
        return resolve_with_extension_search(Classification::Alias, &candidate, root, config);
    }

    Resolution {
        classification: Classification::External,
        target: spec.to_string(),
        exists: true,
    }
}

fn resolve_with_extension_search(
    classification: Classification,
    candidate: &Path,
    root: &Path,
    config: &ResolverConfig,
) -> Resolution {
    let relative = canonical_relative(candidate, root);

    if candidate.extension().is_some() && candidate.is_file() {
        return Resolution {
            classification,
            target: relative,
            exists: true,
        };
    }

    for ext in &config.extensions {
        let with_ext = append_extension(candidate, ext);
        if with_ext.is_file() {
            return Resolution {
                classification,
                target: canonical_relative(&with_ext, root),
                exists: true,
            };
        }
    }

    for ext in &config.extensions {
        let index = candidate.join(format!("index.{ext}"));
        if index.is_file() {
            return Resolution {
                classification,
                target: canonical_relative(&index, root),
                exists: true,
            };
        }
    }

    Resolution {
        classification,
        target: relative,
        exists: false,
    }
}

fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut s = path.as_os_str().to_os_string();
    s.push(".");
    s.push(ext);
    PathBuf::from(s)
}

/// Project-relative, `/`-separated path string for use as a graph node id.
fn canonical_relative(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn builtin_specifier_classified_verbatim() {
        let root = tempdir().unwrap();
        let base = root.path().join("src/a.ts");
        let res = resolve("node:fs", &base, root.path(), &ResolverConfig::new());
        assert_eq!(res.classification, Classification::Builtin);
        assert_eq!(res.target, "node:fs");
        assert!(res.exists);
    }

    #[test]
    fn relative_specifier_resolves_with_extension_search() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        std::fs::write(dir.path().join("src/b.ts"), "export {}").unwrap();
        let base = dir.path().join("src/a.ts");
        let res = resolve("./b", &base, dir.path(), &ResolverConfig::new());
        assert_eq!(res.classification, Classification::Relative);
        assert!(res.exists);
        assert_eq!(res.target, "src/b.ts");
    }

    #[test]
    fn relative_specifier_falls_back_to_index() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src/util")).unwrap();
        std::fs::write(dir.path().join("src/util/index.ts"), "export {}").unwrap();
        let base = dir.path().join("src/a.ts");
        let res = resolve("./util", &base, dir.path(), &ResolverConfig::new());
        assert!(res.exists);
        assert_eq!(res.target, "src/util/index.ts");
    }

    #[test]
    fn unresolvable_relative_specifier_reports_exists_false() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("src/a.ts");
        let res = resolve("./missing", &base, dir.path(), &ResolverConfig::new());
        assert_eq!(res.classification, Classification::Relative);
        assert!(!res.exists);
    }

    #[test]
    fn alias_prefix_is_replaced_before_resolution() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src/components")).unwrap();
        std::fs::write(dir.path().join("src/components/Button.ts"), "export {}").unwrap();
        let mut config = ResolverConfig::new();
        config.aliases.push(("@/".to_string(), "src/".to_string()));
        let base = dir.path().join("src/a.ts");
        let res = resolve("@/components/Button", &base, dir.path(), &config);
        assert_eq!(res.classification, Classification::Alias);
        assert!(res.exists);
    }

    #[test]
    fn bare_specifier_is_external() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("src/a.ts");
        let res = resolve("lodash", &base, dir.path(), &ResolverConfig::new());
        assert_eq!(res.classification, Classification::External);
        assert_eq!(res.target, "lodash");
    }
}
