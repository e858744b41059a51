//! Custom Key Mapper (§4.5): binds a caller-chosen `userLabel -> queryKey`
//! mapping to the registry and executes it as a named bundle.

use crate::bridge::{BridgeContext, QueryBridge};
use crate::processor::TypedResult;
use crate::registry::QueryRegistry;
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct ValidateReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Data, not code: a `userLabel -> queryKey` mapping. Empty mappings are
/// legal (§4.5).
#[derive(Debug, Clone, Default)]
pub struct KeyMapper {
    mapping: HashMap<String, String>,
}

impl KeyMapper {
    pub fn new(mapping: HashMap<String, String>) -> Self {
        Self { mapping }
    }

    pub fn get_user_keys(&self) -> Vec<&str> {
        self.mapping.keys().map(String::as_str).collect()
    }

    pub fn get_query_keys(&self) -> Vec<&str> {
        self.mapping.values().map(String::as_str).collect()
    }

    /// Every target key must be registered; unknown keys are warned about,
    /// never silently dropped (§4.5).
    pub fn validate(&self, registry: &QueryRegistry) -> ValidateReport {
        let mut report = ValidateReport {
            is_valid: true,
            ..Default::default()
        };
        for (label, key) in &self.mapping {
            if !registry.has_key(key) {
                report.is_valid = false;
                report
                    .errors
                    .push(format!("unknown query key {key:?} for user label {label:?}"));
            }
        }
        report
    }

    /// Executes the mapped keys, returning results keyed by the caller's own
    /// labels. Delegates to the registry's conditional execution with every
    /// target key flagged true.
    pub fn execute(
        &self,
        bridge: &QueryBridge<'_>,
        ctx: &BridgeContext<'_, '_>,
    ) -> HashMap<String, Vec<TypedResult>> {
        self.mapping
            .iter()
            .map(|(label, key)| (label.clone(), bridge.execute(key, ctx)))
            .collect()
    }
}

/// Predefined common mappings, supplied as data per §4.5 rather than code.
pub fn predefined_mapping(name: &str) -> Option<HashMap<String, String>> {
    match name {
        "typescript-analysis" => Some(HashMap::from([
            ("imports".to_string(), "ts-import-sources".to_string()),
            ("namedImports".to_string(), "ts-named-imports".to_string()),
            ("exports".to_string(), "ts-export-declarations".to_string()),
            ("classes".to_string(), "ts-class-definitions".to_string()),
            ("functions".to_string(), "ts-function-definitions".to_string()),
        ])),
        "class-analysis" => Some(HashMap::from([
            ("classes".to_string(), "ts-class-definitions".to_string()),
            ("methods".to_string(), "ts-method-definitions".to_string()),
            ("properties".to_string(), "ts-property-definitions".to_string()),
            ("extends".to_string(), "ts-extends-clause".to_string()),
            ("implements".to_string(), "ts-implements-clause".to_string()),
        ])),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mapping_is_legal() {
        let mapper = KeyMapper::new(HashMap::new());
        assert!(mapper.get_user_keys().is_empty());
    }

    #[test]
    fn predefined_mappings_are_non_empty_data() {
        let m = predefined_mapping("typescript-analysis").unwrap();
        assert!(m.contains_key("imports"));
        assert!(predefined_mapping("unknown-name").is_none());
    }
}
