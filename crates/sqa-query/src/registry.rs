//! Query Registry & Engine (§4.2).
//!
//! Net-new: the teacher workspace has no generic processor registry (its
//! paradigm query engine hard-codes entity/dep query handling inline). The
//! shape here follows §9's redesign guidance directly: explicit dependency
//! injection (the registry is a plain struct built once and passed around,
//! not a global singleton) and a metrics ring buffer in the teacher's general
//! "plain struct holding a bounded `VecDeque`" style.

use crate::processor::{QueryContext, QueryProcessor, TypedResult};
use crate::capture::Match;
use sqa_core::Language;
use std::collections::{HashMap, HashSet, VecDeque};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Instant;
use thiserror::Error;

const METRICS_CAPACITY: usize = 100;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("declaredResultType {declared:?} does not match registration key {key:?}")]
    ResultTypeMismatch { key: String, declared: String },
    #[error("priority {0} is out of range [0, 100]")]
    PriorityOutOfRange(u8),
}

pub struct RegisteredQuery {
    pub processor: Arc<dyn QueryProcessor>,
    pub supported_languages: Vec<Language>,
    pub priority: u8,
    pub declared_result_type: String,
}

#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ExecutionMetric {
    pub execution_time_ms: f64,
    pub match_count: usize,
    pub result_count: usize,
    pub error_count: usize,
}

#[derive(Debug, Default)]
pub struct ValidateReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Default)]
pub struct QueryRegistry {
    entries: RwLock<HashMap<String, RegisteredQuery>>,
    by_language: RwLock<HashMap<Language, HashSet<String>>>,
    metrics: Mutex<HashMap<String, VecDeque<ExecutionMetric>>>,
}

impl QueryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `processor` under `key`. Fails if `declared_result_type !=
    /// key`, the runtime restatement of the type-level contract that a key
    /// and its result shape agree, and if `priority` is out of `[0, 100]`.
    pub fn register(
        &self,
        key: &str,
        processor: Arc<dyn QueryProcessor>,
        supported_languages: Vec<Language>,
        priority: u8,
        declared_result_type: &str,
    ) -> Result<(), RegistryError> {
        if declared_result_type != key {
            return Err(RegistryError::ResultTypeMismatch {
                key: key.to_string(),
                declared: declared_result_type.to_string(),
            });
        }
        if priority > 100 {
            return Err(RegistryError::PriorityOutOfRange(priority));
        }
        let mut by_lang = self.by_language.write().unwrap();
        for lang in &supported_languages {
            by_lang.entry(*lang).or_default().insert(key.to_string());
        }
        drop(by_lang);
        self.entries.write().unwrap().insert(
            key.to_string(),
            RegisteredQuery {
                processor,
                supported_languages,
                priority,
                declared_result_type: declared_result_type.to_string(),
            },
        );
        Ok(())
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.entries.read().unwrap().contains_key(key)
    }

    fn supports(&self, key: &str, language: Language) -> bool {
        self.entries
            .read()
            .unwrap()
            .get(key)
            .is_some_and(|e| e.supported_languages.contains(&language))
    }

    /// Verifies registration and language support, runs the processor under
    /// unwind protection, keeps only results satisfying invariant I1, records
    /// a metric, and returns the results. Never propagates an error — an
    /// unregistered key or unsupported language logs and yields `[]`.
    pub fn execute(
        &self,
        key: &str,
        matches: &[Match<'_>],
        ctx: &QueryContext<'_>,
        language: Language,
    ) -> Vec<TypedResult> {
        if !self.supports(key, language) {
            tracing::warn!(query = key, ?language, "key unregistered for language");
            self.record(key, ExecutionMetric::default());
            return Vec::new();
        }
        let processor = {
            let entries = self.entries.read().unwrap();
            entries.get(key).unwrap().processor.clone()
        };
        let started = Instant::now();
        let outcome = catch_unwind(AssertUnwindSafe(|| processor.process(key, matches, ctx)));
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        let results = match outcome {
            Ok(results) => results,
            Err(_) => {
                tracing::warn!(query = key, "processor panicked; treating as empty result");
                self.record(
                    key,
                    ExecutionMetric {
                        execution_time_ms: elapsed_ms,
                        match_count: matches.len(),
                        result_count: 0,
                        error_count: 1,
                    },
                );
                return Vec::new();
            }
        };
        let error_count = results.iter().filter(|r| !r.satisfies_query_name(key)).count();
        let results: Vec<TypedResult> = results
            .into_iter()
            .filter(|r| r.satisfies_query_name(key))
            .collect();
        self.record(
            key,
            ExecutionMetric {
                execution_time_ms: elapsed_ms,
                match_count: matches.len(),
                result_count: results.len(),
                error_count,
            },
        );
        results
    }

    fn record(&self, key: &str, metric: ExecutionMetric) {
        let mut metrics = self.metrics.lock().unwrap();
        let buf = metrics.entry(key.to_string()).or_default();
        if buf.len() == METRICS_CAPACITY {
            buf.pop_front();
        }
        buf.push_back(metric);
    }

    pub fn metrics_for(&self, key: &str) -> Vec<ExecutionMetric> {
        self.metrics
            .lock()
            .unwrap()
            .get(key)
            .map(|buf| buf.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Settle-all execution: one failing key never prevents the others from
    /// running.
    pub fn execute_multiple(
        &self,
        keys: &[&str],
        matches_by_key: &HashMap<String, Vec<Match<'_>>>,
        ctx: &QueryContext<'_>,
        language: Language,
    ) -> HashMap<String, Vec<TypedResult>> {
        keys.iter()
            .map(|&k| {
                let empty = Vec::new();
                let matches = matches_by_key.get(k).unwrap_or(&empty);
                (k.to_string(), self.execute(k, matches, ctx, language))
            })
            .collect()
    }

    /// Executes `keys` in descending-priority order, preserving that order
    /// in the returned `Vec` so a caller whose processors consult
    /// already-produced context can rely on it.
    pub fn execute_by_priority(
        &self,
        keys: &[&str],
        matches_by_key: &HashMap<String, Vec<Match<'_>>>,
        ctx: &QueryContext<'_>,
        language: Language,
        min_priority: u8,
    ) -> Vec<(String, Vec<TypedResult>)> {
        let mut ordered: Vec<(&str, u8)> = keys
            .iter()
            .filter_map(|&k| {
                let priority = self.entries.read().unwrap().get(k).map(|e| e.priority)?;
                (priority >= min_priority).then_some((k, priority))
            })
            .collect();
        ordered.sort_by(|a, b| b.1.cmp(&a.1));
        let empty = Vec::new();
        ordered
            .into_iter()
            .map(|(k, _)| {
                let matches = matches_by_key.get(k).unwrap_or(&empty);
                (k.to_string(), self.execute(k, matches, ctx, language))
            })
            .collect()
    }

    /// Runs only keys whose flag is true, returning results under the
    /// caller's own labels (§4.5's Custom Key Mapper delegates here).
    pub fn execute_conditional(
        &self,
        label_to_key: &HashMap<String, String>,
        flags: &HashMap<String, bool>,
        matches_by_key: &HashMap<String, Vec<Match<'_>>>,
        ctx: &QueryContext<'_>,
        language: Language,
    ) -> HashMap<String, Vec<TypedResult>> {
        let empty = Vec::new();
        label_to_key
            .iter()
            .filter(|(label, _)| flags.get(*label).copied().unwrap_or(false))
            .map(|(label, key)| {
                let matches = matches_by_key.get(key).unwrap_or(&empty);
                (label.clone(), self.execute(key, matches, ctx, language))
            })
            .collect()
    }

    /// Walks the registry checking key/declaredResultType agreement (already
    /// enforced at `register` time, rechecked here defensively),
    /// non-empty `supportedLanguages` (warn), and priority range (warn).
    pub fn validate(&self) -> ValidateReport {
        let mut report = ValidateReport {
            is_valid: true,
            ..Default::default()
        };
        for (key, entry) in self.entries.read().unwrap().iter() {
            if entry.declared_result_type != *key {
                report.is_valid = false;
                report.errors.push(format!(
                    "key {key:?} declares result type {:?}",
                    entry.declared_result_type
                ));
            }
            if entry.supported_languages.is_empty() {
                report
                    .warnings
                    .push(format!("key {key:?} supports no languages"));
            }
            if entry.priority > 100 {
                report
                    .warnings
                    .push(format!("key {key:?} has out-of-range priority {}", entry.priority));
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::ResultData;
    use sqa_core::Location;

    struct AlwaysOneResult;
    impl QueryProcessor for AlwaysOneResult {
        fn process(&self, query_name: &str, matches: &[Match<'_>], _ctx: &QueryContext<'_>) -> Vec<TypedResult> {
            matches
                .iter()
                .map(|_| TypedResult {
                    query_name: query_name.to_string(),
                    location: Location {
                        line: 1,
                        column: 0,
                        end_line: 1,
                        end_column: 1,
                    },
                    node_text: "x".into(),
                    data: ResultData::DefaultImport { name: "x".into() },
                })
                .collect()
        }
    }

    #[test]
    fn register_rejects_mismatched_result_type() {
        let reg = QueryRegistry::new();
        let err = reg
            .register(
                "ts-default-imports",
                Arc::new(AlwaysOneResult),
                vec![Language::TypeScript],
                50,
                "something-else",
            )
            .unwrap_err();
        assert!(matches!(err, RegistryError::ResultTypeMismatch { .. }));
    }

    #[test]
    fn execute_returns_empty_for_unsupported_language() {
        let reg = QueryRegistry::new();
        reg.register(
            "ts-default-imports",
            Arc::new(AlwaysOneResult),
            vec![Language::TypeScript],
            50,
            "ts-default-imports",
        )
        .unwrap();
        let ctx = QueryContext {
            file_path: "a.py",
            source: "",
        };
        let results = reg.execute("ts-default-imports", &[], &ctx, Language::Python);
        assert!(results.is_empty());
    }

    #[test]
    fn validate_flags_empty_language_support() {
        let reg = QueryRegistry::new();
        reg.register("k", Arc::new(AlwaysOneResult), vec![], 10, "k").unwrap();
        let report = reg.validate();
        assert!(!report.warnings.is_empty());
    }
}
