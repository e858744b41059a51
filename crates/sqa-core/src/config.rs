//! Internal pipeline knobs (§5 resource model defaults).
//!
//! This is *not* the "configuration loading" external collaborator that §1
//! names as out of scope — no file or environment parsing happens here. It
//! is the small set of programmatic limits the pipeline itself consults,
//! constructed once by the host and threaded through by dependency injection
//! (§9), the way `rpg-core::config::RpgConfig` is constructed once and
//! passed down through the teacher's pipeline.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Per-file timeout in milliseconds (§5 default 30s).
    pub per_file_timeout_ms: u64,
    /// Per-parse timeout in milliseconds (§5 default 30s).
    pub per_parse_timeout_ms: u64,
    /// Files larger than this are rejected before parsing (§5 default 10MB).
    pub max_file_size_bytes: u64,
    /// Soft ceiling on total memory used by one analysis run (§5 default
    /// 100MB). Advisory: enforcement is the host's responsibility.
    pub max_memory_bytes: u64,
    /// Maximum BFS depth the Dependency Graph Builder will follow from an
    /// entry file (§4.8 step 4).
    pub max_depth: u32,
    /// Width of the bounded parallelism pool used to process files
    /// concurrently (§5). `None` means "available hardware parallelism".
    pub max_parallelism: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            per_file_timeout_ms: 30_000,
            per_parse_timeout_ms: 30_000,
            max_file_size_bytes: 10 * 1024 * 1024,
            max_memory_bytes: 100 * 1024 * 1024,
            max_depth: 64,
            max_parallelism: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec_values() {
        let cfg = PipelineConfig::default();
        assert_eq!(cfg.per_file_timeout_ms, 30_000);
        assert_eq!(cfg.max_file_size_bytes, 10 * 1024 * 1024);
        assert_eq!(cfg.max_memory_bytes, 100 * 1024 * 1024);
    }
}
