//! Construction-time error types.
//!
//! Per §7, the pipeline's *execution* APIs never throw — failures during a
//! run are absorbed and logged, and callers get a best-effort result back.
//! These error types are for the handful of APIs that run once, at setup
//! time (registering a processor, validating a configuration), where a
//! caller mistake is worth surfacing immediately rather than discovering it
//! mid-run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid pipeline configuration: {0}")]
    InvalidConfig(String),
}
