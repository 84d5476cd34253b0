//! Core error type.
//!
//! Compilation itself never fails; these errors come from configuration
//! validation, parsing of wire names, and invariant checks in tests and
//! adapters.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("command sequence invariant violated: {0}")]
    Invariant(String),
}

/// Shorthand result type for `nav-core`.
pub type CoreResult<T> = Result<T, CoreError>;
