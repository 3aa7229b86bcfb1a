//! Cross-cutting error types for Tanager.
//!
//! Loader, config and web errors (`LoadError`, `ConfigError`, `WebError`) live
//! in their own crates; the binary collects them with `anyhow`.

use thiserror::Error;

/// Errors raised while building domain values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (empty sample, non-finite values, negative spread).
    #[error("Validation error: {0}")]
    Validation(String),
}
