//! Error types for dictionary and configuration loading.
//!
//! Malformed individual dictionary rows are never represented here; those
//! are logged and skipped at the call site. `LoadError` covers only
//! whole-resource failures that should abort construction of the analyzer.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that can occur while building a [`crate::dictionary::Dictionary`]
/// or [`crate::config::Config`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dictionary resource {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
