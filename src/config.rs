//! Configuration for the analyzer: resource paths, sentence-mark sets, and
//! the EC/EF promotion toggles.
//!
//! Mirrors the JSON-config-with-defaults pattern used elsewhere in this
//! ecosystem: a `Config` always has a working [`Default`] (no file I/O,
//! embedded dictionaries), and [`Config::from_json_file`] overlays whatever
//! keys a resource file supplies, falling back to defaults for the rest.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Runtime configuration for [`crate::analyzer::Analyzer`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// External ending dictionary path. `None` uses the embedded resource.
    #[serde(default)]
    pub res_dict_e: Option<PathBuf>,
    /// External particle dictionary path. `None` uses the embedded resource.
    #[serde(default)]
    pub res_dict_j: Option<PathBuf>,
    /// Characters that separate clauses/sentences (stripped before analysis).
    #[serde(default = "default_sentence_mark")]
    pub sentence_mark: Vec<char>,
    /// Subset of `sentence_mark` that ends a sentence (selects the EF filter).
    #[serde(default = "default_sentence_end_mark")]
    pub sentence_end_mark: Vec<char>,
    /// Whether the trailing mark narrows the POS filter at all.
    #[serde(default = "default_true")]
    pub sense_sentence_mark: bool,
    /// Promote an EC hit to satisfy an EF request when no direct EF exists.
    #[serde(default = "default_true")]
    pub ec_expand_to_ef: bool,
    /// Promote an EF hit to satisfy an EC request when no direct EC exists.
    #[serde(default = "default_true")]
    pub ef_expand_to_ec: bool,
}

fn default_sentence_mark() -> Vec<char> {
    vec![',', '.', '!', '?']
}

fn default_sentence_end_mark() -> Vec<char> {
    vec!['.', '!', '?']
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            res_dict_e: None,
            res_dict_j: None,
            sentence_mark: default_sentence_mark(),
            sentence_end_mark: default_sentence_end_mark(),
            sense_sentence_mark: default_true(),
            ec_expand_to_ef: default_true(),
            ef_expand_to_ec: default_true(),
        }
    }
}

impl Config {
    /// Load a config from a JSON file, falling back to defaults for any
    /// key the file omits. Returns [`LoadError::Config`] if the file exists
    /// but cannot be parsed as JSON; a missing file is not an error here
    /// (callers that require the file to exist should check beforehand).
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| LoadError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_source_behavior() {
        let config = Config::default();
        assert_eq!(config.sentence_mark, vec![',', '.', '!', '?']);
        assert_eq!(config.sentence_end_mark, vec!['.', '!', '?']);
        assert!(config.sense_sentence_mark);
        assert!(config.ec_expand_to_ef);
        assert!(config.ef_expand_to_ec);
        assert!(config.res_dict_e.is_none());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let json = r#"{"sense_sentence_mark": false}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(!config.sense_sentence_mark);
        assert!(config.ec_expand_to_ef);
        assert_eq!(config.sentence_mark, vec![',', '.', '!', '?']);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::from_json_file("/nonexistent/path/config.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
