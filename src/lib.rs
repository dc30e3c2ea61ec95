//! Korean ending-segmentation engine.
//!
//! Given a single eojeol (어절, a space-delimited Korean word), this crate
//! enumerates every stem⊕ending analysis the combination of dictionary
//! lookup, Hangul syllable decomposition, and the morphophonological
//! irregularity/contraction rules of standard orthography can produce.
//! Two mirrored entry points cover the two functional-morpheme classes:
//! [`analyzer::Analyzer::analyze_ending`] for endings (어미) and
//! [`analyzer::Analyzer::analyze_particle`] for particles (조사).
//!
//! # Example
//!
//! ```rust
//! use hangul_segment::{Analyzer, Config};
//!
//! let analyzer = Analyzer::new(Config::default()).expect("embedded resources load");
//! let results = analyzer.analyze_ending("빠르고");
//! assert!(results.iter().any(|r| r.leftover_stem == "빠르"));
//! ```

pub mod analyzer;
pub mod candidate;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod matcher;
pub mod peel;
pub mod phoneme;
pub mod rules;
pub mod syllable;

pub use analyzer::{AnalysisResult, Analyzer};
pub use config::Config;
pub use error::LoadError;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
