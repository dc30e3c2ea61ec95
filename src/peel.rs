//! Pre-final-ending peeling: recursively strips pre-final endings (EP:
//! 었, 겠, 시, ㅆ, …) off the leftover stem of an already-matched analysis,
//! prepending each layer's POS to the sequence and composing metadata.

use std::collections::HashSet;

use crate::candidate;
use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::matcher::{self, Match};

/// Maximum number of stacked pre-final endings this engine recognizes,
/// matching observed Korean morphology (e.g. 달리시겠어요: 시 + 겠).
const MAX_PEEL_DEPTH: u8 = 2;

/// Expand `base` with zero, one, or two layers of EP peeling applied to its
/// leftover stem, deduplicated on `(leftover_stem, pos_sequence)`.
pub fn peel(base: &Match, dict: &Dictionary, config: &Config) -> Vec<Match> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();
    collect(base.clone(), dict, config, 0, &mut out, &mut seen);
    out
}

fn collect(current: Match, dict: &Dictionary, config: &Config, depth: u8, out: &mut Vec<Match>, seen: &mut HashSet<(String, Vec<(String, String)>)>) {
    let key = (current.leftover_stem.clone(), current.pos_sequence.clone());
    if seen.insert(key) {
        out.push(current.clone());
    }
    if depth >= MAX_PEEL_DEPTH {
        return;
    }
    for ep_hit in ep_hits(&current.leftover_stem, dict, config) {
        let mut pos_sequence = ep_hit.pos_sequence.clone();
        pos_sequence.extend(current.pos_sequence.iter().cloned());
        let composed = Match {
            leftover_stem: ep_hit.leftover_stem.clone(),
            pos_sequence,
            spoken: compose_metadata(ep_hit.spoken, current.spoken),
            writing: compose_metadata(ep_hit.writing, current.writing),
        };
        collect(composed, dict, config, depth + 1, out, seen);
    }
}

fn ep_hits(stem: &str, dict: &Dictionary, config: &Config) -> Vec<Match> {
    let candidates = candidate::generate(stem, &["EP"]);
    matcher::match_candidates(&candidates, dict, &["EP"], config)
}

/// Per-10000 frequencies compose by multiplying and dividing back down;
/// either side missing drops the composed field entirely.
fn compose_metadata(outer: Option<f64>, inner: Option<f64>) -> Option<f64> {
    match (outer, inner) {
        (Some(a), Some(b)) => Some(a * b / 10_000.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TSV: &str = "word\tpos\tpos2\tphoneme\tspoken\twriting\n\
다\tEF\t\tNUL\t\t\n\
었\tEP\t\tFS\t5000\t5000\n\
시\tEP\t\tVO\t8000\t8000\n\
겠\tEP\t\tNUL\t6000\t6000\n\
어요\tEF\t\tNUL\t\t\n";

    fn dict() -> Dictionary {
        Dictionary::from_tsv_str(TSV)
    }

    #[test]
    fn peels_single_ep_layer() {
        let base = Match {
            leftover_stem: "먹었".to_string(),
            pos_sequence: vec![("다".to_string(), "EF".to_string())],
            spoken: None,
            writing: None,
        };
        let peeled = peel(&base, &dict(), &Config::default());
        assert!(peeled.iter().any(|m| m.leftover_stem == "먹"
            && m.pos_sequence
                == vec![("었".to_string(), "EP".to_string()), ("다".to_string(), "EF".to_string())]));
    }

    #[test]
    fn peels_two_stacked_ep_layers() {
        let base = Match {
            leftover_stem: "달리시겠".to_string(),
            pos_sequence: vec![("어요".to_string(), "EF".to_string())],
            spoken: None,
            writing: None,
        };
        let peeled = peel(&base, &dict(), &Config::default());
        assert!(peeled.iter().any(|m| {
            m.leftover_stem == "달리"
                && m.pos_sequence
                    == vec![
                        ("시".to_string(), "EP".to_string()),
                        ("겠".to_string(), "EP".to_string()),
                        ("어요".to_string(), "EF".to_string()),
                    ]
        }));
    }

    #[test]
    fn always_includes_the_unpeeled_base() {
        let base = Match {
            leftover_stem: "먹었".to_string(),
            pos_sequence: vec![("다".to_string(), "EF".to_string())],
            spoken: None,
            writing: None,
        };
        let peeled = peel(&base, &dict(), &Config::default());
        assert!(peeled.iter().any(|m| m.leftover_stem == "먹었"));
    }

    #[test]
    fn composes_spoken_and_writing_metadata() {
        let base = Match {
            leftover_stem: "먹었".to_string(),
            pos_sequence: vec![("다".to_string(), "EF".to_string())],
            spoken: Some(9000.0),
            writing: Some(9000.0),
        };
        let peeled = peel(&base, &dict(), &Config::default());
        let layered = peeled
            .iter()
            .find(|m| m.leftover_stem == "먹" && m.pos_sequence.len() == 2)
            .expect("one ep layer peeled");
        assert_eq!(layered.spoken, Some(5000.0 * 9000.0 / 10_000.0));
    }

    #[test]
    fn dedup_key_includes_leftover_stem() {
        let peeled = peel(
            &Match {
                leftover_stem: "먹었".to_string(),
                pos_sequence: vec![("다".to_string(), "EF".to_string())],
                spoken: None,
                writing: None,
            },
            &dict(),
            &Config::default(),
        );
        let mut seen = std::collections::HashSet::new();
        for m in &peeled {
            assert!(seen.insert((m.leftover_stem.clone(), m.pos_sequence.clone())));
        }
    }
}
