//! Candidate generator: turns one eojeol and a split index into the set of
//! `(stem, ending)` pairs the ending matcher should try, alongside the
//! anchor syllable the phoneme constraint is checked against.
//!
//! This is the only module that calls into [`crate::rules`] — it pairs the
//! trivial character-boundary split with every rewrite `rules::expand_all`
//! produces, so the matcher never has to know rules exist at all.

use crate::rules::{self, RuleTag};
use crate::syllable::{decompose, Syllable};

/// One `(stem, ending)` pair ready for dictionary lookup, plus enough
/// context for the matcher to apply the phoneme constraint and for
/// diagnostics to trace which rule (if any) produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Byte offset in the original eojeol where this split was taken.
    pub split_at: usize,
    pub stem: String,
    pub ending: String,
    /// The syllable the ending's phoneme constraint is checked against.
    /// `None` for an empty stem (start-of-word boundary).
    pub anchor: Option<Syllable>,
    /// `None` for the trivial, un-rewritten split.
    pub rule: Option<RuleTag>,
}

/// Enumerate every split of `eojeol` and every rule-driven rewrite at each
/// split, producing one [`Candidate`] per `(split, rewrite)` pair.
/// `pos_filter` is threaded through to [`rules::expand_all`], which uses it
/// to gate DROPOUT_A/DROPOUT_EO outside EP context.
pub fn generate(eojeol: &str, pos_filter: &[&str]) -> Vec<Candidate> {
    let chars: Vec<char> = eojeol.chars().collect();
    let char_byte_offsets: Vec<usize> = {
        let mut offsets = Vec::with_capacity(chars.len() + 1);
        let mut acc = 0;
        for c in &chars {
            offsets.push(acc);
            acc += c.len_utf8();
        }
        offsets.push(acc);
        offsets
    };

    let mut out = Vec::new();
    for i in 0..=chars.len() {
        let split_at = char_byte_offsets[i];
        let stem = &eojeol[..split_at];
        let ending = &eojeol[split_at..];

        // Anchor is the stem's own last character (None at the start of
        // the word); last-character rejection is a pruning hint the
        // matcher applies, not something this generator enforces.
        let anchor = i.checked_sub(1).and_then(|j| chars.get(j)).copied().map(decompose);

        out.push(Candidate {
            split_at,
            stem: stem.to_string(),
            ending: ending.to_string(),
            anchor,
            rule: None,
        });

        for rewrite in rules::expand_all(stem, ending, pos_filter) {
            let rewritten_anchor = rewrite.stem.chars().last().map(decompose);
            out.push(Candidate {
                split_at,
                stem: rewrite.stem,
                ending: rewrite.ending,
                anchor: rewritten_anchor,
                rule: Some(rewrite.tag),
            });
        }
    }
    out
}
