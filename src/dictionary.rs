//! Dictionary store: parses tab-separated morpheme tables and builds the
//! lookup indices the candidate generator and ending matcher consult.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::LoadError;

/// One row of a dictionary resource.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphemeEntry {
    pub word: String,
    pub pos: String,
    /// Empty, or a `"+"`-joined `morph/TAG` compound expansion.
    pub pos2: String,
    pub phoneme: String,
    pub spoken: Option<f64>,
    pub writing: Option<f64>,
}

impl MorphemeEntry {
    /// Expand into the ordered `(surface, pos)` sequence this entry
    /// represents: a single pair for a simple entry, or the parsed
    /// `pos2` compound sequence otherwise.
    pub fn expand(&self) -> Vec<(String, String)> {
        if self.pos2.is_empty() {
            return vec![(self.word.clone(), self.pos.clone())];
        }
        self.pos2
            .split('+')
            .filter_map(|piece| {
                let mut parts = piece.splitn(2, '/');
                let surface = parts.next()?;
                let tag = parts.next()?;
                Some((surface.to_string(), tag.to_string()))
            })
            .collect()
    }
}

/// Immutable, read-once-built morpheme lookup table.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    by_word: HashMap<String, Vec<MorphemeEntry>>,
    last_syllables: HashSet<char>,
    jongseong_start: HashSet<char>,
}

impl Dictionary {
    /// Parse a TSV resource already in memory. Malformed rows (wrong
    /// column count, unparseable frequency fields) are logged and
    /// skipped; this constructor cannot fail, matching the embedded
    /// (compiled-in) resource use case.
    pub fn from_tsv_str(tsv: &str) -> Self {
        let mut dict = Dictionary::default();
        for (line_no, line) in tsv.lines().enumerate() {
            if line_no == 0 || line.trim().is_empty() {
                continue; // header row or blank line
            }
            match parse_row(line) {
                Some(entry) => dict.insert(entry),
                None => log::warn!("skipping malformed dictionary row {}: {line:?}", line_no + 1),
            }
        }
        dict
    }

    /// Read and parse an external TSV resource from disk. A missing or
    /// unreadable file is fatal and reported as [`LoadError::Io`].
    pub fn load_resource(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            log::error!("failed to read dictionary resource {}: {source}", path.display());
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(Self::from_tsv_str(&content))
    }

    fn insert(&mut self, entry: MorphemeEntry) {
        if let Some(last) = entry.word.chars().last() {
            self.last_syllables.insert(last);
        }
        if let Some(first) = entry.word.chars().next() {
            if (first as u32) < crate::syllable::HANGUL_BASE {
                self.jongseong_start.insert(first);
            }
        }
        self.by_word.entry(entry.word.clone()).or_default().push(entry);
    }

    /// Add a last-syllable entry that isn't implied by any dictionary row.
    /// Used for the `퍼` compensation the ㅜ-irregular rule depends on.
    pub fn add_last_syllable(&mut self, ch: char) {
        self.last_syllables.insert(ch);
    }

    pub fn lookup(&self, word: &str) -> &[MorphemeEntry] {
        self.by_word.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_last_syllable(&self, ch: char) -> bool {
        self.last_syllables.contains(&ch)
    }

    pub fn jongseong_start_contains(&self, ch: char) -> bool {
        self.jongseong_start.contains(&ch)
    }

    pub fn len(&self) -> usize {
        self.by_word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_word.is_empty()
    }
}

fn parse_row(line: &str) -> Option<MorphemeEntry> {
    let cols: Vec<&str> = line.split('\t').collect();
    if cols.len() < 4 {
        return None;
    }
    let word = cols[0].trim();
    if word.is_empty() {
        return None;
    }
    let spoken = cols.get(4).and_then(|s| parse_optional_f64(s));
    let writing = cols.get(5).and_then(|s| parse_optional_f64(s));
    Some(MorphemeEntry {
        word: word.to_string(),
        pos: cols[1].trim().to_string(),
        pos2: cols[2].trim().to_string(),
        phoneme: cols[3].trim().to_string(),
        spoken,
        writing,
    })
}

fn parse_optional_f64(field: &str) -> Option<f64> {
    let field = field.trim();
    if field.is_empty() {
        return None;
    }
    field.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "word\tpos\tpos2\tphoneme\tspoken\twriting\n\
고\tEC\t\tNUL\t100\t200\n\
다\tEF\t\tNUL\t\t\n\
으니\tEC\t\tFS\t\t\n\
ㄴ걸\tEF\t\tNUL\t\t\n\
같이\t/JKB\t같이/JKB\tNUL\t\t\n";

    #[test]
    fn parses_simple_rows() {
        let dict = Dictionary::from_tsv_str(SAMPLE);
        let hits = dict.lookup("고");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].pos, "EC");
        assert_eq!(hits[0].spoken, Some(100.0));
    }

    #[test]
    fn builds_last_syllable_index() {
        let dict = Dictionary::from_tsv_str(SAMPLE);
        assert!(dict.contains_last_syllable('고'));
        assert!(dict.contains_last_syllable('니'));
    }

    #[test]
    fn builds_jongseong_start_index_for_bare_jamo_keys() {
        let dict = Dictionary::from_tsv_str(SAMPLE);
        assert!(dict.jongseong_start_contains('ㄴ'));
        assert!(!dict.jongseong_start_contains('고'));
    }

    #[test]
    fn expands_compound_pos2() {
        let dict = Dictionary::from_tsv_str(SAMPLE);
        let entry = &dict.lookup("같이")[0];
        assert_eq!(entry.expand(), vec![("같이".to_string(), "JKB".to_string())]);
    }

    #[test]
    fn skips_malformed_rows() {
        let tsv = "word\tpos\tpos2\tphoneme\nonly\ttwo\n고\tEC\t\tNUL\n";
        let dict = Dictionary::from_tsv_str(tsv);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = Dictionary::load_resource("/nonexistent/endings.tsv").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn compensation_adds_last_syllable() {
        let mut dict = Dictionary::from_tsv_str(SAMPLE);
        assert!(!dict.contains_last_syllable('퍼'));
        dict.add_last_syllable('퍼');
        assert!(dict.contains_last_syllable('퍼'));
    }
}
