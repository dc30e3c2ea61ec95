//! Ending matcher: looks a candidate's ending surface up in a dictionary,
//! enforces its phoneme constraint against the candidate's anchor syllable,
//! and expands compound `pos2` entries into POS-tagged sequences.

use crate::candidate::Candidate;
use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::phoneme;

/// One matched analysis: the candidate that produced it, the surface/POS
/// sequence the dictionary entry expands to, and the entry's metadata
/// (carried through so [`crate::peel`] can compose it across EP layers).
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub leftover_stem: String,
    pub pos_sequence: Vec<(String, String)>,
    pub spoken: Option<f64>,
    pub writing: Option<f64>,
}

/// Look up every candidate's ending in `dict`, keep the ones whose phoneme
/// constraint the anchor satisfies and whose final POS lies in
/// `pos_filter`, expanding `pos2` compounds along the way.
///
/// When the direct hits for a candidate are empty, `config`'s EC/EF
/// promotion toggles are consulted: an EC-tagged hit may stand in for a
/// requested EF (and vice versa), relabeled but never mixed with direct
/// hits for the same candidate.
pub fn match_candidates(candidates: &[Candidate], dict: &Dictionary, pos_filter: &[&str], config: &Config) -> Vec<Match> {
    let mut out = Vec::new();
    for candidate in candidates {
        out.extend(match_one(candidate, dict, pos_filter, config));
    }
    out
}

fn match_one(candidate: &Candidate, dict: &Dictionary, pos_filter: &[&str], config: &Config) -> Vec<Match> {
    let entries = dict.lookup(&candidate.ending);
    let direct = collect_hits(candidate, entries, pos_filter);
    if !direct.is_empty() {
        return direct;
    }
    promoted_hits(candidate, entries, pos_filter, config)
}

fn collect_hits(candidate: &Candidate, entries: &[crate::dictionary::MorphemeEntry], pos_filter: &[&str]) -> Vec<Match> {
    let mut hits = Vec::new();
    for entry in entries {
        if !phoneme::check(candidate.anchor, &entry.phoneme) {
            continue;
        }
        let pos_sequence = entry.expand();
        let Some((_, last_pos)) = pos_sequence.last() else {
            continue;
        };
        if !pos_filter.contains(&last_pos.as_str()) {
            continue;
        }
        hits.push(Match {
            leftover_stem: candidate.stem.clone(),
            pos_sequence,
            spoken: entry.spoken,
            writing: entry.writing,
        });
    }
    hits
}

/// EC↔EF promotion: if the filter asked only for one of {EC, EF} and the
/// candidate's direct hits were empty, retry against the counterpart tag
/// and relabel any hits found onto the originally requested tag.
fn promoted_hits(candidate: &Candidate, entries: &[crate::dictionary::MorphemeEntry], pos_filter: &[&str], config: &Config) -> Vec<Match> {
    let mut hits = Vec::new();
    let wants_ef = pos_filter.contains(&"EF");
    let wants_ec = pos_filter.contains(&"EC");

    if wants_ef && config.ec_expand_to_ef {
        hits.extend(promote(candidate, entries, "EC", "EF"));
    }
    if wants_ec && config.ef_expand_to_ec {
        hits.extend(promote(candidate, entries, "EF", "EC"));
    }
    hits
}

fn promote(candidate: &Candidate, entries: &[crate::dictionary::MorphemeEntry], from_tag: &str, to_tag: &str) -> Vec<Match> {
    let mut hits = Vec::new();
    for entry in entries {
        if entry.pos != from_tag || !entry.pos2.is_empty() {
            continue;
        }
        if !phoneme::check(candidate.anchor, &entry.phoneme) {
            continue;
        }
        hits.push(Match {
            leftover_stem: candidate.stem.clone(),
            pos_sequence: vec![(entry.word.clone(), to_tag.to_string())],
            spoken: entry.spoken,
            writing: entry.writing,
        });
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::generate;

    const TSV: &str = "word\tpos\tpos2\tphoneme\tspoken\twriting\n\
고\tEC\t\tNUL\t\t\n\
다\tEF\t\tNUL\t\t\n\
같이\t/JKB\t같이/JKB\tNUL\t\t\n\
으니\tEC\t\tFS\t\t\n";

    fn dict() -> Dictionary {
        Dictionary::from_tsv_str(TSV)
    }

    #[test]
    fn matches_direct_hit_with_satisfied_phoneme() {
        let candidates = generate("빠르고", &["EC"]);
        let hits = match_candidates(&candidates, &dict(), &["EC"], &Config::default());
        assert!(hits.iter().any(|m| m.leftover_stem == "빠르"
            && m.pos_sequence == vec![("고".to_string(), "EC".to_string())]));
    }

    #[test]
    fn rejects_hit_whose_phoneme_constraint_fails() {
        // 으니 requires FS (a non-ㄹ jongseong anchor); 가 has no jongseong.
        let candidates = generate("가으니", &["EC"]);
        let hits = match_candidates(&candidates, &dict(), &["EC"], &Config::default());
        assert!(!hits.iter().any(|m| m.leftover_stem == "가"
            && m.pos_sequence == vec![("으니".to_string(), "EC".to_string())]));
    }

    #[test]
    fn expands_compound_pos2_entries() {
        let candidates = generate("사람같이", &["JKB"]);
        let hits = match_candidates(&candidates, &dict(), &["JKB"], &Config::default());
        assert!(hits.iter().any(|m| m.leftover_stem == "사람"
            && m.pos_sequence == vec![("같이".to_string(), "JKB".to_string())]));
    }

    #[test]
    fn promotes_ec_to_ef_when_enabled_and_no_direct_hit() {
        let candidates = generate("빠르고", &["EF"]);
        let hits = match_candidates(&candidates, &dict(), &["EF"], &Config::default());
        assert!(hits.iter().any(|m| m.leftover_stem == "빠르"
            && m.pos_sequence == vec![("고".to_string(), "EF".to_string())]));
    }

    #[test]
    fn promotion_disabled_yields_no_hits() {
        let mut config = Config::default();
        config.ec_expand_to_ef = false;
        let candidates = generate("빠르고", &["EF"]);
        let hits = match_candidates(&candidates, &dict(), &["EF"], &config);
        assert!(!hits
            .iter()
            .any(|m| m.leftover_stem == "빠르" && m.pos_sequence.iter().any(|(_, p)| p == "EF")));
    }
}
