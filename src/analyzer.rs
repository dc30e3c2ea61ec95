//! Public façade: `analyze_ending`/`analyze_particle` tie the syllable
//! codec, dictionary, rule tables, candidate generator, matcher, and
//! pre-final peeling pass together into the two segmentation entry points
//! this crate exists to provide.

use std::collections::HashSet;

use crate::candidate;
use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::error::LoadError;
use crate::matcher::{self, Match};
use crate::peel;

const ENDING_POS_FILTER_FULL: &[&str] = &["EC", "EF", "EP", "ETM", "ETN"];
const ENDING_POS_FILTER_NON_TERMINAL: &[&str] = &["EC", "ETM", "ETN"];
const ENDING_POS_FILTER_TERMINAL: &[&str] = &["EF"];

const PARTICLE_POS_FILTER_FULL: &[&str] = &["JKS", "JKC", "JKG", "JKO", "JKB", "JKV", "JKQ", "JC", "JX"];
const PARTICLE_POS_FILTER_TERMINAL: &[&str] = &["JX"];

const ENDING_RESOURCE: &str = include_str!("../dictionaries/endings.tsv");
const PARTICLE_RESOURCE: &str = include_str!("../dictionaries/particles.tsv");

/// One completed segmentation: the leftover content stem, the ordered
/// surface/POS morpheme sequence, the trailing sentence mark (if any), and
/// the composed spoken/writing frequency metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub leftover_stem: String,
    pub pos_sequence: Vec<(String, String)>,
    pub mark: Option<char>,
    pub spoken: Option<f64>,
    pub writing: Option<f64>,
}

/// Holds the loaded ending/particle dictionaries and the configuration that
/// governs sentence-mark handling and EC/EF promotion. Immutable after
/// construction; safe to share across threads.
#[derive(Debug)]
pub struct Analyzer {
    config: Config,
    dict_e: Dictionary,
    dict_j: Dictionary,
}

impl Analyzer {
    /// Build an analyzer from `config`, loading external dictionaries if
    /// configured, or falling back to the embedded built-in resources.
    pub fn new(config: Config) -> Result<Self, LoadError> {
        let mut dict_e = match &config.res_dict_e {
            Some(path) => Dictionary::load_resource(path)?,
            None => Dictionary::from_tsv_str(ENDING_RESOURCE),
        };
        let dict_j = match &config.res_dict_j {
            Some(path) => Dictionary::load_resource(path)?,
            None => Dictionary::from_tsv_str(PARTICLE_RESOURCE),
        };
        // The ㅜ-irregular rule rewrites 퍼→푸+어, a surface the ending
        // dictionary itself would never carry as a last-syllable entry.
        dict_e.add_last_syllable('퍼');
        log::debug!(
            "analyzer built: {} ending entries, {} particle entries",
            dict_e.len(),
            dict_j.len()
        );
        Ok(Self { config, dict_e, dict_j })
    }

    /// Segment `eojeol` against the ending (어미) dictionary.
    pub fn analyze_ending(&self, eojeol: &str) -> Vec<AnalysisResult> {
        let (stripped, mark) = strip_sentence_mark(eojeol, &self.config);
        let pos_filter = ending_pos_filter(mark, &self.config);

        let candidates = candidate::generate(stripped, &pos_filter);
        let matches = matcher::match_candidates(&candidates, &self.dict_e, &pos_filter, &self.config);

        let peeled: Vec<Match> = matches
            .iter()
            .flat_map(|m| peel::peel(m, &self.dict_e, &self.config))
            .collect();

        dedup_into_results(peeled, mark)
    }

    /// Segment `eojeol` against the particle (조사) dictionary. Particles
    /// never carry pre-final endings, so no peeling pass runs.
    pub fn analyze_particle(&self, eojeol: &str) -> Vec<AnalysisResult> {
        let (stripped, mark) = strip_sentence_mark(eojeol, &self.config);
        let pos_filter: &[&str] = if mark.is_some() {
            PARTICLE_POS_FILTER_TERMINAL
        } else {
            PARTICLE_POS_FILTER_FULL
        };

        let candidates = candidate::generate(stripped, pos_filter);
        let matches = matcher::match_candidates(&candidates, &self.dict_j, pos_filter, &self.config);

        dedup_into_results(matches, mark)
    }
}

fn strip_sentence_mark<'a>(eojeol: &'a str, config: &Config) -> (&'a str, Option<char>) {
    let Some(last) = eojeol.chars().last() else {
        return (eojeol, None);
    };
    if config.sentence_mark.contains(&last) {
        let cut = eojeol.len() - last.len_utf8();
        (&eojeol[..cut], Some(last))
    } else {
        (eojeol, None)
    }
}

fn ending_pos_filter(mark: Option<char>, config: &Config) -> Vec<&'static str> {
    if !config.sense_sentence_mark {
        return ENDING_POS_FILTER_FULL.to_vec();
    }
    match mark {
        Some(m) if config.sentence_end_mark.contains(&m) => ENDING_POS_FILTER_TERMINAL.to_vec(),
        _ => ENDING_POS_FILTER_NON_TERMINAL.to_vec(),
    }
}

fn dedup_into_results(matches: Vec<Match>, mark: Option<char>) -> Vec<AnalysisResult> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for m in matches {
        let key = (m.leftover_stem.clone(), m.pos_sequence.clone());
        if seen.insert(key) {
            out.push(AnalysisResult {
                leftover_stem: m.leftover_stem,
                pos_sequence: m.pos_sequence,
                mark,
                spoken: m.spoken,
                writing: m.writing,
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> Analyzer {
        Analyzer::new(Config::default()).expect("embedded resources load")
    }

    #[test]
    fn segments_regular_connective_ending() {
        let hits = analyzer().analyze_ending("빠르고");
        assert!(hits
            .iter()
            .any(|r| r.leftover_stem == "빠르" && r.pos_sequence == vec![("고".to_string(), "EC".to_string())]));
    }

    #[test]
    fn strips_terminal_mark_and_narrows_to_ef() {
        let hits = analyzer().analyze_ending("빠르다.");
        assert!(hits.iter().any(|r| {
            r.leftover_stem == "빠르"
                && r.pos_sequence == vec![("다".to_string(), "EF".to_string())]
                && r.mark == Some('.')
        }));
    }

    #[test]
    fn irr_d_yields_both_regular_and_irregular_readings() {
        let hits = analyzer().analyze_ending("걸으니");
        assert!(hits.iter().any(|r| r.leftover_stem == "걸"));
        assert!(hits.iter().any(|r| r.leftover_stem == "걷"));
    }

    #[test]
    fn irr_u_resolves_peo() {
        let hits = analyzer().analyze_ending("퍼");
        assert!(hits.iter().any(|r| r.leftover_stem == "푸"
            && r.pos_sequence == vec![("어".to_string(), "EC".to_string())]));
    }

    #[test]
    fn peels_one_ep_layer_from_meogeotda() {
        let hits = analyzer().analyze_ending("먹었다.");
        assert!(hits.iter().any(|r| {
            r.leftover_stem == "먹"
                && r.pos_sequence
                    == vec![("었".to_string(), "EP".to_string()), ("다".to_string(), "EF".to_string())]
        }));
    }

    #[test]
    fn segments_simple_particle() {
        let hits = analyzer().analyze_particle("사람은");
        assert!(hits
            .iter()
            .any(|r| r.leftover_stem == "사람" && r.pos_sequence == vec![("은".to_string(), "JX".to_string())]));
    }

    #[test]
    fn segments_compound_particle_via_pos2() {
        let hits = analyzer().analyze_particle("사람같이는");
        assert!(hits.iter().any(|r| {
            r.leftover_stem == "사람"
                && r.pos_sequence
                    == vec![("같이".to_string(), "JKB".to_string()), ("는".to_string(), "JX".to_string())]
        }));
    }

    #[test]
    fn final_sound_donates_stem_jongseong_to_bare_ending() {
        let hits = analyzer().analyze_ending("미끄러짐");
        assert!(hits.iter().any(|r| {
            r.leftover_stem == "미끄러지"
                && r.pos_sequence == vec![("ㅁ".to_string(), "ETN".to_string())]
        }));
    }

    #[test]
    fn final_sound_donates_stem_jongseong_to_terminal_ending() {
        let hits = analyzer().analyze_ending("간걸.");
        assert!(hits.iter().any(|r| {
            r.leftover_stem == "가"
                && r.pos_sequence == vec![("ㄴ걸".to_string(), "EF".to_string())]
                && r.mark == Some('.')
        }));
    }

    #[test]
    fn irr_h1_resolves_adnominal_kkamahda() {
        let hits = analyzer().analyze_ending("까만");
        assert!(hits.iter().any(|r| {
            r.leftover_stem == "까맣" && r.pos_sequence == vec![("ㄴ".to_string(), "ETM".to_string())]
        }));
    }

    #[test]
    fn final_sound_particle_donates_ending_jongseong_to_stem() {
        let hits = analyzer().analyze_particle("우린");
        assert!(hits
            .iter()
            .any(|r| r.leftover_stem == "우리" && r.pos_sequence == vec![("ㄴ".to_string(), "JX".to_string())]));
    }

    #[test]
    fn final_sound_particle_donates_stem_jongseong_to_ending() {
        let hits = analyzer().analyze_particle("절더러");
        assert!(hits.iter().any(|r| {
            r.leftover_stem == "저" && r.pos_sequence == vec![("ㄹ더러".to_string(), "JKB".to_string())]
        }));
    }

    #[test]
    fn empty_eojeol_yields_empty_result() {
        let hits = analyzer().analyze_ending("");
        assert!(hits.is_empty());
    }
}
