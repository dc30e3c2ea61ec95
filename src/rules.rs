//! Morphophonological rule tables: the ten irregularity classes and eight
//! contractions that rewrite a `(stem, ending)` split into the underlying
//! dictionary forms the ending matcher can look up verbatim.
//!
//! Every rule here is a pure trigger/rewrite pair over the tail syllable of
//! the stem and the head syllable of the ending; none of them consult the
//! dictionary themselves, that's [`crate::matcher`]'s job once a rewrite
//! has produced a candidate.

use crate::syllable::{compose, decompose, mutate, JongEdit};

/// Which rule produced a given rewrite. Kept on the candidate so the
/// pre-final peeling pass and diagnostics can tell rules apart without
/// string comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTag {
    IrrU,
    IrrD,
    IrrL,
    IrrS,
    IrrH1,
    IrrH2,
    IrrB,
    IrrEu,
    IrrLeo,
    IrrLeu,
    IrrO,
    AbbYeo,
    AbbWa,
    AbbWo,
    AbbWae,
    AbbHae,
    AbbAspirate,
    DropoutHa,
    AbbChanh,
    AbbJanh,
    DropoutA,
    DropoutEo,
    FinalSound,
}

/// A rewritten `(stem, ending)` pair produced by one rule.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatch {
    pub tag: RuleTag,
    pub stem: String,
    pub ending: String,
}

const IRR_S_TAILS: &[char] = &['그', '끄', '나', '무', '부', '이', '자', '저', '지'];

const IRR_LEO_STEMS: &[&str] = &["노르", "푸르", "누르", "바르", "이르"];

const IRR_B1_TAILS: &[char] = &[
    '가', '거', '겨', '고', '구', '기', '까', '꺼', '꼬', '나', '내', '누', '다', '더', '도', '두', '따',
    '떠', '라', '러', '려', '로', '리', '마', '매', '미', '벼', '서', '쉬', '스', '쑤', '어', '여', '오',
    '자', '저', '주', '짜', '쩌', '쪼', '쭈', '추', '타', '터', '허',
];

const IRR_EU_TAILS: &[char] = &[
    '가', '거', '까', '나', '떠', '빠', '뻐', '써', '아', '커', '터', '파', '퍼', '갔', '겄', '깠', '났',
    '떳', '빴', '뻣', '썻', '앗', '컷', '텃', '팠', '펐',
];

/// 르-final stems that take the 으-irregular rather than 러/르 irregular.
const IRR_EU_LEU_STEMS: &[&str] = &[
    "곁따라", "다다라", "뒤따라", "들러", "따라", "붙따라", "으러러", "잇따라", "장사치러", "치러",
    "곁따랐", "다다랐", "뒤따랐", "들렀", "따랐", "붙따랐", "으러렀", "잇따랐", "장사치렀", "치렀",
];

/// Split a string at its last character, returning the byte index of that
/// character, the character itself, and the remaining prefix.
fn split_tail(s: &str) -> Option<(usize, char)> {
    s.char_indices().last()
}

fn head_char(s: &str) -> Option<char> {
    s.chars().next()
}

fn drop_head(s: &str) -> &str {
    match head_char(s) {
        Some(c) => &s[c.len_utf8()..],
        None => s,
    }
}

fn with_tail_replaced(stem: &str, idx: usize, new_tail: char) -> String {
    let mut out = String::with_capacity(stem.len());
    out.push_str(&stem[..idx]);
    out.push(new_tail);
    out
}

/// Run every rule against a trivial `(stem, ending)` split, returning the
/// rewritten candidates whose trigger fired. `pos_filter` gates the two
/// dropout rules that only apply outside EP context.
pub fn expand_all(stem: &str, ending: &str, pos_filter: &[&str]) -> Vec<RuleMatch> {
    let mut out = Vec::new();
    out.extend(irr_u(stem, ending));
    out.extend(irr_d(stem, ending));
    out.extend(irr_l(stem, ending));
    out.extend(irr_s(stem, ending));
    out.extend(irr_h1(stem, ending));
    out.extend(irr_h2(stem, ending));
    out.extend(irr_b(stem, ending));
    out.extend(irr_eu(stem, ending));
    out.extend(irr_leo(stem, ending));
    out.extend(irr_leu(stem, ending));
    out.extend(irr_o(stem, ending));
    out.extend(abb_yeo(stem, ending));
    out.extend(abb_wa(stem, ending));
    out.extend(abb_wo(stem, ending));
    out.extend(abb_wae(stem, ending));
    out.extend(abb_hae(stem, ending));
    out.extend(abb_aspirate(stem, ending));
    out.extend(dropout_ha(stem, ending));
    out.extend(abb_chanh(stem, ending));
    out.extend(abb_janh(stem, ending));
    if !pos_filter.contains(&"EP") {
        out.extend(dropout_a(stem, ending));
        out.extend(dropout_eo(stem, ending));
    }
    out.extend(final_sound(stem, ending));
    out
}

/// ㅜ-irregular: 푸다 is the only verb whose 우 drops before a vowel ending.
fn irr_u(stem: &str, ending: &str) -> Vec<RuleMatch> {
    match stem {
        "퍼" => vec![RuleMatch {
            tag: RuleTag::IrrU,
            stem: "푸".to_string(),
            ending: format!("어{ending}"),
        }],
        "펐" => vec![RuleMatch {
            tag: RuleTag::IrrU,
            stem: "푸".to_string(),
            ending: format!("었{ending}"),
        }],
        _ => vec![],
    }
}

const IRR_D_TAILS: &[char] = &['걸', '결', '길', '눌', '달', '들', '물', '불', '실', '컬'];

/// ㄷ→ㄹ irregular: 듣다 class stems surface with ㄹ before a vowel-initial
/// ending (걷다→걸어), rewritten back to the underlying ㄷ stem.
fn irr_d(stem: &str, ending: &str) -> Vec<RuleMatch> {
    let Some((idx, tail)) = split_tail(stem) else {
        return vec![];
    };
    let syl = decompose(tail);
    if syl.jong != Some('ㄹ') || !IRR_D_TAILS.contains(&tail) {
        return vec![];
    }
    let Some(head) = head_char(ending) else {
        return vec![];
    };
    if decompose(head).cho != Some('ㅇ') {
        return vec![];
    }
    let Some(rewritten) = mutate(syl, None, None, JongEdit::Set('ㄷ')) else {
        return vec![];
    };
    vec![RuleMatch {
        tag: RuleTag::IrrD,
        stem: with_tail_replaced(stem, idx, rewritten),
        ending: ending.to_string(),
    }]
}

/// ㄹ-irregular: stem gains a ㄹ jongseong before ㄴ/ㄹ/ㅂ-initial endings.
fn irr_l(stem: &str, ending: &str) -> Vec<RuleMatch> {
    let Some((idx, tail)) = split_tail(stem) else {
        return vec![];
    };
    let syl = decompose(tail);
    if syl.has_jongseong() {
        return vec![];
    }
    let Some(head) = head_char(ending) else {
        return vec![];
    };
    let head_syl = decompose(head);
    let triggers = matches!(head_syl.cho, Some('ㄴ') | Some('ㄹ') | Some('ㅂ'))
        || (head_syl.cho == Some('ㅇ') && head_syl.jung == Some('ㅗ'))
        || (head_syl.cho == Some('ㅅ') && matches!(head_syl.jung, Some('ㅣ') | Some('ㅕ')));
    if !triggers {
        return vec![];
    }
    let Some(rewritten) = mutate(syl, None, None, JongEdit::Set('ㄹ')) else {
        return vec![];
    };
    vec![RuleMatch {
        tag: RuleTag::IrrL,
        stem: with_tail_replaced(stem, idx, rewritten),
        ending: ending.to_string(),
    }]
}

/// ㅅ-irregular: the final ㅅ of certain verb stems drops before a
/// vowel-initial ending (낫다→나아), reconstructed here for lookup.
fn irr_s(stem: &str, ending: &str) -> Vec<RuleMatch> {
    let Some((idx, tail)) = split_tail(stem) else {
        return vec![];
    };
    if !IRR_S_TAILS.contains(&tail) {
        return vec![];
    }
    let syl = decompose(tail);
    if syl.has_jongseong() {
        return vec![];
    }
    let Some(head) = head_char(ending) else {
        return vec![];
    };
    if decompose(head).cho != Some('ㅇ') {
        return vec![];
    }
    let Some(rewritten) = mutate(syl, None, None, JongEdit::Set('ㅅ')) else {
        return vec![];
    };
    vec![RuleMatch {
        tag: RuleTag::IrrS,
        stem: with_tail_replaced(stem, idx, rewritten),
        ending: ending.to_string(),
    }]
}

/// ㅎ-irregular (adjectives): the ㄴ/ㅁ adnominal and nominalizer endings
/// fuse directly onto a ㅎ-irregular adjective's vowel, so the ㅎ never
/// surfaces at all (까맣+ㄴ→까만, not 까맣ㄴ). The split the candidate
/// generator hands in therefore already shows the fused syllable inside
/// `ending`'s head (까/만, not 까맣/ㄴ); this rule strips that syllable's
/// jongseong back out, same as `final_sound_ending_donates`, but reinserts
/// it as a ㅎ on the stem instead of leaving the stem bare.
fn irr_h1(stem: &str, ending: &str) -> Vec<RuleMatch> {
    let Some(head) = head_char(ending) else {
        return vec![];
    };
    let head_syl = decompose(head);
    let (Some(cho), Some(jung), Some(jong)) = (head_syl.cho, head_syl.jung, head_syl.jong) else {
        return vec![];
    };
    if !matches!(jong, 'ㄴ' | 'ㅁ') {
        return vec![];
    }
    let Some(rewritten_head) = compose(cho, jung, Some('ㅎ')) else {
        return vec![];
    };
    vec![RuleMatch {
        tag: RuleTag::IrrH1,
        stem: format!("{stem}{rewritten_head}"),
        ending: format!("{jong}{}", drop_head(ending)),
    }]
}

/// ㅎ-irregular contraction family (그렇다/이렇다/저렇다/어떻다): the
/// surface forms are lexicalized enough that the original table lists the
/// contracted syllables directly rather than deriving them.
fn irr_h2(stem: &str, ending: &str) -> Vec<RuleMatch> {
    const TABLE: &[(&str, &str, &str)] = &[
        ("어때", "어떻", "어"),
        ("어땠", "어떻", "었"),
        ("그래", "그렇", "어"),
        ("그랬", "그렇", "었"),
        ("이래", "이렇", "어"),
        ("저래", "저렇", "어"),
        ("까매", "까맣", "아"),
        ("하얘", "하얗", "야"),
    ];
    for &(surface, underlying_stem, ending_prefix) in TABLE {
        if let Some(rest) = stem.strip_suffix(surface) {
            return vec![RuleMatch {
                tag: RuleTag::IrrH2,
                stem: format!("{rest}{underlying_stem}"),
                ending: format!("{ending_prefix}{ending}"),
            }];
        }
    }
    vec![]
}

/// ㅂ-irregular: 돕다/덥다-class stems (tail in a closed B1 set) replace
/// their ㅂ jongseong with 오/우 fused into the ending's vowel (가벼워,
/// 고와) or fully absorbed into the ㅂ when the ending itself is spelled
/// with a bare 오/우 head (도우니).
fn irr_b(stem: &str, ending: &str) -> Vec<RuleMatch> {
    let Some((idx, tail)) = split_tail(stem) else {
        return vec![];
    };
    if !IRR_B1_TAILS.contains(&tail) {
        return vec![];
    }
    let syl = decompose(tail);
    if syl.has_jongseong() {
        return vec![];
    }
    let Some(head) = head_char(ending) else {
        return vec![];
    };
    let head_syl = decompose(head);
    if head_syl.cho != Some('ㅇ') {
        return vec![];
    }
    let Some(rewritten) = mutate(syl, None, None, JongEdit::Set('ㅂ')) else {
        return vec![];
    };
    let new_stem = with_tail_replaced(stem, idx, rewritten);
    match head_syl.jung {
        Some('ㅘ') | Some('ㅝ') => {
            let bare_jung = if head_syl.jung == Some('ㅘ') { 'ㅏ' } else { 'ㅓ' };
            let Some(new_head) = compose('ㅇ', bare_jung, head_syl.jong) else {
                return vec![];
            };
            let mut new_ending = String::new();
            new_ending.push(new_head);
            new_ending.push_str(drop_head(ending));
            vec![RuleMatch {
                tag: RuleTag::IrrB,
                stem: new_stem,
                ending: new_ending,
            }]
        }
        Some('ㅗ') | Some('ㅜ') => {
            let rest = drop_head(ending);
            let new_ending = match head_syl.jong {
                Some(jong) => format!("{jong}{rest}"),
                None => rest.to_string(),
            };
            vec![RuleMatch {
                tag: RuleTag::IrrB,
                stem: new_stem,
                ending: new_ending,
            }]
        }
        _ => vec![],
    }
}

/// 으-irregular: a closed set of surface tails (or 르-final stems that
/// take 으 rather than 러/르) hide a dropped 으 — the tail's own vowel and
/// coda actually belong to the ending (슬퍼서→슬프+어서, 써→쓰+어).
fn irr_eu(stem: &str, ending: &str) -> Vec<RuleMatch> {
    let Some((idx, tail)) = split_tail(stem) else {
        return vec![];
    };
    if !IRR_EU_TAILS.contains(&tail) && !IRR_EU_LEU_STEMS.iter().any(|s| stem.ends_with(s)) {
        return vec![];
    }
    let syl = decompose(tail);
    let Some(cho) = syl.cho else {
        return vec![];
    };
    let Some(new_tail) = compose(cho, 'ㅡ', None) else {
        return vec![];
    };
    let Some(new_head) = compose('ㅇ', syl.jung.unwrap_or('ㅓ'), syl.jong) else {
        return vec![];
    };
    vec![RuleMatch {
        tag: RuleTag::IrrEu,
        stem: with_tail_replaced(stem, idx, new_tail),
        ending: format!("{new_head}{ending}"),
    }]
}

/// 러-irregular: a closed set of 르-stems take 러 (not 어) as their EC head.
fn irr_leo(stem: &str, ending: &str) -> Vec<RuleMatch> {
    if !ending.starts_with('러') {
        return vec![];
    }
    if !IRR_LEO_STEMS.iter().any(|s| stem.ends_with(s)) {
        return vec![];
    }
    vec![RuleMatch {
        tag: RuleTag::IrrLeo,
        stem: stem.to_string(),
        ending: format!("어{}", drop_head(ending)),
    }]
}

/// 르-irregular: 모르다-class stems fuse 르's onset into the previous
/// syllable as a jongseong, then re-attach it as the ending's onset
/// (모르+아→몰라). The stem's last character already carries both the
/// restored vowel and that doubled ㄹ, so both stem and ending rewrite.
fn irr_leu(stem: &str, ending: &str) -> Vec<RuleMatch> {
    let Some((idx, tail)) = split_tail(stem) else {
        return vec![];
    };
    let tail_syl = decompose(tail);
    if tail_syl.jong != Some('ㄹ') {
        return vec![];
    }
    let Some(head) = head_char(ending) else {
        return vec![];
    };
    let head_syl = decompose(head);
    if head_syl.cho != Some('ㄹ') || !matches!(head_syl.jung, Some('ㅏ') | Some('ㅓ')) {
        return vec![];
    }
    let cho = tail_syl.cho.unwrap_or('ㅇ');
    let jung = tail_syl.jung.unwrap_or('ㅡ');
    let Some(restored) = compose(cho, jung, None) else {
        return vec![];
    };
    let Some(new_head) = compose('ㅇ', head_syl.jung.unwrap(), head_syl.jong) else {
        return vec![];
    };
    let mut new_stem = stem[..idx].to_string();
    new_stem.push(restored);
    new_stem.push('르');
    let mut new_ending = String::new();
    new_ending.push(new_head);
    new_ending.push_str(drop_head(ending));
    vec![RuleMatch {
        tag: RuleTag::IrrLeu,
        stem: new_stem,
        ending: new_ending,
    }]
}

/// 오-irregular: 다오 (the imperative of 달다) is the sole trigger.
fn irr_o(stem: &str, ending: &str) -> Vec<RuleMatch> {
    if stem == "다" && ending.starts_with('오') {
        return vec![RuleMatch {
            tag: RuleTag::IrrO,
            stem: "달".to_string(),
            ending: format!("아라{}", drop_head(ending)),
        }];
    }
    vec![]
}

/// ABB_YEO: a ㅕ-jungseong tail splits into its 이 base plus an 어-headed
/// ending (마시어→마셔 when read backwards from the contracted surface).
fn abb_yeo(stem: &str, ending: &str) -> Vec<RuleMatch> {
    let Some((idx, tail)) = split_tail(stem) else {
        return vec![];
    };
    let syl = decompose(tail);
    if syl.jung != Some('ㅕ') || !matches!(syl.jong, None | Some('ㅆ')) {
        return vec![];
    }
    let cho = syl.cho.unwrap_or('ㅇ');
    let Some(new_tail) = compose(cho, 'ㅣ', None) else {
        return vec![];
    };
    let Some(new_head) = compose('ㅇ', 'ㅓ', syl.jong) else {
        return vec![];
    };
    let mut new_ending = String::new();
    new_ending.push(new_head);
    new_ending.push_str(ending);
    vec![RuleMatch {
        tag: RuleTag::AbbYeo,
        stem: with_tail_replaced(stem, idx, new_tail),
        ending: new_ending,
    }]
}

fn split_diphthong(
    stem: &str,
    ending: &str,
    jung: char,
    base_jung: char,
    ending_jung: char,
    tag: RuleTag,
) -> Vec<RuleMatch> {
    let Some((idx, tail)) = split_tail(stem) else {
        return vec![];
    };
    let syl = decompose(tail);
    if syl.jung != Some(jung) || !matches!(syl.jong, None | Some('ㅆ')) {
        return vec![];
    }
    let cho = syl.cho.unwrap_or('ㅇ');
    let Some(new_tail) = compose(cho, base_jung, None) else {
        return vec![];
    };
    let Some(new_head) = compose('ㅇ', ending_jung, syl.jong) else {
        return vec![];
    };
    let mut new_ending = String::new();
    new_ending.push(new_head);
    new_ending.push_str(ending);
    vec![RuleMatch {
        tag,
        stem: with_tail_replaced(stem, idx, new_tail),
        ending: new_ending,
    }]
}

/// ABB_WA: 오+아 contraction (보다→봐).
fn abb_wa(stem: &str, ending: &str) -> Vec<RuleMatch> {
    split_diphthong(stem, ending, 'ㅘ', 'ㅗ', 'ㅏ', RuleTag::AbbWa)
}

/// ABB_WO: 우+어 contraction (주다→줘).
fn abb_wo(stem: &str, ending: &str) -> Vec<RuleMatch> {
    split_diphthong(stem, ending, 'ㅝ', 'ㅜ', 'ㅓ', RuleTag::AbbWo)
}

/// ABB_WAE: 외+어 contraction (되다→돼).
fn abb_wae(stem: &str, ending: &str) -> Vec<RuleMatch> {
    split_diphthong(stem, ending, 'ㅙ', 'ㅚ', 'ㅓ', RuleTag::AbbWae)
}

/// ABB_HAE: 하 + 여 → 해 (the single most common contraction, 하다 itself).
fn abb_hae(stem: &str, ending: &str) -> Vec<RuleMatch> {
    let Some((idx, tail)) = split_tail(stem) else {
        return vec![];
    };
    if !matches!(tail, '해' | '했') {
        return vec![];
    }
    let syl = decompose(tail);
    let Some(new_head) = compose('ㅇ', 'ㅕ', syl.jong) else {
        return vec![];
    };
    let mut new_ending = String::new();
    new_ending.push(new_head);
    new_ending.push_str(ending);
    vec![RuleMatch {
        tag: RuleTag::AbbHae,
        stem: with_tail_replaced(stem, idx, '하'),
        ending: new_ending,
    }]
}

/// ABB_ASPIRATE: a stem ending in 하 fuses its ㅎ with a following plain
/// ㄱ/ㄷ/ㅈ-initial ending into the aspirate counterpart (간편하게→간편케).
/// Given the already-fused surface, the stem's final syllable carries the
/// aspirate; this rule un-fuses it back onto a synthesized 하 stem plus a
/// plain-consonant ending.
fn abb_aspirate(stem: &str, ending: &str) -> Vec<RuleMatch> {
    if stem.chars().count() < 2 {
        return vec![];
    }
    let Some((idx, tail)) = split_tail(stem) else {
        return vec![];
    };
    let syl = decompose(tail);
    let Some(cho) = syl.cho else { return vec![] };
    let plain_of = match cho {
        'ㅊ' => 'ㅈ',
        'ㅋ' => 'ㄱ',
        'ㅌ' => 'ㄷ',
        _ => return vec![],
    };
    let Some(new_ending_head) = compose(plain_of, syl.jung.unwrap_or('ㅏ'), syl.jong) else {
        return vec![];
    };
    let mut new_ending = String::new();
    new_ending.push(new_ending_head);
    new_ending.push_str(ending);
    vec![RuleMatch {
        tag: RuleTag::AbbAspirate,
        stem: format!("{}하", &stem[..idx]),
        ending: new_ending,
    }]
}

/// DROPOUT_HA: a consonant-final stem inserts 하 before 지/다/건 (거북+지→거북지
/// is spelled as-is, but the underlying stem is 거북하다).
fn dropout_ha(stem: &str, ending: &str) -> Vec<RuleMatch> {
    let Some((_, tail)) = split_tail(stem) else {
        return vec![];
    };
    let syl = decompose(tail);
    if !matches!(syl.jong, Some('ㄱ') | Some('ㅂ') | Some('ㅅ')) {
        return vec![];
    }
    if !(ending.starts_with('지') || ending.starts_with('다') || ending.starts_with('건')) {
        return vec![];
    }
    vec![RuleMatch {
        tag: RuleTag::DropoutHa,
        stem: format!("{stem}하"),
        ending: ending.to_string(),
    }]
}

/// ABB_CHANH: -지 않- contracted to -잖-; -하지 않- contracted to -찮-.
fn abb_chanh(stem: &str, ending: &str) -> Vec<RuleMatch> {
    let Some(rest) = ending.strip_prefix('찮') else {
        return vec![];
    };
    vec![RuleMatch {
        tag: RuleTag::AbbChanh,
        stem: format!("{stem}하"),
        ending: format!("지않은{rest}"),
    }]
}

fn abb_janh(stem: &str, ending: &str) -> Vec<RuleMatch> {
    let Some(rest) = ending.strip_prefix('잖') else {
        return vec![];
    };
    vec![RuleMatch {
        tag: RuleTag::AbbJanh,
        stem: stem.to_string(),
        ending: format!("지않은{rest}"),
    }]
}

/// DROPOUT_A: a bare ㅏ-final stem (no jongseong) silently takes an
/// 아-initial ending without a visible vowel clash; only outside EP
/// context, where the peeling pass handles stacking separately.
fn dropout_a(stem: &str, ending: &str) -> Vec<RuleMatch> {
    let Some((_, tail)) = split_tail(stem) else {
        return vec![];
    };
    let syl = decompose(tail);
    if syl.jung != Some('ㅏ') || syl.has_jongseong() {
        return vec![];
    }
    vec![RuleMatch {
        tag: RuleTag::DropoutA,
        stem: stem.to_string(),
        ending: format!("아{ending}"),
    }]
}

const LAST_EUMJEOL_DROPOUT_EO: &[char] = &['서', '개', '내', '대', '매', '배', '세', '제'];

/// DROPOUT_EO: stems ending in a small set of vowel-final syllables silently
/// take an 어-initial ending; only outside EP context.
fn dropout_eo(stem: &str, ending: &str) -> Vec<RuleMatch> {
    let Some((_, tail)) = split_tail(stem) else {
        return vec![];
    };
    if !LAST_EUMJEOL_DROPOUT_EO.contains(&tail) {
        return vec![];
    }
    vec![RuleMatch {
        tag: RuleTag::DropoutEo,
        stem: stem.to_string(),
        ending: format!("어{ending}"),
    }]
}

/// FINAL_SOUND: the dictionary stores some endings/particles under a key
/// that starts with a bare jongseong jamo (`ㄴ`, `ㄹ더러`). On the surface
/// that jamo is never its own character — it is fused into whichever
/// neighboring syllable it ends up adjacent to. Two fusions are possible
/// for any split point, and only a real dictionary hit (checked later by
/// the matcher) tells them apart, so both are generated speculatively:
///
/// - the stem's own final jongseong is "donated" forward to become the
///   ending's leading jamo (절/더러 split → 저/ㄹ더러);
/// - the ending's first syllable turns out to carry a jongseong that was
///   never part of it; stripping it leaves a bare jongseong ending and the
///   fused onset+vowel rejoins the stem (우/린 split → 우리/ㄴ).
pub fn final_sound(stem: &str, ending: &str) -> Vec<RuleMatch> {
    let mut out = Vec::new();
    out.extend(final_sound_stem_donates(stem, ending));
    out.extend(final_sound_ending_donates(stem, ending));
    out
}

fn final_sound_stem_donates(stem: &str, ending: &str) -> Vec<RuleMatch> {
    let Some((idx, tail)) = split_tail(stem) else {
        return vec![];
    };
    let syl = decompose(tail);
    let Some(jong) = syl.jong else {
        return vec![];
    };
    let Some(cleared) = mutate(syl, None, None, JongEdit::Clear) else {
        return vec![];
    };
    vec![RuleMatch {
        tag: RuleTag::FinalSound,
        stem: with_tail_replaced(stem, idx, cleared),
        ending: format!("{jong}{ending}"),
    }]
}

fn final_sound_ending_donates(stem: &str, ending: &str) -> Vec<RuleMatch> {
    let Some(head) = head_char(ending) else {
        return vec![];
    };
    let head_syl = decompose(head);
    if head_syl.cho.is_none() || head_syl.jung.is_none() {
        return vec![]; // already a bare jongseong jamo, nothing to strip
    }
    let Some(jong) = head_syl.jong else {
        return vec![];
    };
    let Some(onset_vowel) = compose(head_syl.cho.unwrap(), head_syl.jung.unwrap(), None) else {
        return vec![];
    };
    vec![RuleMatch {
        tag: RuleTag::FinalSound,
        stem: format!("{stem}{onset_vowel}"),
        ending: format!("{jong}{}", drop_head(ending)),
    }]
}
