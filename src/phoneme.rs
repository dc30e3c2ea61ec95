//! Phoneme-restriction checker: decides whether an ending's `phoneme`
//! constraint is satisfied by the syllable it attaches to.

use crate::syllable::Syllable;

/// Check whether `constraint` (pipe-joined tokens, e.g. `"VO|LQ"`) is
/// satisfied by `anchor`. `anchor == None` always passes: it represents a
/// synthesized boundary position (an empty stem, or the outer edge of a
/// peeled EP layer) that no phonological rule can speak to.
pub fn check(anchor: Option<Syllable>, constraint: &str) -> bool {
    let Some(anchor) = anchor else {
        return true;
    };
    if constraint.is_empty() {
        return true;
    }
    constraint.split('|').any(|token| match token {
        "NUL" => true,
        "VO" => !anchor.has_jongseong(),
        "LQ" => anchor.jong == Some('ㄹ'),
        "FS" => anchor.has_jongseong() && anchor.jong != Some('ㄹ'),
        "YANG1" => matches!(anchor.jung, Some(j) if j == 'ㅏ' || j == 'ㅗ'),
        "YANG2" => matches!(anchor.jung, Some(j) if j == 'ㅏ' || j == 'ㅑ' || j == 'ㅗ'),
        "EUM1" => !matches!(anchor.jung, Some(j) if j == 'ㅏ' || j == 'ㅗ'),
        _ => false,
    })
}
