//! Hangul syllable composition and decomposition.
//!
//! A precomposed Hangul syllable in the block U+AC00..=U+D7A3 is the sum of
//! a choseong (onset), jungseong (nucleus) and optional jongseong (coda)
//! index. This module is the only place in the crate that does the
//! Unicode-block arithmetic; everything above it works with [`Syllable`]
//! values built from jamo characters.

use unicode_normalization::UnicodeNormalization;

pub const HANGUL_BASE: u32 = 0xAC00;
pub const HANGUL_LAST: u32 = 0xD7A3;

const JUNGSEONG_COUNT: u32 = 21;
const JONGSEONG_COUNT: u32 = 28;

pub const CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

pub const JUNGSEONG: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Index 0 means "no jongseong"; the rest are real codas.
pub const JONGSEONG: [Option<char>; 28] = [
    None,
    Some('ㄱ'),
    Some('ㄲ'),
    Some('ㄳ'),
    Some('ㄴ'),
    Some('ㄵ'),
    Some('ㄶ'),
    Some('ㄷ'),
    Some('ㄹ'),
    Some('ㄺ'),
    Some('ㄻ'),
    Some('ㄼ'),
    Some('ㄽ'),
    Some('ㄾ'),
    Some('ㄿ'),
    Some('ㅀ'),
    Some('ㅁ'),
    Some('ㅂ'),
    Some('ㅄ'),
    Some('ㅅ'),
    Some('ㅆ'),
    Some('ㅇ'),
    Some('ㅈ'),
    Some('ㅊ'),
    Some('ㅋ'),
    Some('ㅌ'),
    Some('ㅍ'),
    Some('ㅎ'),
];

/// A decomposed syllable position. `cho`/`jung` are `None` only for a
/// position that carries no onset/nucleus at all (whitespace, or a bare
/// jongseong jamo standing in for a jongseong-initial ending key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Syllable {
    pub cho: Option<char>,
    pub jung: Option<char>,
    pub jong: Option<char>,
}

impl Syllable {
    pub const EMPTY: Syllable = Syllable {
        cho: None,
        jung: None,
        jong: None,
    };

    pub fn has_jongseong(&self) -> bool {
        self.jong.is_some()
    }

    /// A syllable is "real" once it has at least an onset and nucleus.
    pub fn is_composed(&self) -> bool {
        self.cho.is_some() && self.jung.is_some()
    }
}

/// How [`mutate`] should treat the jongseong slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JongEdit {
    Keep,
    Clear,
    Set(char),
}

/// Normalize input to NFC so combining jamo sequences collapse to
/// precomposed syllables before anything downstream inspects codepoints.
pub fn normalize(input: &str) -> String {
    input.nfc().collect()
}

/// Decompose one character into its syllable components.
///
/// For a character outside the Hangul syllable block that is itself a
/// jongseong jamo, the result carries only that jongseong (no onset, no
/// nucleus) so callers can use it as a jongseong-initial ending key. Any
/// other non-syllable character (including space) decomposes to
/// [`Syllable::EMPTY`].
pub fn decompose(ch: char) -> Syllable {
    let code = ch as u32;
    if (HANGUL_BASE..=HANGUL_LAST).contains(&code) {
        let offset = code - HANGUL_BASE;
        let cho_idx = (offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT)) as usize;
        let jung_idx = ((offset % (JUNGSEONG_COUNT * JONGSEONG_COUNT)) / JONGSEONG_COUNT) as usize;
        let jong_idx = (offset % JONGSEONG_COUNT) as usize;
        return Syllable {
            cho: Some(CHOSEONG[cho_idx]),
            jung: Some(JUNGSEONG[jung_idx]),
            jong: JONGSEONG[jong_idx],
        };
    }
    if JONGSEONG.iter().any(|j| *j == Some(ch)) {
        return Syllable {
            cho: None,
            jung: None,
            jong: Some(ch),
        };
    }
    Syllable::EMPTY
}

/// Compose a syllable from its jamo. Returns `None` if any jamo is not a
/// recognized member of its slot.
pub fn compose(cho: char, jung: char, jong: Option<char>) -> Option<char> {
    let cho_idx = CHOSEONG.iter().position(|c| *c == cho)?;
    let jung_idx = JUNGSEONG.iter().position(|c| *c == jung)?;
    let jong_idx = JONGSEONG.iter().position(|j| *j == jong)?;
    let code = HANGUL_BASE
        + (cho_idx as u32 * JUNGSEONG_COUNT + jung_idx as u32) * JONGSEONG_COUNT
        + jong_idx as u32;
    char::from_u32(code)
}

/// Rebuild a syllable reusing `base`'s components for whichever of
/// `cho`/`jung` is `None`, and applying `jong` as requested. Returns
/// `None` if the result has no onset or nucleus to compose with, or if a
/// supplied jamo is not a member of its slot.
pub fn mutate(base: Syllable, cho: Option<char>, jung: Option<char>, jong: JongEdit) -> Option<char> {
    let cho = cho.or(base.cho)?;
    let jung = jung.or(base.jung)?;
    let jong = match jong {
        JongEdit::Keep => base.jong,
        JongEdit::Clear => None,
        JongEdit::Set(c) => Some(c),
    };
    compose(cho, jung, jong)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decomposes_syllable_with_jongseong() {
        let syl = decompose('한');
        assert_eq!(syl.cho, Some('ㅎ'));
        assert_eq!(syl.jung, Some('ㅏ'));
        assert_eq!(syl.jong, Some('ㄴ'));
    }

    #[test]
    fn decomposes_syllable_without_jongseong() {
        let syl = decompose('가');
        assert_eq!(syl.cho, Some('ㄱ'));
        assert_eq!(syl.jung, Some('ㅏ'));
        assert_eq!(syl.jong, None);
        assert!(!syl.has_jongseong());
    }

    #[test]
    fn decomposes_space_to_empty() {
        assert_eq!(decompose(' '), Syllable::EMPTY);
    }

    #[test]
    fn decomposes_bare_jongseong_jamo() {
        let syl = decompose('ㄴ');
        assert_eq!(syl.cho, None);
        assert_eq!(syl.jung, None);
        assert_eq!(syl.jong, Some('ㄴ'));
    }

    #[test]
    fn composes_round_trips_decompose() {
        for ch in ['가', '한', '읽', '다', '뷁'] {
            let syl = decompose(ch);
            let rebuilt = compose(syl.cho.unwrap(), syl.jung.unwrap(), syl.jong).unwrap();
            assert_eq!(rebuilt, ch);
        }
    }

    #[test]
    fn mutate_reuses_existing_components() {
        let base = decompose('가');
        let changed = mutate(base, None, None, JongEdit::Set('ㄴ')).unwrap();
        assert_eq!(changed, '간');

        let cleared = mutate(decompose('간'), None, None, JongEdit::Clear).unwrap();
        assert_eq!(cleared, '가');
    }

    #[test]
    fn normalize_collapses_nfd_to_nfc() {
        let nfd: String = "가".nfd().collect();
        assert_ne!(nfd, "가");
        assert_eq!(normalize(&nfd), "가");
    }
}
