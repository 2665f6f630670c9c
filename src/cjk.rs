//! Classification of CJK ideographs and CJK / full-width punctuation.

const IDEOGRAPHS: &[(char, char)] = &[
    ('\u{3400}', '\u{4DBF}'),   // Extension A
    ('\u{4E00}', '\u{9FFF}'),   // Unified Ideographs
    ('\u{F900}', '\u{FAFF}'),   // Compatibility Ideographs
    ('\u{20000}', '\u{2A6DF}'), // Extension B
    ('\u{2A700}', '\u{2EE5F}'), // Extensions C-F, I
    ('\u{2F800}', '\u{2FA1F}'), // Compatibility Ideographs Supplement
    ('\u{30000}', '\u{323AF}'), // Extensions G-H
];

const PUNCTUATION_RANGES: &[(char, char)] = &[
    ('\u{3000}', '\u{303F}'), // CJK Symbols and Punctuation
    ('\u{FE10}', '\u{FE1F}'), // Vertical Forms
    ('\u{FE30}', '\u{FE4F}'), // CJK Compatibility Forms
    ('\u{FF01}', '\u{FF0F}'), // ！ to ／
    ('\u{FF1A}', '\u{FF20}'), // ： to ＠
    ('\u{FF3B}', '\u{FF40}'), // ［ to ｀
    ('\u{FF5B}', '\u{FF65}'), // ｛ to ･
];

const PUNCTUATION_EXTRA: &[char] = &['‘', '’', '“', '”', '—', '…', '·'];

fn in_ranges(c: char, ranges: &[(char, char)]) -> bool {
    ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}

pub(crate) fn is_ideograph(c: char) -> bool {
    in_ranges(c, IDEOGRAPHS)
}

pub(crate) fn is_punctuation(c: char) -> bool {
    in_ranges(c, PUNCTUATION_RANGES) || PUNCTUATION_EXTRA.contains(&c)
}

/// True if `s` contains an ideograph, or CJK punctuation when
/// `allow_punctuations` is false.
pub(crate) fn contains_chinese(s: &str, allow_punctuations: bool) -> bool {
    s.chars()
        .any(|c| is_ideograph(c) || (!allow_punctuations && is_punctuation(c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ideographs() {
        assert!(is_ideograph('中'));
        assert!(is_ideograph('文'));
        assert!(is_ideograph('\u{3400}'));
        assert!(is_ideograph('𠀀')); // U+20000
        assert!(is_ideograph('\u{30000}'));
        assert!(!is_ideograph('a'));
        assert!(!is_ideograph('。'));
        assert!(!is_ideograph('あ'));
    }

    #[test]
    fn punctuation() {
        for c in ['。', '，', '、', '「', '」', '！', '？', '：', '“', '”', '…', '—'] {
            assert!(is_punctuation(c), "expected punctuation: {c}");
        }
        for c in [',', '.', '!', 'a', '中', 'Ａ', '１'] {
            assert!(!is_punctuation(c), "expected not punctuation: {c}");
        }
    }

    #[test]
    fn strings() {
        assert!(contains_chinese("中文", false));
        assert!(contains_chinese("中文", true));
        assert!(contains_chinese("abc。", false));
        assert!(!contains_chinese("abc。", true));
        assert!(!contains_chinese("hello, world", false));
        assert!(!contains_chinese("", false));
    }
}
