//! Splits strings into text elements.
//!
//! A text element is one extended grapheme cluster: the unit a reader
//! perceives as a single character, which may span several code points
//! (a base letter with combining marks, an emoji joiner sequence, a
//! surrogate-free supplementary-plane character).

use unicode_segmentation::UnicodeSegmentation;

/// Iterate over the text elements of `value` in input order.
///
/// Casing and code point spelling are preserved exactly as they appear
/// in `value`.
pub fn elements(value: &str) -> impl Iterator<Item = &str> + '_ {
    value.graphemes(true)
}

/// The number of text elements in `value`.
pub fn element_count(value: &str) -> usize {
    value.graphemes(true).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii() {
        assert_eq!(
            elements("qwerty").collect::<Vec<_>>(),
            vec!["q", "w", "e", "r", "t", "y"]
        );
        assert_eq!(element_count("qwerty"), 6);
    }

    #[test]
    fn empty() {
        assert_eq!(elements("").next(), None);
        assert_eq!(element_count(""), 0);
    }

    #[test]
    fn combining_marks_stay_attached() {
        // e + COMBINING ACUTE ACCENT is one element, not two.
        assert_eq!(elements("e\u{301}").collect::<Vec<_>>(), vec!["e\u{301}"]);
        assert_eq!(element_count("ne\u{301}e"), 3);
    }

    #[test]
    fn supplementary_plane_characters() {
        // U+24B62 lies beyond the basic multilingual plane.
        assert_eq!(element_count("a\u{24B62}s\u{24B62}"), 4);
        assert_eq!(elements("a\u{24B62}s").nth(1), Some("\u{24B62}"));
    }

    #[test]
    fn zwj_sequences_are_single_elements() {
        // Family emoji: four characters joined with ZERO WIDTH JOINER.
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
        assert_eq!(element_count(family), 1);
    }

    #[test]
    fn regional_indicators_pair_up() {
        // Two flags from four regional indicator symbols.
        let flags = "\u{1F1FA}\u{1F1E6}\u{1F1F9}\u{1F1F7}";
        assert_eq!(element_count(flags), 2);
    }

    #[test]
    fn crlf_is_one_element() {
        assert_eq!(
            elements("a\r\nb").collect::<Vec<_>>(),
            vec!["a", "\r\n", "b"]
        );
    }

    #[test]
    fn hebrew_base_and_point() {
        // ALEF followed by HATAF QAMATS.
        assert_eq!(element_count("\u{5D0}\u{5B3}"), 1);
        assert_eq!(elements("\u{5D0}\u{5B3}").next(), Some("\u{5D0}\u{5B3}"));
    }
}
