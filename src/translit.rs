//! ASCII transliteration for definition indexing.
//!
//! This module implements the experimental `dmash` idiom: a best-effort
//! fold of arbitrary text down to a bare lowercase ASCII key, suitable
//! for indexing dictionary definitions.
//!
//! Fold strategy (documented here because no canonical table exists):
//! NFKD decomposition, drop combining marks, then drop any code point
//! that is still outside the ASCII range. Accented Latin letters fold to
//! their base forms ("é" → "e"); characters with no decomposition to an
//! ASCII base ("你", "ß") are dropped silently.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::classes::{nodigits, nopunct};
use crate::whitespace::airtight;

/// Fold to plain ASCII: NFKD, strip combining marks, drop the rest.
fn fold_to_ascii(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .filter(char::is_ascii)
        .collect()
}

/// ** EXPERIMENTAL **
///
/// Reduce text to a lowercase ASCII index key: transliterate to ASCII
/// best-effort, then strip punctuation, whitespace and digits.
///
/// # Examples
/// ```
/// use pinyin_idioms::dmash;
///
/// assert_eq!(dmash("Crème Brûlée 123!"), "cremebrulee");
/// ```
pub fn dmash(s: &str) -> String {
    let folded = fold_to_ascii(s);
    nodigits(&airtight(&nopunct(&folded))).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dmash_folds_accents_to_base_letters() {
        assert_eq!(dmash("Crème Brûlée 123!"), "cremebrulee");
        assert_eq!(dmash("nǐ hǎo"), "nihao");
        assert_eq!(dmash("naïve café"), "naivecafe");
    }

    #[test]
    fn dmash_drops_unfoldable_characters() {
        assert_eq!(dmash("你好 hello"), "hello");
        assert_eq!(dmash("日本語"), "");
    }

    #[test]
    fn dmash_strips_punct_space_digits() {
        assert_eq!(dmash("Hello, World! 42"), "helloworld");
        assert_eq!(dmash("a\nb\tc"), "abc");
    }

    #[test]
    fn dmash_empty_input_stays_empty() {
        assert_eq!(dmash(""), "");
    }
}
