// pinyin-idioms/src/classes.rs
//
// Character-class filters: keep or drop code points by Unicode class.
//
// Class membership comes from the regex crate's Unicode-by-default
// property tables, the property equivalents of the POSIX classes:
// [:punct:] → \p{P}, [:digit:] → \d (Nd), [:alpha:] → \p{Alphabetic},
// [:alnum:] → [\p{Alphabetic}\d], [:ascii:] → U+0000..=U+007F.
//
// Every filter rewrites the full string, then trims leading/trailing
// whitespace of the result.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::EMPTY;

static PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{P}").unwrap());
static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());
static NON_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").unwrap());
static NON_ALPHA: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{Alphabetic}]").unwrap());
static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{Alphabetic}\d]").unwrap());
static ASCII: Lazy<Regex> = Lazy::new(|| Regex::new(r"[[:ascii:]]").unwrap());
static NON_ASCII: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^[:ascii:]]").unwrap());

/// Drop every punctuation code point (`\p{P}`), then trim.
///
/// # Examples
/// ```
/// use pinyin_idioms::nopunct;
///
/// assert_eq!(nopunct("a,b.c!"), "abc");
/// ```
pub fn nopunct(s: &str) -> String {
    PUNCT.replace_all(s, EMPTY).trim().to_string()
}

/// Drop every decimal-digit code point, then trim.
pub fn nodigits(s: &str) -> String {
    DIGIT.replace_all(s, EMPTY).trim().to_string()
}

/// Keep only decimal-digit code points, then trim.
pub fn digitsonly(s: &str) -> String {
    NON_DIGIT.replace_all(s, EMPTY).trim().to_string()
}

/// Keep only alphabetic code points, then trim.
pub fn alphaonly(s: &str) -> String {
    NON_ALPHA.replace_all(s, EMPTY).trim().to_string()
}

/// Keep only alphabetic or decimal-digit code points, then trim.
pub fn alphanumonly(s: &str) -> String {
    NON_ALNUM.replace_all(s, EMPTY).trim().to_string()
}

/// Keep only code points in the ASCII range (U+0000..=U+007F), then trim.
pub fn asciionly(s: &str) -> String {
    NON_ASCII.replace_all(s, EMPTY).trim().to_string()
}

/// Drop every code point in the ASCII range, keeping the rest, then trim.
pub fn noascii(s: &str) -> String {
    ASCII.replace_all(s, EMPTY).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nopunct_drops_punctuation() {
        assert_eq!(nopunct("a,b.c!"), "abc");
        assert_eq!(nopunct("ni'hao"), "nihao");
        // CJK punctuation is punctuation too
        assert_eq!(nopunct("你好。"), "你好");
    }

    #[test]
    fn digit_filters() {
        assert_eq!(digitsonly("a1b2c3"), "123");
        assert_eq!(nodigits("a1b2c3"), "abc");
        // fullwidth digits are Nd
        assert_eq!(digitsonly("a１b２"), "１２");
        assert_eq!(digitsonly(&digitsonly("a1b2c3")), digitsonly("a1b2c3"));
    }

    #[test]
    fn alpha_filters() {
        assert_eq!(alphaonly("a1!b2"), "ab");
        assert_eq!(alphanumonly("a1!b2"), "a1b2");
        // Han characters are alphabetic
        assert_eq!(alphaonly("ni好3"), "ni好");
    }

    #[test]
    fn ascii_filters_partition_the_input() {
        assert_eq!(asciionly("ni hao 你好"), "ni hao");
        assert_eq!(noascii("ni hao 你好"), "你好");
        assert_eq!(asciionly("nǐ hǎo"), "n ho");
    }

    #[test]
    fn empty_input_stays_empty() {
        let filters: [fn(&str) -> String; 7] = [
            nopunct,
            nodigits,
            digitsonly,
            alphaonly,
            alphanumonly,
            asciionly,
            noascii,
        ];
        for f in filters {
            assert_eq!(f(""), "");
        }
    }
}
