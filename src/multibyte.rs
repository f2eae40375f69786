// pinyin-idioms/src/multibyte.rs
//
// Multibyte spacing idiom.

use crate::whitespace::vacuum;

/// Put exactly one space between multibyte characters.
///
/// A space is inserted before every code point whose UTF-8 encoding is
/// longer than one byte, then the result is vacuumed so runs of inserted
/// and pre-existing spacing collapse to a single space.
///
/// # Examples
/// ```
/// use pinyin_idioms::aerate;
///
/// assert_eq!(aerate("你好"), "你 好");
/// ```
pub fn aerate(s: &str) -> String {
    let mut spaced = String::with_capacity(s.len() * 2);
    for ch in s.chars() {
        if ch.len_utf8() > 1 {
            spaced.push(' ');
        }
        spaced.push(ch);
    }
    vacuum(&spaced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aerate_separates_adjacent_multibyte_chars() {
        assert_eq!(aerate("你好吗"), "你 好 吗");
        assert_eq!(aerate("你好"), "你 好");
    }

    #[test]
    fn aerate_leaves_ascii_runs_alone() {
        assert_eq!(aerate("nihao"), "nihao");
        assert_eq!(aerate("ni hao"), "ni hao");
    }

    #[test]
    fn aerate_mixed_input() {
        // the space goes before each multibyte char, so ASCII following
        // one stays attached
        assert_eq!(aerate("ni你hao好"), "ni 你hao 好");
        // leading insertion is trimmed away by the vacuum step
        assert_eq!(aerate("你ni"), "你ni");
    }

    #[test]
    fn aerate_collapses_existing_spacing() {
        assert_eq!(aerate("你  好"), "你 好");
        assert_eq!(aerate(""), "");
    }
}
