// pinyin-idioms/src/pinyin.rs
//
// Pinyin-oriented idioms for normalizing and indexing numbered-pinyin text
// (tone digits 1-5 trailing each syllable, e.g. "ni3 hao3").
//
// - `pmash` / `pbash` mash words together, with or without tone digits
// - `phash` / `psmash` derive short index keys (letter set, initialism)
// - `pumlaut` normalizes every umlaut-u spelling to "uu"
// - `atomize` guesses syllable boundaries from tone digits

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::classes::{alphaonly, nodigits, nopunct};
use crate::whitespace::{nospaces, vacuum};

/// Every spelling of the umlaut-u in one alternation, replaced in a single
/// left-to-right pass. One combined pass (rather than one pass per token)
/// so a substituted "uu" is never itself rewritten. At a given position the
/// leftmost match wins, and "u:" is listed first so it beats a bare match
/// later in the alternation.
static UMLAUT_U: Lazy<Regex> = Lazy::new(|| Regex::new("u:|ǚ|ǘ|ǜ|ǖ|ü|v").unwrap());

/// One to six word characters followed by a single tone digit.
static TONED_SYLLABLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w{1,6}[1-5])").unwrap());

/// Lowercase and mash words together, keeping tone digits.
///
/// # Examples
/// ```
/// use pinyin_idioms::pmash;
///
/// assert_eq!(pmash("Ni Hao3"), "nihao3");
/// ```
pub fn pmash(s: &str) -> String {
    nospaces(&s.to_lowercase())
}

/// Lowercase, strip tone digits, and mash words together.
///
/// # Examples
/// ```
/// use pinyin_idioms::pbash;
///
/// assert_eq!(pbash("Ni Hao3"), "nihao");
/// ```
pub fn pbash(s: &str) -> String {
    nospaces(&nodigits(&s.to_lowercase()))
}

/// The unique alphabetic characters of the input, lowercased and sorted by
/// code point ascending.
///
/// # Examples
/// ```
/// use pinyin_idioms::phash;
///
/// assert_eq!(phash("Banana"), "abn");
/// ```
pub fn phash(s: &str) -> String {
    let letters = alphaonly(&s.to_lowercase());
    let unique: BTreeSet<char> = letters.chars().collect();
    unique.into_iter().collect()
}

/// The initial letter of each word, lowercased.
///
/// Digits and punctuation are stripped and spacing vacuumed first; a
/// single-word input comes back whole rather than as one letter.
///
/// # Examples
/// ```
/// use pinyin_idioms::psmash;
///
/// assert_eq!(psmash("The Quick Fox"), "tqf");
/// assert_eq!(psmash("nihao"), "nihao");
/// ```
pub fn psmash(s: &str) -> String {
    let cleaned = vacuum(&nopunct(&nodigits(&s.to_lowercase())));
    if !cleaned.contains(' ') {
        return cleaned;
    }
    cleaned
        .split(' ')
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Normalize every umlaut-u spelling (`u:`, tone-marked `ǚ ǘ ǜ ǖ`, plain
/// `ü`, keyboard `v`) to the literal sequence `uu`.
///
/// # Examples
/// ```
/// use pinyin_idioms::pumlaut;
///
/// assert_eq!(pumlaut("nu:3"), "nuu3");
/// assert_eq!(pumlaut("lv4"), "luu4");
/// ```
pub fn pumlaut(s: &str) -> String {
    UMLAUT_U.replace_all(s, "uu").into_owned()
}

/// Split numbered pinyin into smaller units by inserting a space after
/// each run of word characters ending in a tone digit, then vacuuming.
///
/// Low-cost, low-accuracy atomization; a tone-digit heuristic, not a
/// syllable parser. `\w` includes digits, so a greedy run can absorb an
/// earlier tone digit and keep two short syllables glued together.
///
/// # Examples
/// ```
/// use pinyin_idioms::atomize;
///
/// assert_eq!(atomize("zhong1guo2"), "zhong1 guo2");
/// ```
pub fn atomize(s: &str) -> String {
    vacuum(&TONED_SYLLABLE.replace_all(s, "${1} "))
}
