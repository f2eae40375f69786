// pinyin-idioms/src/whitespace.rs
//
// Whitespace normalization and line-ending idioms.
// - `vacuum` / `nospaces` / `airtight` collapse or delete whitespace runs
// - `nocrlf` / `nocr` / `nolf` remove literal line terminators
//
// The collapsing idioms are newline-aware: `[\s--\n]` (whitespace minus
// line feed) keeps literal newlines out of the run being rewritten, so
// `vacuum` can tighten spacing without joining lines.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{CR, CRLF, EMPTY, LF, SINGLE_SPACE};

/// Two or more non-newline whitespace characters in a row.
static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s--\n]{2,}").unwrap());

/// One or more non-newline whitespace characters in a row.
static ANY_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s--\n]+").unwrap());

/// One or more whitespace characters of any kind, newlines included.
static ALL_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapse every run of repeated non-newline whitespace to a single
/// space, then trim. Newlines survive untouched.
///
/// # Examples
/// ```
/// use pinyin_idioms::vacuum;
///
/// assert_eq!(vacuum(" a   b "), "a b");
/// assert_eq!(vacuum("a\n\n  b"), "a\n\n b");
/// ```
pub fn vacuum(s: &str) -> String {
    SPACE_RUN.replace_all(s, SINGLE_SPACE).trim().to_string()
}

/// Remove every run of non-newline whitespace entirely, then trim.
///
/// # Examples
/// ```
/// use pinyin_idioms::nospaces;
///
/// assert_eq!(nospaces(" a b "), "ab");
/// ```
pub fn nospaces(s: &str) -> String {
    ANY_SPACE.replace_all(s, EMPTY).trim().to_string()
}

/// Remove every whitespace character, newlines included, then trim.
///
/// # Examples
/// ```
/// use pinyin_idioms::airtight;
///
/// assert_eq!(airtight(" a\nb\tc "), "abc");
/// ```
pub fn airtight(s: &str) -> String {
    ALL_SPACE.replace_all(s, EMPTY).trim().to_string()
}

/// Remove every CRLF sequence. No trimming.
///
/// Uses the fixed [`crate::CRLF`] literal `"\r\n"` rather than the host
/// platform's line ending; a lone `\r` or `\n` is left alone.
pub fn nocrlf(s: &str) -> String {
    s.replace(CRLF, EMPTY)
}

/// Remove every carriage return. No trimming.
pub fn nocr(s: &str) -> String {
    s.replace(CR, EMPTY)
}

/// Remove every line feed. No trimming.
pub fn nolf(s: &str) -> String {
    s.replace(LF, EMPTY)
}
