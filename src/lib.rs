//! pinyin-idioms crate root
//!
//! A stateless library of pure string→string transformations ("idioms") for
//! cleaning, filtering and indexing pinyin-oriented text. Every idiom takes
//! one `&str` and returns a freshly allocated `String`; there is no shared
//! state, no I/O, and no input that produces an error.
//!
//! Public API exported here:
//! - whitespace idioms from `whitespace` (`vacuum`, `nospaces`, `airtight`,
//!   `nocrlf`, `nocr`, `nolf`)
//! - character-class filters from `classes` (`nopunct`, `nodigits`,
//!   `digitsonly`, `alphaonly`, `alphanumonly`, `asciionly`, `noascii`)
//! - pinyin idioms from `pinyin` (`pmash`, `pbash`, `phash`, `psmash`,
//!   `pumlaut`, `atomize`)
//! - the multibyte spacing idiom `aerate` from `multibyte`
//! - the experimental definition-index idiom `dmash` from `translit`

pub mod classes;
pub mod multibyte;
pub mod pinyin;
pub mod translit;
pub mod whitespace;

// Convenience re-exports so callers can use the idioms without naming modules.
pub use classes::{alphanumonly, alphaonly, asciionly, digitsonly, noascii, nodigits, nopunct};
pub use multibyte::aerate;
pub use pinyin::{atomize, pbash, phash, pmash, psmash, pumlaut};
pub use translit::dmash;
pub use whitespace::{airtight, nocr, nocrlf, nolf, nospaces, vacuum};

/// A single space, the separator every collapsing idiom normalizes to.
pub const SINGLE_SPACE: &str = " ";

/// The empty string, the replacement every dropping idiom substitutes.
pub const EMPTY: &str = "";

/// The CRLF line terminator removed by [`nocrlf`].
///
/// Fixed to the literal two-character `"\r\n"` sequence rather than the
/// host platform's line ending, so behavior is identical on every OS.
pub const CRLF: &str = "\r\n";

/// Carriage return, removed by [`nocr`].
pub const CR: &str = "\r";

/// Line feed, removed by [`nolf`].
pub const LF: &str = "\n";
