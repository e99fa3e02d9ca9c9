//! RFC 5234 ABNF recognizer.
//!
//! Answers one question about a byte buffer: how many leading bytes form a
//! valid instance of a given ABNF production? `0` means "no match here";
//! `N > 0` means the first `N` bytes match. No syntax tree is built and no
//! diagnostics are produced; callers slice the buffer with the returned
//! length and carry on.
//!
//! # Architecture
//!
//! ```text
//! core_rules   ALPHA, DIGIT, CRLF, WSP, ...        (at most one unit each)
//!     │
//!     ▼
//! combinator   single / repeat / choice            (Bounds = ABNF quantifiers)
//!     │
//!     ▼
//! grammar      rulelist ↔ rule ↔ elements ↔ alternation ↔ concatenation
//!              ↔ repetition ↔ element ↔ group/option ↔ alternation ...
//! ```
//!
//! Every recognizer is a method on [`Recognizer`] taking a start offset.
//! The borrowed slice ends at the end marker, so nothing can read past it.
//! Recognizers never mutate anything: a failed attempt is discarded by the
//! caller simply not advancing.
//!
//! # Example
//!
//! ```text
//! let len = abnf_core::recognize(b"rule = \"a\"\r\n");
//! assert_eq!(len, 12);
//! ```

mod combinator;
mod core_rules;
mod grammar;
mod production;
mod recognizer;

pub use combinator::{Bounds, Rule};
pub use production::{Production, UnknownProduction};
pub use recognizer::{Dialect, Recognizer};

/// Recognize an RFC 5234 rule list from the start of `src`.
///
/// Returns the number of leading bytes that form a valid grammar document,
/// or `0` if the buffer does not start with one. A result shorter than
/// `src.len()` means trailing bytes were left unrecognized.
pub fn recognize(src: &[u8]) -> usize {
    let len = Recognizer::new(src).rule_list(0);
    tracing::debug!(len, total = src.len(), "recognized rule list");
    len
}
