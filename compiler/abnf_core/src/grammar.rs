//! RFC 5234 section 4: ABNF definition of ABNF.
//!
//! The productions are split the way the grammar reads:
//!
//! - [`rules`]: the document layer (`rulelist`, `rule`, `defined-as`, and
//!   the comment-aware whitespace and newline tokens).
//! - [`expr`]: the right-hand side of a rule (`alternation` down to
//!   `element`, with the bracketed `group` / `option`).
//! - [`terminal`]: literal values (`char-val`, `num-val`, `prose-val`).
//!
//! Recursion runs rule → elements → alternation → concatenation →
//! repetition → element → group/option → alternation. Only the bracketed
//! productions deepen the stack; sibling repetitions are loops.

mod expr;
mod rules;
mod terminal;
