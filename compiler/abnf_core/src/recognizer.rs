//! The borrowed input view every recognizer runs against.
//!
//! A [`Recognizer`] is a bounds-checked window over the caller's buffer.
//! The end marker is the slice length: offsets at or past it read as "no
//! byte", which every primitive turns into a non-match. Because the view is
//! [`Copy`] and immutable, any number of threads may recognize independent
//! buffers (or the same one) at once.

/// Which revision of the ABNF metalanguage to accept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// RFC 5234: `char-val` is a plain quoted string.
    #[default]
    Rfc5234,
    /// RFC 5234 as updated by RFC 7405: `char-val` may carry a `%s`
    /// (case-sensitive) or `%i` (case-insensitive) prefix.
    Rfc7405,
}

/// Immutable recognizer over `src[..]`, where `src.len()` is the end marker.
#[derive(Clone, Copy, Debug)]
pub struct Recognizer<'a> {
    src: &'a [u8],
    dialect: Dialect,
}

impl<'a> Recognizer<'a> {
    /// Create a recognizer for plain RFC 5234 grammar text.
    ///
    /// To stop short of the end of a larger buffer, pass `&buf[..end]`.
    pub fn new(src: &'a [u8]) -> Self {
        Self {
            src,
            dialect: Dialect::Rfc5234,
        }
    }

    /// Returns a copy of this recognizer accepting `dialect`.
    #[must_use]
    pub fn with_dialect(self, dialect: Dialect) -> Self {
        Self { dialect, ..self }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The whole input view.
    pub fn src(&self) -> &'a [u8] {
        self.src
    }

    /// The end marker: one past the last readable offset.
    pub fn end(&self) -> usize {
        self.src.len()
    }

    /// Bytes left between `pos` and the end marker (0 when `pos >= end`).
    pub fn remaining(&self, pos: usize) -> usize {
        self.src.len().saturating_sub(pos)
    }

    /// The byte at `pos`, or `None` at or past the end marker.
    #[inline]
    pub(crate) fn byte(&self, pos: usize) -> Option<u8> {
        self.src.get(pos).copied()
    }

    /// Match one byte satisfying `pred`.
    #[inline]
    pub(crate) fn byte_if(&self, pos: usize, pred: impl FnOnce(u8) -> bool) -> usize {
        usize::from(self.byte(pos).is_some_and(pred))
    }

    /// Match exactly `expected`.
    #[inline]
    pub(crate) fn literal(&self, pos: usize, expected: u8) -> usize {
        self.byte_if(pos, |b| b == expected)
    }

    /// Match `expected` in either ASCII case.
    ///
    /// ABNF literal text is case-insensitive, so the `b`/`d`/`x` radix
    /// markers and the RFC 7405 `%s`/`%i` prefixes go through here.
    #[inline]
    pub(crate) fn literal_ignore_case(&self, pos: usize, expected: u8) -> usize {
        self.byte_if(pos, |b| b.eq_ignore_ascii_case(&expected))
    }
}
