//! RFC 5234 Appendix B.1 core rules.
//!
//! Each recognizer consumes at most one unit: a single byte, except `CRLF`
//! (two bytes) and `LWSP` (a run of whitespace units). All of them reject
//! at or past the end marker.

use crate::{Bounds, Recognizer, Rule};

impl<'a> Recognizer<'a> {
    /// `ALPHA = %x41-5A / %x61-7A`
    pub fn alpha(&self, pos: usize) -> usize {
        self.byte_if(pos, |b| b.is_ascii_alphabetic())
    }

    /// `BIT = "0" / "1"`
    pub fn bit(&self, pos: usize) -> usize {
        self.byte_if(pos, |b| matches!(b, b'0' | b'1'))
    }

    /// `CHAR`, accepting `%x21-7F`.
    pub fn char(&self, pos: usize) -> usize {
        self.byte_if(pos, |b| matches!(b, 0x21..=0x7F))
    }

    /// `CR = %x0D`
    pub fn cr(&self, pos: usize) -> usize {
        self.literal(pos, 0x0D)
    }

    /// `CRLF = CR LF`
    pub fn crlf(&self, pos: usize) -> usize {
        let mut len = 0;
        if self.single(Self::cr, pos, Some(&mut len)) == 0
            || self.single(Self::lf, pos + len, Some(&mut len)) == 0
        {
            return 0;
        }
        len
    }

    /// `CTL = %x00-1F / %x7F`
    pub fn ctl(&self, pos: usize) -> usize {
        self.byte_if(pos, |b| b.is_ascii_control())
    }

    /// `DIGIT = %x30-39`
    pub fn digit(&self, pos: usize) -> usize {
        self.byte_if(pos, |b| b.is_ascii_digit())
    }

    /// `DQUOTE = %x22`
    pub fn dquote(&self, pos: usize) -> usize {
        self.literal(pos, b'"')
    }

    /// `HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"`, either case.
    pub fn hexdig(&self, pos: usize) -> usize {
        self.byte_if(pos, |b| b.is_ascii_hexdigit())
    }

    /// `HTAB = %x09`
    pub fn htab(&self, pos: usize) -> usize {
        self.literal(pos, 0x09)
    }

    /// `LF = %x0A`
    pub fn lf(&self, pos: usize) -> usize {
        self.literal(pos, 0x0A)
    }

    /// `LWSP = *(WSP / CRLF WSP)`
    ///
    /// Never fails: with nothing to consume the match is simply empty.
    pub fn lwsp(&self, pos: usize) -> usize {
        self.repeat(Self::lwsp_unit, pos, None, Bounds::ANY)
    }

    fn lwsp_unit(&self, pos: usize) -> usize {
        let alternatives: [Rule<'a>; 2] = [Self::wsp, Self::folded_wsp];
        self.choice(&alternatives, pos)
    }

    /// `CRLF WSP`
    fn folded_wsp(&self, pos: usize) -> usize {
        let mut len = 0;
        if self.single(Self::crlf, pos, Some(&mut len)) == 0
            || self.single(Self::wsp, pos + len, Some(&mut len)) == 0
        {
            return 0;
        }
        len
    }

    /// `OCTET = %x00-FF`
    pub fn octet(&self, pos: usize) -> usize {
        self.byte_if(pos, |_| true)
    }

    /// `SP = %x20`
    pub fn sp(&self, pos: usize) -> usize {
        self.literal(pos, b' ')
    }

    /// `VCHAR = %x21-7E`
    pub fn vchar(&self, pos: usize) -> usize {
        self.byte_if(pos, |b| b.is_ascii_graphic())
    }

    /// `WSP = SP / HTAB`
    pub fn wsp(&self, pos: usize) -> usize {
        let alternatives: [Rule<'a>; 2] = [Self::sp, Self::htab];
        self.choice(&alternatives, pos)
    }
}
