//! Terminal values: quoted strings, numeric values, prose.

use crate::{Bounds, Dialect, Recognizer, Rule};

impl<'a> Recognizer<'a> {
    /// `char-val`
    ///
    /// RFC 5234: `DQUOTE *(%x20-21 / %x23-7E) DQUOTE`.
    /// RFC 7405: `case-insensitive-string / case-sensitive-string`.
    pub fn char_val(&self, pos: usize) -> usize {
        match self.dialect() {
            Dialect::Rfc5234 => self.quoted_string(pos),
            Dialect::Rfc7405 => {
                let alternatives: [Rule<'a>; 2] =
                    [Self::case_insensitive_string, Self::case_sensitive_string];
                self.choice(&alternatives, pos)
            }
        }
    }

    /// `quoted-string = DQUOTE *(%x20-21 / %x23-7E) DQUOTE`
    pub fn quoted_string(&self, pos: usize) -> usize {
        let mut len = 0;
        if self.single(Self::dquote, pos, Some(&mut len)) == 0 {
            return 0;
        }
        self.repeat(Self::quoted_char, pos + len, Some(&mut len), Bounds::ANY);
        if self.single(Self::dquote, pos + len, Some(&mut len)) == 0 {
            return 0;
        }
        len
    }

    /// `%x20-21 / %x23-7E`: SP and VCHAR without DQUOTE.
    fn quoted_char(&self, pos: usize) -> usize {
        self.byte_if(pos, |b| matches!(b, 0x20..=0x21 | 0x23..=0x7E))
    }

    /// `case-insensitive-string = [ "%i" ] quoted-string`
    pub fn case_insensitive_string(&self, pos: usize) -> usize {
        let mut len = 0;
        let prefix = |r: &Self, p| r.string_prefix(p, b'i');
        self.repeat(prefix, pos, Some(&mut len), Bounds::at_most(1));
        if self.single(Self::quoted_string, pos + len, Some(&mut len)) == 0 {
            return 0;
        }
        len
    }

    /// `case-sensitive-string = "%s" quoted-string`
    pub fn case_sensitive_string(&self, pos: usize) -> usize {
        let mut len = self.string_prefix(pos, b's');
        if len == 0 {
            return 0;
        }
        if self.single(Self::quoted_string, pos + len, Some(&mut len)) == 0 {
            return 0;
        }
        len
    }

    /// `"%" marker`, with the marker in either case.
    fn string_prefix(&self, pos: usize, marker: u8) -> usize {
        if self.literal(pos, b'%') == 0 || self.literal_ignore_case(pos + 1, marker) == 0 {
            return 0;
        }
        2
    }

    /// `num-val = "%" (bin-val / dec-val / hex-val)`
    pub fn num_val(&self, pos: usize) -> usize {
        if self.literal(pos, b'%') == 0 {
            return 0;
        }
        let alternatives: [Rule<'a>; 3] = [Self::bin_val, Self::dec_val, Self::hex_val];
        match self.choice(&alternatives, pos + 1) {
            0 => 0,
            len => len + 1,
        }
    }

    /// `bin-val = "b" 1*BIT [ 1*("." 1*BIT) / ("-" 1*BIT) ]`
    pub fn bin_val(&self, pos: usize) -> usize {
        self.radix_val(pos, b'b', Self::bit)
    }

    /// `dec-val = "d" 1*DIGIT [ 1*("." 1*DIGIT) / ("-" 1*DIGIT) ]`
    pub fn dec_val(&self, pos: usize) -> usize {
        self.radix_val(pos, b'd', Self::digit)
    }

    /// `hex-val = "x" 1*HEXDIG [ 1*("." 1*HEXDIG) / ("-" 1*HEXDIG) ]`
    pub fn hex_val(&self, pos: usize) -> usize {
        self.radix_val(pos, b'x', Self::hexdig)
    }

    /// Shared body of the three radix values.
    ///
    /// After the leading digits comes either a dotted series (`%x41.42.43`,
    /// a byte sequence) or a single dash (`%x41-5A`, an inclusive range).
    /// A `.` or `-` with no digits after it is left unconsumed, and the
    /// value ends just before it.
    fn radix_val(&self, pos: usize, marker: u8, digit: Rule<'a>) -> usize {
        if self.literal_ignore_case(pos, marker) == 0 {
            return 0;
        }
        let mut len = 1;
        if self.repeat(digit, pos + len, Some(&mut len), Bounds::AT_LEAST_ONE) == 0 {
            return 0;
        }

        let series = |r: &Self, p| r.delimited_digits(p, b'.', digit);
        if self.repeat(series, pos + len, Some(&mut len), Bounds::AT_LEAST_ONE) == 0 {
            let range = |r: &Self, p| r.delimited_digits(p, b'-', digit);
            self.single(range, pos + len, Some(&mut len));
        }
        len
    }

    /// `delimiter 1*digit`
    fn delimited_digits(&self, pos: usize, delimiter: u8, digit: Rule<'a>) -> usize {
        if self.literal(pos, delimiter) == 0 {
            return 0;
        }
        match self.repeat(digit, pos + 1, None, Bounds::AT_LEAST_ONE) {
            0 => 0,
            len => len + 1,
        }
    }

    /// `prose-val = "<" *(%x20-3D / %x3F-7E) ">"`
    pub fn prose_val(&self, pos: usize) -> usize {
        if self.literal(pos, b'<') == 0 {
            return 0;
        }
        let mut len = 1;
        self.repeat(Self::prose_char, pos + len, Some(&mut len), Bounds::ANY);
        if self.literal(pos + len, b'>') == 0 {
            return 0;
        }
        len + 1
    }

    /// `%x20-3D / %x3F-7E`: SP and VCHAR without `>`.
    fn prose_char(&self, pos: usize) -> usize {
        self.byte_if(pos, |b| matches!(b, 0x20..=0x3D | 0x3F..=0x7E))
    }
}

#[cfg(test)]
mod tests;
