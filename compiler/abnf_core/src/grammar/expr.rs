//! Right-hand-side productions: alternation down to element.

use abnf_stack::ensure_sufficient_stack;

use crate::{Bounds, Recognizer, Rule};

impl<'a> Recognizer<'a> {
    /// `alternation = concatenation *(*c-wsp "/" *c-wsp concatenation)`
    pub fn alternation(&self, pos: usize) -> usize {
        let mut len = 0;
        if self.single(Self::concatenation, pos, Some(&mut len)) == 0 {
            return 0;
        }
        self.repeat(Self::alternation_tail, pos + len, Some(&mut len), Bounds::ANY);
        len
    }

    /// `*c-wsp "/" *c-wsp concatenation`
    fn alternation_tail(&self, pos: usize) -> usize {
        let mut len = 0;
        self.repeat(Self::c_wsp, pos, Some(&mut len), Bounds::ANY);
        if self.literal(pos + len, b'/') == 0 {
            return 0;
        }
        len += 1;
        self.repeat(Self::c_wsp, pos + len, Some(&mut len), Bounds::ANY);
        if self.single(Self::concatenation, pos + len, Some(&mut len)) == 0 {
            return 0;
        }
        len
    }

    /// `concatenation = repetition *(1*c-wsp repetition)`
    pub fn concatenation(&self, pos: usize) -> usize {
        let mut len = 0;
        if self.single(Self::repetition, pos, Some(&mut len)) == 0 {
            return 0;
        }
        self.repeat(Self::concatenation_tail, pos + len, Some(&mut len), Bounds::ANY);
        len
    }

    /// `1*c-wsp repetition`
    fn concatenation_tail(&self, pos: usize) -> usize {
        let mut len = 0;
        if self.repeat(Self::c_wsp, pos, Some(&mut len), Bounds::AT_LEAST_ONE) == 0
            || self.single(Self::repetition, pos + len, Some(&mut len)) == 0
        {
            return 0;
        }
        len
    }

    /// `repetition = [repeat] element`
    ///
    /// The count is syntax only: `3*5a` consumes `3*5` once and `a` once.
    pub fn repetition(&self, pos: usize) -> usize {
        let mut len = 0;
        self.repeat(Self::repeat_count, pos, Some(&mut len), Bounds::at_most(1));
        if self.single(Self::element, pos + len, Some(&mut len)) == 0 {
            return 0;
        }
        len
    }

    /// `repeat = 1*DIGIT / (*DIGIT "*" *DIGIT)`
    ///
    /// Covers the `N`, `*`, `N*`, `*M` and `N*M` forms.
    pub fn repeat_count(&self, pos: usize) -> usize {
        let mut len = 0;
        self.repeat(Self::digit, pos, Some(&mut len), Bounds::ANY);
        if self.literal(pos + len, b'*') == 0 {
            // Plain `N`; no digits and no star is no match.
            return len;
        }
        len += 1;
        self.repeat(Self::digit, pos + len, Some(&mut len), Bounds::ANY);
        len
    }

    /// `element = rulename / group / option / char-val / num-val / prose-val`
    ///
    /// Ordered: the first alternative that matches wins.
    pub fn element(&self, pos: usize) -> usize {
        let alternatives: [Rule<'a>; 6] = [
            Self::rule_name,
            Self::group,
            Self::option,
            Self::char_val,
            Self::num_val,
            Self::prose_val,
        ];
        self.choice(&alternatives, pos)
    }

    /// `group = "(" *c-wsp alternation *c-wsp ")"`
    pub fn group(&self, pos: usize) -> usize {
        self.bracketed(pos, b'(', b')')
    }

    /// `option = "[" *c-wsp alternation *c-wsp "]"`
    pub fn option(&self, pos: usize) -> usize {
        self.bracketed(pos, b'[', b']')
    }

    /// Shared body of `group` and `option`.
    ///
    /// The inner alternation is mandatory, so `()` and `[ ]` are no match.
    /// This is the only recursion point that grows with input nesting.
    fn bracketed(&self, pos: usize, open: u8, close: u8) -> usize {
        if self.literal(pos, open) == 0 {
            return 0;
        }
        ensure_sufficient_stack(|| {
            let mut len = 1;
            self.repeat(Self::c_wsp, pos + len, Some(&mut len), Bounds::ANY);
            if self.single(Self::alternation, pos + len, Some(&mut len)) == 0 {
                return 0;
            }
            self.repeat(Self::c_wsp, pos + len, Some(&mut len), Bounds::ANY);
            if self.literal(pos + len, close) == 0 {
                return 0;
            }
            len + 1
        })
    }
}
