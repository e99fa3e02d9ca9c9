//! Document-level productions: rules, definitions, comments, line ends.

use tracing::trace;

use crate::{Bounds, Recognizer, Rule};

impl<'a> Recognizer<'a> {
    /// `rulelist = 1*( rule / (*c-wsp c-nl) )`
    ///
    /// The entry point for a whole grammar document.
    pub fn rule_list(&self, pos: usize) -> usize {
        self.repeat(Self::rule_list_item, pos, None, Bounds::AT_LEAST_ONE)
    }

    /// `rule / (*c-wsp c-nl)`
    fn rule_list_item(&self, pos: usize) -> usize {
        let len = self.rule(pos);
        if len > 0 {
            trace!(pos, len, "rule");
            return len;
        }

        let mut len = 0;
        self.repeat(Self::c_wsp, pos, Some(&mut len), Bounds::ANY);
        if self.single(Self::c_nl, pos + len, Some(&mut len)) == 0 {
            return 0;
        }
        len
    }

    /// `rule = rulename defined-as elements c-nl`
    pub fn rule(&self, pos: usize) -> usize {
        let steps: [Rule<'a>; 4] = [Self::rule_name, Self::defined_as, Self::elements, Self::c_nl];
        let mut len = 0;
        for step in steps {
            if self.single(step, pos + len, Some(&mut len)) == 0 {
                return 0;
            }
        }
        len
    }

    /// `rulename = ALPHA *(ALPHA / DIGIT / "-")`
    pub fn rule_name(&self, pos: usize) -> usize {
        let mut len = 0;
        if self.single(Self::alpha, pos, Some(&mut len)) == 0 {
            return 0;
        }
        self.repeat(Self::rule_name_char, pos + len, Some(&mut len), Bounds::ANY);
        len
    }

    fn rule_name_char(&self, pos: usize) -> usize {
        self.byte_if(pos, |b| b.is_ascii_alphanumeric() || b == b'-')
    }

    /// `defined-as = *c-wsp ("=" / "=/") *c-wsp`
    pub fn defined_as(&self, pos: usize) -> usize {
        let mut len = 0;
        self.repeat(Self::c_wsp, pos, Some(&mut len), Bounds::ANY);
        if self.literal(pos + len, b'=') == 0 {
            return 0;
        }
        len += 1;
        // Incremental alternative: "=/"
        len += self.literal(pos + len, b'/');
        self.repeat(Self::c_wsp, pos + len, Some(&mut len), Bounds::ANY);
        len
    }

    /// `elements = alternation *c-wsp`
    pub fn elements(&self, pos: usize) -> usize {
        let mut len = 0;
        if self.single(Self::alternation, pos, Some(&mut len)) == 0 {
            return 0;
        }
        self.repeat(Self::c_wsp, pos + len, Some(&mut len), Bounds::ANY);
        len
    }

    /// `c-wsp = WSP / (c-nl WSP)`
    ///
    /// The second branch is a folded line: a newline (or comment) followed by
    /// indentation continues the current rule.
    pub fn c_wsp(&self, pos: usize) -> usize {
        let alternatives: [Rule<'a>; 2] = [Self::wsp, Self::folded_line];
        self.choice(&alternatives, pos)
    }

    /// `c-nl WSP`
    fn folded_line(&self, pos: usize) -> usize {
        let mut len = 0;
        if self.single(Self::c_nl, pos, Some(&mut len)) == 0
            || self.single(Self::wsp, pos + len, Some(&mut len)) == 0
        {
            return 0;
        }
        len
    }

    /// `c-nl = comment / CRLF`
    pub fn c_nl(&self, pos: usize) -> usize {
        let alternatives: [Rule<'a>; 2] = [Self::comment, Self::crlf];
        self.choice(&alternatives, pos)
    }

    /// `comment = ";" *(WSP / VCHAR) CRLF`
    ///
    /// A comment running into the end marker without its CRLF is no match.
    pub fn comment(&self, pos: usize) -> usize {
        if self.literal(pos, b';') == 0 {
            return 0;
        }
        let mut len = 1;
        self.repeat(Self::comment_char, pos + len, Some(&mut len), Bounds::ANY);
        if self.single(Self::crlf, pos + len, Some(&mut len)) == 0 {
            return 0;
        }
        len
    }

    /// `WSP / VCHAR`
    fn comment_char(&self, pos: usize) -> usize {
        let alternatives: [Rule<'a>; 2] = [Self::wsp, Self::vchar];
        self.choice(&alternatives, pos)
    }
}

#[cfg(test)]
mod tests;
