//! Catalogue of every recognizer, addressable by its ABNF rule name.
//!
//! Lets callers (the CLI, tests, tooling) pick a production at runtime
//! instead of naming a method: `Production::from_name("defined-as")`.
//! Names use the RFC spelling and, like ABNF rule names, compare
//! case-insensitively.

use std::fmt;
use std::str::FromStr;

use crate::{Recognizer, Rule};

/// One recognizer: an RFC 5234 core rule, a structural production, or an
/// RFC 7405 string production.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Production {
    // Core rules (RFC 5234 Appendix B.1)
    Alpha,
    Bit,
    Char,
    Cr,
    Crlf,
    Ctl,
    Digit,
    Dquote,
    Hexdig,
    Htab,
    Lf,
    Lwsp,
    Octet,
    Sp,
    Vchar,
    Wsp,

    // ABNF of ABNF (RFC 5234 section 4)
    RuleList,
    Rule,
    RuleName,
    DefinedAs,
    Elements,
    CWsp,
    CNl,
    Comment,
    Alternation,
    Concatenation,
    Repetition,
    Repeat,
    Element,
    Group,
    Option,
    CharVal,
    NumVal,
    BinVal,
    DecVal,
    HexVal,
    ProseVal,

    // RFC 7405 string forms
    QuotedString,
    CaseInsensitiveString,
    CaseSensitiveString,
}

impl Production {
    /// Every production, core rules first, then in RFC order.
    pub const ALL: [Production; 40] = [
        Self::Alpha,
        Self::Bit,
        Self::Char,
        Self::Cr,
        Self::Crlf,
        Self::Ctl,
        Self::Digit,
        Self::Dquote,
        Self::Hexdig,
        Self::Htab,
        Self::Lf,
        Self::Lwsp,
        Self::Octet,
        Self::Sp,
        Self::Vchar,
        Self::Wsp,
        Self::RuleList,
        Self::Rule,
        Self::RuleName,
        Self::DefinedAs,
        Self::Elements,
        Self::CWsp,
        Self::CNl,
        Self::Comment,
        Self::Alternation,
        Self::Concatenation,
        Self::Repetition,
        Self::Repeat,
        Self::Element,
        Self::Group,
        Self::Option,
        Self::CharVal,
        Self::NumVal,
        Self::BinVal,
        Self::DecVal,
        Self::HexVal,
        Self::ProseVal,
        Self::QuotedString,
        Self::CaseInsensitiveString,
        Self::CaseSensitiveString,
    ];

    /// The rule name as spelled in the RFCs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alpha => "ALPHA",
            Self::Bit => "BIT",
            Self::Char => "CHAR",
            Self::Cr => "CR",
            Self::Crlf => "CRLF",
            Self::Ctl => "CTL",
            Self::Digit => "DIGIT",
            Self::Dquote => "DQUOTE",
            Self::Hexdig => "HEXDIG",
            Self::Htab => "HTAB",
            Self::Lf => "LF",
            Self::Lwsp => "LWSP",
            Self::Octet => "OCTET",
            Self::Sp => "SP",
            Self::Vchar => "VCHAR",
            Self::Wsp => "WSP",
            Self::RuleList => "rulelist",
            Self::Rule => "rule",
            Self::RuleName => "rulename",
            Self::DefinedAs => "defined-as",
            Self::Elements => "elements",
            Self::CWsp => "c-wsp",
            Self::CNl => "c-nl",
            Self::Comment => "comment",
            Self::Alternation => "alternation",
            Self::Concatenation => "concatenation",
            Self::Repetition => "repetition",
            Self::Repeat => "repeat",
            Self::Element => "element",
            Self::Group => "group",
            Self::Option => "option",
            Self::CharVal => "char-val",
            Self::NumVal => "num-val",
            Self::BinVal => "bin-val",
            Self::DecVal => "dec-val",
            Self::HexVal => "hex-val",
            Self::ProseVal => "prose-val",
            Self::QuotedString => "quoted-string",
            Self::CaseInsensitiveString => "case-insensitive-string",
            Self::CaseSensitiveString => "case-sensitive-string",
        }
    }

    /// Look up a production by rule name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Whether this is one of the RFC 5234 Appendix B.1 core rules.
    #[must_use]
    pub const fn is_core(self) -> bool {
        matches!(
            self,
            Self::Alpha
                | Self::Bit
                | Self::Char
                | Self::Cr
                | Self::Crlf
                | Self::Ctl
                | Self::Digit
                | Self::Dquote
                | Self::Hexdig
                | Self::Htab
                | Self::Lf
                | Self::Lwsp
                | Self::Octet
                | Self::Sp
                | Self::Vchar
                | Self::Wsp
        )
    }

    /// The recognizer method behind this production.
    pub fn rule<'a>(self) -> Rule<'a> {
        match self {
            Self::Alpha => Recognizer::alpha,
            Self::Bit => Recognizer::bit,
            Self::Char => Recognizer::char,
            Self::Cr => Recognizer::cr,
            Self::Crlf => Recognizer::crlf,
            Self::Ctl => Recognizer::ctl,
            Self::Digit => Recognizer::digit,
            Self::Dquote => Recognizer::dquote,
            Self::Hexdig => Recognizer::hexdig,
            Self::Htab => Recognizer::htab,
            Self::Lf => Recognizer::lf,
            Self::Lwsp => Recognizer::lwsp,
            Self::Octet => Recognizer::octet,
            Self::Sp => Recognizer::sp,
            Self::Vchar => Recognizer::vchar,
            Self::Wsp => Recognizer::wsp,
            Self::RuleList => Recognizer::rule_list,
            Self::Rule => Recognizer::rule,
            Self::RuleName => Recognizer::rule_name,
            Self::DefinedAs => Recognizer::defined_as,
            Self::Elements => Recognizer::elements,
            Self::CWsp => Recognizer::c_wsp,
            Self::CNl => Recognizer::c_nl,
            Self::Comment => Recognizer::comment,
            Self::Alternation => Recognizer::alternation,
            Self::Concatenation => Recognizer::concatenation,
            Self::Repetition => Recognizer::repetition,
            Self::Repeat => Recognizer::repeat_count,
            Self::Element => Recognizer::element,
            Self::Group => Recognizer::group,
            Self::Option => Recognizer::option,
            Self::CharVal => Recognizer::char_val,
            Self::NumVal => Recognizer::num_val,
            Self::BinVal => Recognizer::bin_val,
            Self::DecVal => Recognizer::dec_val,
            Self::HexVal => Recognizer::hex_val,
            Self::ProseVal => Recognizer::prose_val,
            Self::QuotedString => Recognizer::quoted_string,
            Self::CaseInsensitiveString => Recognizer::case_insensitive_string,
            Self::CaseSensitiveString => Recognizer::case_sensitive_string,
        }
    }

    /// Run this production against `recognizer` at `pos`.
    pub fn recognize(self, recognizer: &Recognizer<'_>, pos: usize) -> usize {
        (self.rule())(recognizer, pos)
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A rule name that matches no [`Production`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown production '{0}'")]
pub struct UnknownProduction(pub String);

impl FromStr for Production {
    type Err = UnknownProduction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownProduction(s.to_owned()))
    }
}
