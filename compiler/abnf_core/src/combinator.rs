//! The three combinators every production is assembled from.
//!
//! - [`single`](Recognizer::single): run a recognizer once.
//! - [`repeat`](Recognizer::repeat): run it greedily within [`Bounds`].
//! - [`choice`](Recognizer::choice): ordered alternatives, first match wins.
//!
//! ABNF's quantifiers (`*`, `1*`, `N*M`, `[ ]`) all become a `Bounds`
//! value. The optional accumulator lets a production thread its running
//! length through a sequence of steps without re-adding each result.

use crate::Recognizer;

/// A recognizer as a plain function value: `(view, start) -> matched length`.
pub type Rule<'a> = fn(&Recognizer<'a>, usize) -> usize;

/// Occurrence bounds for [`Recognizer::repeat`].
///
/// `max == 0` means unbounded, mirroring ABNF's `min*` with no upper count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub min: usize,
    pub max: usize,
}

impl Bounds {
    /// `*rule`: zero or more, never fails.
    pub const ANY: Bounds = Bounds { min: 0, max: 0 };

    /// `1*rule`: one or more.
    pub const AT_LEAST_ONE: Bounds = Bounds { min: 1, max: 0 };

    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// `Nrule`: exactly `n` occurrences.
    pub const fn exactly(n: usize) -> Self {
        Self { min: n, max: n }
    }

    /// `*Nrule` / `[rule]` when `n == 1`. `at_most(0)` is unbounded.
    pub const fn at_most(n: usize) -> Self {
        Self { min: 0, max: n }
    }

    pub const fn is_unbounded(self) -> bool {
        self.max == 0
    }

    /// Whether another occurrence may be attempted after `count` matches.
    #[inline]
    const fn allows_more(self, count: usize) -> bool {
        self.is_unbounded() || count < self.max
    }
}

impl<'a> Recognizer<'a> {
    /// Run `rule` once at `pos`.
    ///
    /// On a match, the length is added to `acc` (when given) and returned.
    /// On no match, returns 0 and leaves `acc` untouched.
    #[inline]
    pub fn single<F>(&self, rule: F, pos: usize, acc: Option<&mut usize>) -> usize
    where
        F: Fn(&Self, usize) -> usize,
    {
        let len = rule(self, pos);
        if len > 0 {
            if let Some(acc) = acc {
                *acc += len;
            }
        }
        len
    }

    /// Run `rule` greedily from `pos`, each occurrence starting where the
    /// previous one ended.
    ///
    /// Stops at the first non-match or after `bounds.max` occurrences. With
    /// fewer than `bounds.min` occurrences the repetition fails as a whole:
    /// returns 0 and `acc` is untouched. Otherwise returns the total length
    /// (possibly 0 when `bounds.min == 0`) and adds it to `acc`.
    pub fn repeat<F>(&self, rule: F, pos: usize, acc: Option<&mut usize>, bounds: Bounds) -> usize
    where
        F: Fn(&Self, usize) -> usize,
    {
        let mut total = 0;
        let mut count = 0;
        while bounds.allows_more(count) {
            // Zero means "no match", so a rule can never spin in place here.
            let len = rule(self, pos + total);
            if len == 0 {
                break;
            }
            total += len;
            count += 1;
        }

        if count < bounds.min {
            return 0;
        }
        if let Some(acc) = acc {
            *acc += total;
        }
        total
    }

    /// Try each alternative at `pos` in order; the first non-zero length wins.
    pub fn choice(&self, alternatives: &[Rule<'a>], pos: usize) -> usize {
        alternatives
            .iter()
            .map(|alt| alt(self, pos))
            .find(|&len| len > 0)
            .unwrap_or(0)
    }
}
