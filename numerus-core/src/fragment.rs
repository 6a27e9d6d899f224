//! Fragment library: primitive pattern pieces and combinators
//!
//! A [`Fragment`] is an immutable, composable text-matching rule. Fragments
//! are pure values: composing two fragments never mutates either, and the
//! same definition always matches the same way over the same text window.
//!
//! Matching is possessive (PEG-style): alternatives are tried in order and
//! the first success wins, repetitions are greedy and never give characters
//! back. The primitives below are arranged so this agrees with the numeral
//! grammar. In particular the thousands-grouped alternative is listed
//! before the bare digit run, otherwise "12,000" would be read as "12".
//! Possessive matching keeps the worst case linear in the text length.

use crate::error::{CoreError, Result};

/// Glyphs accepted as a multiplication sign in clinical shorthand.
pub const MULTIPLY_GLYPHS: [char; 4] = ['x', '*', '×', '⋅'];

/// Glyphs accepted as a minus sign: ASCII hyphen-minus, Unicode minus
/// sign, en dash. Clinical text sources vary in which one they use.
pub const MINUS_GLYPHS: [char; 3] = ['-', '−', '–'];

/// Returns true if `ch` is one of the accepted minus glyphs.
pub fn is_minus_glyph(ch: char) -> bool {
    MINUS_GLYPHS.contains(&ch)
}

/// An immutable, composable text-matching rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A single literal character
    Char(char),
    /// Any one character from a set
    AnyOf(Vec<char>),
    /// One ASCII decimal digit
    Digit,
    /// One whitespace character
    Whitespace,
    /// An exact literal string
    Literal(String),
    /// Ordered concatenation: every part must match in turn
    Seq(Vec<Fragment>),
    /// Ordered alternation: the first alternative that matches wins
    Alt(Vec<Fragment>),
    /// Zero or one occurrence
    Opt(Box<Fragment>),
    /// One or more occurrences, greedy
    OneOrMore(Box<Fragment>),
    /// Between `min` and `max` occurrences (inclusive), greedy
    Repeat {
        /// The repeated fragment
        frag: Box<Fragment>,
        /// Minimum occurrence count
        min: usize,
        /// Maximum occurrence count
        max: usize,
    },
}

impl Fragment {
    /// Attempts to match this fragment at byte offset `pos` in `text`.
    ///
    /// Returns the byte offset one past the matched region on success.
    /// `pos` must lie on a character boundary.
    pub fn match_at(&self, text: &str, pos: usize) -> Option<usize> {
        match self {
            Fragment::Char(c) => {
                let ch = text[pos..].chars().next()?;
                (ch == *c).then(|| pos + ch.len_utf8())
            }
            Fragment::AnyOf(set) => {
                let ch = text[pos..].chars().next()?;
                set.contains(&ch).then(|| pos + ch.len_utf8())
            }
            Fragment::Digit => {
                let ch = text[pos..].chars().next()?;
                ch.is_ascii_digit().then(|| pos + 1)
            }
            Fragment::Whitespace => {
                let ch = text[pos..].chars().next()?;
                ch.is_whitespace().then(|| pos + ch.len_utf8())
            }
            Fragment::Literal(s) => text[pos..].starts_with(s.as_str()).then(|| pos + s.len()),
            Fragment::Seq(parts) => {
                let mut cursor = pos;
                for part in parts {
                    cursor = part.match_at(text, cursor)?;
                }
                Some(cursor)
            }
            Fragment::Alt(alts) => alts.iter().find_map(|alt| alt.match_at(text, pos)),
            Fragment::Opt(inner) => Some(inner.match_at(text, pos).unwrap_or(pos)),
            Fragment::OneOrMore(inner) => {
                let mut cursor = inner.match_at(text, pos)?;
                while let Some(next) = inner.match_at(text, cursor) {
                    if next == cursor {
                        break;
                    }
                    cursor = next;
                }
                Some(cursor)
            }
            Fragment::Repeat { frag, min, max } => {
                let mut cursor = pos;
                let mut count = 0;
                while count < *max {
                    match frag.match_at(text, cursor) {
                        Some(next) if next > cursor => {
                            cursor = next;
                            count += 1;
                        }
                        _ => break,
                    }
                }
                (count >= *min).then_some(cursor)
            }
        }
    }

    /// Returns true if this fragment can match the empty string.
    pub fn is_nullable(&self) -> bool {
        match self {
            Fragment::Char(_) | Fragment::AnyOf(_) | Fragment::Digit | Fragment::Whitespace => {
                false
            }
            Fragment::Literal(s) => s.is_empty(),
            Fragment::Seq(parts) => parts.iter().all(Fragment::is_nullable),
            Fragment::Alt(alts) => alts.iter().any(Fragment::is_nullable),
            Fragment::Opt(_) => true,
            Fragment::OneOrMore(inner) => inner.is_nullable(),
            Fragment::Repeat { frag, min, .. } => *min == 0 || frag.is_nullable(),
        }
    }

    /// Validates this fragment's composition.
    ///
    /// Rejects empty sequences/alternations, inverted repetition bounds and
    /// repetition over nullable bodies (which would loop without consuming
    /// input). Called when a number type is built, so malformed composition
    /// fails at construction time rather than at match time.
    pub fn validate(&self) -> Result<()> {
        match self {
            Fragment::Char(_)
            | Fragment::AnyOf(_)
            | Fragment::Digit
            | Fragment::Whitespace
            | Fragment::Literal(_) => Ok(()),
            Fragment::Seq(parts) => {
                if parts.is_empty() {
                    return Err(CoreError::EmptySequence);
                }
                parts.iter().try_for_each(Fragment::validate)
            }
            Fragment::Alt(alts) => {
                if alts.is_empty() {
                    return Err(CoreError::EmptyAlternation);
                }
                alts.iter().try_for_each(Fragment::validate)
            }
            Fragment::Opt(inner) => inner.validate(),
            Fragment::OneOrMore(inner) => {
                if inner.is_nullable() {
                    return Err(CoreError::NullableRepetition);
                }
                inner.validate()
            }
            Fragment::Repeat { frag, min, max } => {
                if min > max || *max == 0 {
                    return Err(CoreError::InvalidRepetition {
                        min: *min,
                        max: *max,
                    });
                }
                if frag.is_nullable() {
                    return Err(CoreError::NullableRepetition);
                }
                frag.validate()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Combinators
// ---------------------------------------------------------------------------

/// Ordered concatenation of fragments.
pub fn seq(parts: Vec<Fragment>) -> Fragment {
    Fragment::Seq(parts)
}

/// Ordered alternation: the first alternative that matches wins.
pub fn one_of(alts: Vec<Fragment>) -> Fragment {
    Fragment::Alt(alts)
}

/// Zero or one occurrence of `frag`.
pub fn optional(frag: Fragment) -> Fragment {
    Fragment::Opt(Box::new(frag))
}

/// One or more occurrences of `frag`, greedy.
pub fn one_or_more(frag: Fragment) -> Fragment {
    Fragment::OneOrMore(Box::new(frag))
}

/// Between `min` and `max` occurrences of `frag`, greedy.
pub fn repeat(frag: Fragment, min: usize, max: usize) -> Fragment {
    Fragment::Repeat {
        frag: Box::new(frag),
        min,
        max,
    }
}

// ---------------------------------------------------------------------------
// Primitive library
// ---------------------------------------------------------------------------
// Named building blocks for the numeral grammar. Each builder returns a
// fresh value; number types compose them by value and share nothing.

/// One multiplication glyph: x, *, ×, ⋅
pub fn multiply_glyph() -> Fragment {
    Fragment::AnyOf(MULTIPLY_GLYPHS.to_vec())
}

/// A multiplication glyph or a whitespace character.
pub fn multiply_or_space() -> Fragment {
    one_of(vec![multiply_glyph(), Fragment::Whitespace])
}

/// A power operator: `^` or `**`.
pub fn power_operator() -> Fragment {
    one_of(vec![
        Fragment::Literal("**".to_string()),
        Fragment::Char('^'),
    ])
}

/// A power operator additionally accepting a bare `e`/`E`
/// (scientific-notation marker reused as a power marker in shorthand).
pub fn power_operator_incl_e() -> Fragment {
    one_of(vec![
        Fragment::AnyOf(vec!['e', 'E']),
        Fragment::Literal("**".to_string()),
        Fragment::Char('^'),
    ])
}

/// A power operator additionally accepting a single `*`, for shorthand
/// like "10*9" meaning ×10^9.
///
/// `**` must be tried before `*` so the two-character operator is not
/// split into two matches.
pub fn power_operator_incl_e_or_asterisk() -> Fragment {
    one_of(vec![
        Fragment::AnyOf(vec!['e', 'E']),
        Fragment::Literal("**".to_string()),
        Fragment::Char('^'),
        Fragment::Char('*'),
    ])
}

/// A literal plus sign.
pub fn plus_sign() -> Fragment {
    Fragment::Char('+')
}

/// One minus glyph: ASCII hyphen-minus, Unicode minus sign, or en dash.
pub fn minus_sign() -> Fragment {
    Fragment::AnyOf(MINUS_GLYPHS.to_vec())
}

/// A plus or minus sign.
pub fn sign() -> Fragment {
    one_of(vec![plus_sign(), minus_sign()])
}

/// One or more ASCII decimal digits.
pub fn plain_digit_run() -> Fragment {
    one_or_more(Fragment::Digit)
}

/// A digit run allowing commas as thousands separators.
///
/// Either one-to-three digits followed by one or more ",ddd" groups, or a
/// plain digit run. The grouped alternative comes first: a bare `\d+` is
/// greedier and would otherwise claim the "12" of "12,000" and stop at
/// the comma.
pub fn thousands_grouped_digit_run() -> Fragment {
    one_of(vec![
        seq(vec![
            repeat(Fragment::Digit, 1, 3),
            one_or_more(seq(vec![Fragment::Char(','), repeat(Fragment::Digit, 3, 3)])),
        ]),
        plain_digit_run(),
    ])
}

/// A decimal point followed by one or more digits.
pub fn decimal_fraction() -> Fragment {
    seq(vec![Fragment::Char('.'), plain_digit_run()])
}

/// A scientific-notation exponent: `E`/`e`, optional sign, digits.
///
/// Exponents are always integers; on "3.4e-27.1" this fragment stops
/// before the second period.
pub fn scientific_exponent() -> Fragment {
    seq(vec![
        Fragment::AnyOf(vec!['E', 'e']),
        optional(sign()),
        plain_digit_run(),
    ])
}
