//! Boundary disambiguation: zero-width adjacency checks
//!
//! A [`BoundaryRule`] inspects a fixed-size backward window of characters
//! ending at a candidate match start and accepts or rejects the candidate.
//! It matches no characters itself and never advances the scan cursor.
//!
//! The original numeral grammar expressed these checks as regex lookbehind
//! assertions. Lookbehind is not uniformly available across matching
//! engines (linear-time engines in particular lack it), so the rules here
//! are ordinary backward character comparisons performed by the engine
//! itself, independent of any regex dialect.

use smallvec::SmallVec;

use crate::fragment::is_minus_glyph;

/// A zero-width check applied at a candidate match start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryRule {
    /// Rejects a candidate whose immediately preceding text is a minus
    /// glyph, a digit, a digit followed by a comma, or a period.
    ///
    /// An unsigned numeral must not claim a `+` that is really a
    /// continuation of a larger numeral or an operator ("3+4"), and must
    /// not start inside a signed or decimal numeral that a signed matcher
    /// already covers ("-12,000", "3.5").
    NoPrecedingMinusOrContinuation,
}

impl BoundaryRule {
    /// Returns true if a match starting at byte offset `start` is
    /// acceptable. `start` must lie on a character boundary.
    pub fn accepts(&self, text: &str, start: usize) -> bool {
        // Window of at most two characters immediately before `start`,
        // nearest first.
        let window: SmallVec<[char; 2]> = text[..start].chars().rev().take(2).collect();

        match self {
            BoundaryRule::NoPrecedingMinusOrContinuation => {
                let Some(&prev) = window.first() else {
                    return true; // start of buffer
                };
                if is_minus_glyph(prev) || prev.is_ascii_digit() || prev == '.' {
                    return false;
                }
                // A comma directly after a digit is a thousands separator
                // inside a longer numeral.
                if prev == ',' && window.get(1).is_some_and(|c| c.is_ascii_digit()) {
                    return false;
                }
                true
            }
        }
    }
}
