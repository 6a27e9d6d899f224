//! Magnitude-multiplier notation ("×10^n" and friends)
//!
//! Clinical sources write power-of-ten scale factors in many shapes:
//! "×10^9", "*10^9", "x10**9", and the bare shorthand "10*9". The builder
//! here produces one fragment per exponent, so compound quantity patterns
//! (e.g. "12,000 ×10^9/L") can be assembled elsewhere without hand-writing
//! a pattern per scale.

use crate::error::Result;
use crate::fragment::{
    multiply_glyph, one_or_more, optional, power_operator_incl_e_or_asterisk, seq, Fragment,
};

/// Builds a fragment recognizing "×10^n"-style notation for exponent `n`.
///
/// Shape: optional multiply glyph, optional whitespace, "10", optional
/// whitespace, a power operator (`e`, `^`, `**` or `*`), optional
/// whitespace, then the literal digits of `n`. The exponent digits are
/// literal, so the fragment for n=9 does not match "×10^8".
pub fn times_ten_to_power(n: i64) -> Fragment {
    // Zero or more whitespace characters between tokens
    let space = optional(one_or_more(Fragment::Whitespace));
    seq(vec![
        optional(multiply_glyph()),
        space.clone(),
        Fragment::Literal("10".to_string()),
        space.clone(),
        power_operator_incl_e_or_asterisk(),
        space,
        Fragment::Literal(n.to_string()),
    ])
}

/// A pre-composed magnitude-multiplier pattern with its decoded scale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagnitudeMultiplier {
    exponent: i64,
    fragment: Fragment,
}

impl MagnitudeMultiplier {
    /// Builds the validated multiplier pattern for `10^exponent`.
    ///
    /// The exponent is an integer by type; textual exponent input is
    /// parsed and rejected upstream, before this constructor is reached.
    pub fn new(exponent: i64) -> Result<Self> {
        let fragment = times_ten_to_power(exponent);
        fragment.validate()?;
        Ok(Self { exponent, fragment })
    }

    /// Billion scale (10^9), as in cell-count units like "×10⁹/L"
    /// written "×10^9/L".
    pub fn billion() -> Result<Self> {
        Self::new(9)
    }

    /// Trillion scale (10^12).
    pub fn trillion() -> Result<Self> {
        Self::new(12)
    }

    /// The logical scale this pattern denotes, as a power-of-ten exponent.
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// The composed pattern fragment.
    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }
}
