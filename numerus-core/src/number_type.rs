//! Number-type composition
//!
//! Combines fragment-library pieces and boundary rules into the seven named
//! numeric types, each with its own sign and boundary policy. A
//! [`NumberType`] is built once, validated at construction, and reused for
//! any number of matches; it is immutable and freely shareable.

use crate::boundary::BoundaryRule;
use crate::error::Result;
use crate::fragment::{
    decimal_fraction, is_minus_glyph, optional, plus_sign, scientific_exponent, seq, sign,
    thousands_grouped_digit_run, Fragment,
};

/// The seven built-in numeric types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// Integer; an adjacent sign glyph is not consumed. Beware: on "-3"
    /// this reads "3".
    IgnoresignInteger,
    /// Integer with an optional consumed sign
    SignedInteger,
    /// Integer with an optional `+`; rejected when the preceding text
    /// makes the candidate a continuation of a larger numeral
    UnsignedInteger,
    /// Float; an adjacent sign glyph is not consumed
    IgnoresignFloat,
    /// Float with an optional consumed sign
    SignedFloat,
    /// Float with an optional `+` and the continuation boundary check
    UnsignedFloat,
    /// Optional sign, optional fraction, optional scientific exponent
    LiberalNumber,
}

impl NumberKind {
    /// All built-in kinds.
    pub const ALL: [NumberKind; 7] = [
        NumberKind::IgnoresignInteger,
        NumberKind::SignedInteger,
        NumberKind::UnsignedInteger,
        NumberKind::IgnoresignFloat,
        NumberKind::SignedFloat,
        NumberKind::UnsignedFloat,
        NumberKind::LiberalNumber,
    ];

    /// Canonical name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            NumberKind::IgnoresignInteger => "ignoresign-integer",
            NumberKind::SignedInteger => "signed-integer",
            NumberKind::UnsignedInteger => "unsigned-integer",
            NumberKind::IgnoresignFloat => "ignoresign-float",
            NumberKind::SignedFloat => "signed-float",
            NumberKind::UnsignedFloat => "unsigned-float",
            NumberKind::LiberalNumber => "liberal-number",
        }
    }

    /// Looks up a kind by its canonical name.
    pub fn from_name(name: &str) -> Option<NumberKind> {
        NumberKind::ALL.iter().copied().find(|k| k.name() == name)
    }
}

/// How a leading sign glyph is handled when composing and decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignPolicy {
    /// No sign fragment composed; a textually present glyph stays in the
    /// buffer before the match span, and the decoded sign defaults to +1
    Ignore,
    /// Optional `+` or minus glyph, consumed and recorded
    Signed,
    /// Optional `+` only, consumed; minus never matches
    UnsignedPlus,
}

/// A named, composed numeric pattern with decode metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberType {
    kind: NumberKind,
    fragment: Fragment,
    boundary: Option<BoundaryRule>,
    sign_policy: SignPolicy,
}

/// Structured parts decoded from a raw matched numeral
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedNumber {
    /// +1 or -1; +1 when the type does not consume signs
    pub sign: i32,
    /// Integer magnitude with thousands separators stripped. Kept as a
    /// digit string so arbitrarily long numerals never overflow or lose
    /// digits.
    pub int_digits: String,
    /// Fractional digits, when a decimal part was matched
    pub fraction: Option<String>,
    /// Signed integer exponent, when a scientific exponent was matched
    pub exponent: Option<i64>,
}

impl NumberType {
    /// Builds the composed, validated pattern for `kind`.
    pub fn new(kind: NumberKind) -> Result<Self> {
        let integer = thousands_grouped_digit_run();
        let (fragment, boundary, sign_policy) = match kind {
            NumberKind::IgnoresignInteger => (integer, None, SignPolicy::Ignore),
            NumberKind::SignedInteger => (
                seq(vec![optional(sign()), integer]),
                None,
                SignPolicy::Signed,
            ),
            NumberKind::UnsignedInteger => (
                seq(vec![optional(plus_sign()), integer]),
                Some(BoundaryRule::NoPrecedingMinusOrContinuation),
                SignPolicy::UnsignedPlus,
            ),
            NumberKind::IgnoresignFloat => (
                seq(vec![integer, optional(decimal_fraction())]),
                None,
                SignPolicy::Ignore,
            ),
            NumberKind::SignedFloat => (
                seq(vec![
                    optional(sign()),
                    integer,
                    optional(decimal_fraction()),
                ]),
                None,
                SignPolicy::Signed,
            ),
            NumberKind::UnsignedFloat => (
                seq(vec![
                    optional(plus_sign()),
                    integer,
                    optional(decimal_fraction()),
                ]),
                Some(BoundaryRule::NoPrecedingMinusOrContinuation),
                SignPolicy::UnsignedPlus,
            ),
            NumberKind::LiberalNumber => (
                seq(vec![
                    optional(sign()),
                    integer,
                    optional(decimal_fraction()),
                    optional(scientific_exponent()),
                ]),
                None,
                SignPolicy::Signed,
            ),
        };
        fragment.validate()?;
        Ok(Self {
            kind,
            fragment,
            boundary,
            sign_policy,
        })
    }

    /// The kind this type was composed for.
    pub fn kind(&self) -> NumberKind {
        self.kind
    }

    /// Canonical name of this type.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// The composed pattern fragment.
    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    /// The boundary rule gating candidate starts, if any.
    pub fn boundary(&self) -> Option<BoundaryRule> {
        self.boundary
    }

    /// The sign policy used during composition and decoding.
    pub fn sign_policy(&self) -> SignPolicy {
        self.sign_policy
    }

    /// Decodes the raw text of a successful match into structured parts.
    ///
    /// `raw` must be exactly the substring this type's fragment matched.
    pub fn decode(&self, raw: &str) -> DecodedNumber {
        let mut rest = raw;
        let mut sign = 1;

        if self.sign_policy != SignPolicy::Ignore {
            if let Some(ch) = rest.chars().next() {
                if ch == '+' {
                    rest = &rest[ch.len_utf8()..];
                } else if is_minus_glyph(ch) {
                    sign = -1;
                    rest = &rest[ch.len_utf8()..];
                }
            }
        }

        let mut int_digits = String::new();
        let mut chars = rest.char_indices().peekable();
        while let Some(&(_, ch)) = chars.peek() {
            if ch.is_ascii_digit() {
                int_digits.push(ch);
                chars.next();
            } else if ch == ',' {
                chars.next();
            } else {
                break;
            }
        }

        let mut fraction = None;
        if let Some(&(_, '.')) = chars.peek() {
            chars.next();
            let mut digits = String::new();
            while let Some(&(_, ch)) = chars.peek() {
                if !ch.is_ascii_digit() {
                    break;
                }
                digits.push(ch);
                chars.next();
            }
            fraction = Some(digits);
        }

        let mut exponent = None;
        if let Some(&(_, ch)) = chars.peek() {
            if ch == 'e' || ch == 'E' {
                chars.next();
                let mut negative = false;
                if let Some(&(_, sign_ch)) = chars.peek() {
                    if sign_ch == '+' {
                        chars.next();
                    } else if is_minus_glyph(sign_ch) {
                        negative = true;
                        chars.next();
                    }
                }
                let digits: String = chars.map(|(_, c)| c).collect();
                exponent = Some(parse_exponent(negative, &digits));
            }
        }

        DecodedNumber {
            sign,
            int_digits,
            fraction,
            exponent,
        }
    }
}

/// Parses exponent digits, saturating at the i64 range rather than failing;
/// the digit string itself is already validated by the fragment.
fn parse_exponent(negative: bool, digits: &str) -> i64 {
    match digits.parse::<i64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    }
}

/// Convenience: build every built-in number type.
pub fn all_number_types() -> Result<Vec<NumberType>> {
    NumberKind::ALL.iter().map(|k| NumberType::new(*k)).collect()
}
