//! Left-to-right numeral matching over a text buffer
//!
//! [`Matches`] is a lazy iterator of non-overlapping [`MatchResult`]s for
//! one [`NumberType`] over one `&str`. It carries no engine-global state:
//! a fresh scan over the same buffer with the same type always yields the
//! same sequence, and stopping early is just dropping the iterator.

use std::ops::Range;

use crate::fragment::Fragment;
use crate::number_type::NumberType;

/// One decoded numeral found in a buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Byte offset of the first matched character
    pub start: usize,
    /// Byte offset one past the last matched character
    pub end: usize,
    /// The raw matched text, exactly as it appears in the buffer
    pub text: String,
    /// +1 or -1; +1 when the number type does not consume signs
    pub sign: i32,
    /// Integer magnitude digits with thousands separators stripped
    pub int_digits: String,
    /// Fractional digits, when a decimal part was matched
    pub fraction: Option<String>,
    /// Signed integer exponent, when a scientific exponent was matched
    pub exponent: Option<i64>,
}

impl MatchResult {
    /// The matched byte range within the source buffer.
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Lazy iterator over non-overlapping numeral matches
#[derive(Debug, Clone)]
pub struct Matches<'t, 'n> {
    text: &'t str,
    number_type: &'n NumberType,
    pos: usize,
}

impl<'t, 'n> Matches<'t, 'n> {
    /// Starts a scan of `text` with `number_type` at the buffer start.
    pub fn new(number_type: &'n NumberType, text: &'t str) -> Self {
        Self {
            text,
            number_type,
            pos: 0,
        }
    }

    fn advance_one_char(&mut self) {
        if let Some(ch) = self.text[self.pos..].chars().next() {
            self.pos += ch.len_utf8();
        } else {
            self.pos = self.text.len();
        }
    }
}

impl Iterator for Matches<'_, '_> {
    type Item = MatchResult;

    fn next(&mut self) -> Option<MatchResult> {
        while self.pos < self.text.len() {
            let start = self.pos;

            if let Some(rule) = self.number_type.boundary() {
                if !rule.accepts(self.text, start) {
                    self.advance_one_char();
                    continue;
                }
            }

            match self.number_type.fragment().match_at(self.text, start) {
                Some(end) if end > start => {
                    let raw = &self.text[start..end];
                    let decoded = self.number_type.decode(raw);
                    // Resume after the span: matches never overlap.
                    self.pos = end;
                    return Some(MatchResult {
                        start,
                        end,
                        text: raw.to_string(),
                        sign: decoded.sign,
                        int_digits: decoded.int_digits,
                        fraction: decoded.fraction,
                        exponent: decoded.exponent,
                    });
                }
                _ => self.advance_one_char(),
            }
        }
        None
    }
}

/// Scans `text` for numerals of the given type.
pub fn find_numbers<'t, 'n>(number_type: &'n NumberType, text: &'t str) -> Matches<'t, 'n> {
    Matches::new(number_type, text)
}

/// Lazy iterator over non-overlapping spans of a bare fragment
///
/// Used for patterns without decode metadata, such as magnitude-multiplier
/// notation.
#[derive(Debug, Clone)]
pub struct FragmentMatches<'t, 'f> {
    text: &'t str,
    fragment: &'f Fragment,
    pos: usize,
}

impl<'t, 'f> FragmentMatches<'t, 'f> {
    /// Starts a scan of `text` with `fragment` at the buffer start.
    pub fn new(fragment: &'f Fragment, text: &'t str) -> Self {
        Self {
            text,
            fragment,
            pos: 0,
        }
    }
}

impl Iterator for FragmentMatches<'_, '_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        while self.pos < self.text.len() {
            let start = self.pos;
            match self.fragment.match_at(self.text, start) {
                Some(end) if end > start => {
                    self.pos = end;
                    return Some(start..end);
                }
                _ => {
                    let ch = self.text[self.pos..].chars().next()?;
                    self.pos += ch.len_utf8();
                }
            }
        }
        None
    }
}

/// Scans `text` for spans matched by a bare fragment.
pub fn find_fragment<'t, 'f>(fragment: &'f Fragment, text: &'t str) -> FragmentMatches<'t, 'f> {
    FragmentMatches::new(fragment, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::magnitude::MagnitudeMultiplier;
    use crate::number_type::NumberKind;

    fn number_type(kind: NumberKind) -> NumberType {
        NumberType::new(kind).unwrap()
    }

    fn collect(kind: NumberKind, text: &str) -> Vec<MatchResult> {
        find_numbers(&number_type(kind), text).collect()
    }

    #[test]
    fn test_unsigned_integer_grouped_and_plain() {
        let grouped = collect(NumberKind::UnsignedInteger, "12,000");
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].text, "12,000");
        assert_eq!(grouped[0].int_digits, "12000");
        assert_eq!(grouped[0].span(), 0..6);

        let plain = collect(NumberKind::UnsignedInteger, "12000");
        assert_eq!(plain.len(), 1);
        assert_eq!(plain[0].int_digits, "12000");
    }

    #[test]
    fn test_unsigned_integer_consumes_plus() {
        let matches = collect(NumberKind::UnsignedInteger, "+12,000");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "+12,000");
        assert_eq!(matches[0].sign, 1);
        assert_eq!(matches[0].int_digits, "12000");
    }

    #[test]
    fn test_unsigned_integer_skips_negative_numeral_entirely() {
        // Neither "-12,000" nor any inner substring may match
        assert!(collect(NumberKind::UnsignedInteger, "-12,000").is_empty());
    }

    #[test]
    fn test_plus_not_claimed_after_digit() {
        let matches = collect(NumberKind::UnsignedInteger, "3+4");
        let texts: Vec<&str> = matches.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["3", "4"]);
    }

    #[test]
    fn test_signed_float_without_exponent_support() {
        let matches = collect(NumberKind::SignedFloat, "-3.4e-27");
        // The float type stops before the exponent marker; "-27" is then
        // picked up as its own signed numeral
        assert_eq!(matches[0].text, "-3.4");
        assert_eq!(matches[0].sign, -1);
        assert_eq!(matches[0].int_digits, "3");
        assert_eq!(matches[0].fraction.as_deref(), Some("4"));
    }

    #[test]
    fn test_liberal_number_full_scientific() {
        let matches = collect(NumberKind::LiberalNumber, "-3.4e-27");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "-3.4e-27");
        assert_eq!(matches[0].sign, -1);
        assert_eq!(matches[0].int_digits, "3");
        assert_eq!(matches[0].fraction.as_deref(), Some("4"));
        assert_eq!(matches[0].exponent, Some(-27));
    }

    #[test]
    fn test_liberal_number_integer_exponent_only() {
        let matches = collect(NumberKind::LiberalNumber, "3.4e-27.1");
        assert_eq!(matches[0].text, "3.4e-27");
        assert_eq!(matches[0].exponent, Some(-27));
    }

    #[test]
    fn test_ignoresign_reads_magnitude_only() {
        let matches = collect(NumberKind::IgnoresignInteger, "-3");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "3");
        assert_eq!(matches[0].sign, 1);
        assert_eq!(matches[0].span(), 1..2);
    }

    #[test]
    fn test_matches_in_clinical_context() {
        let text = "WBC 12,000 x10^9/L, neutrophils 8,500";
        let matches = collect(NumberKind::UnsignedInteger, text);
        let digits: Vec<&str> = matches.iter().map(|m| m.int_digits.as_str()).collect();
        // "10" and "9" come from the unit notation; the pipeline composes
        // magnitude patterns to claim those separately
        assert_eq!(digits, ["12000", "10", "9", "8500"]);
    }

    #[test]
    fn test_restartable_and_deterministic() {
        let nt = number_type(NumberKind::LiberalNumber);
        let text = "pH 7.35, lactate 2.1e0, WBC 12,000";
        let first: Vec<MatchResult> = find_numbers(&nt, text).collect();
        let second: Vec<MatchResult> = find_numbers(&nt, text).collect();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_non_overlap() {
        for kind in NumberKind::ALL {
            let matches = collect(kind, "1,2345.6e-7 -8.9+10");
            for pair in matches.windows(2) {
                assert!(pair[0].end <= pair[1].start, "kind {:?}", kind);
            }
        }
    }

    #[test]
    fn test_empty_and_numberless_buffers() {
        assert!(collect(NumberKind::LiberalNumber, "").is_empty());
        assert!(collect(NumberKind::LiberalNumber, "no numerals here").is_empty());
    }

    #[test]
    fn test_fragment_matches_magnitude_notation() {
        let billion = MagnitudeMultiplier::billion().unwrap();
        let text = "counts of 12 ×10^9/L and 3 x10**9/L";
        let spans: Vec<_> = find_fragment(billion.fragment(), text).collect();
        let found: Vec<&str> = spans.iter().map(|s| &text[s.clone()]).collect();
        assert_eq!(found, ["×10^9", "x10**9"]);
    }

    #[test]
    fn test_early_termination_by_dropping() {
        let nt = number_type(NumberKind::UnsignedInteger);
        let mut iter = find_numbers(&nt, "1 2 3 4 5");
        assert_eq!(iter.next().unwrap().text, "1");
        assert_eq!(iter.next().unwrap().text, "2");
        // Dropping the iterator here is the cancellation story
    }
}
