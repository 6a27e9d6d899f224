//! Numeric-pattern composition and matching for clinical free text
//!
//! This crate recognizes numeric literals (integers, decimals, scientific
//! notation, thousands-grouped numerals, "×10^n" magnitude notation)
//! embedded in noisy unstructured text. It is the engine underneath
//! structured-value extraction: given a buffer and a composed number type,
//! it yields non-overlapping, decoded matches with byte spans.
//!
//! # Architecture
//!
//! - **Fragment library** ([`fragment`]): primitive pattern pieces and the
//!   combinators that compose them, as pure immutable values.
//! - **Boundary rules** ([`boundary`]): zero-width adjacency checks that
//!   decide where a numeral may begin, replacing regex lookbehind with
//!   explicit backward inspection.
//! - **Number types** ([`number_type`]): the seven named compositions with
//!   their sign and boundary policies, plus decode metadata.
//! - **Magnitude multipliers** ([`magnitude`]): "×10^n" scale notation,
//!   generic over the exponent.
//! - **Matcher** ([`matcher`]): the lazy left-to-right scan.
//!
//! # Example
//!
//! ```rust
//! use numerus_core::{find_numbers, NumberKind, NumberType};
//!
//! let unsigned = NumberType::new(NumberKind::UnsignedInteger).unwrap();
//! let matches: Vec<_> = find_numbers(&unsigned, "WBC 12,000/uL").collect();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].text, "12,000");
//! assert_eq!(matches[0].int_digits, "12000");
//! ```

#![warn(missing_docs)]

pub mod boundary;
pub mod error;
pub mod fragment;
pub mod magnitude;
pub mod matcher;
pub mod number_type;

pub use boundary::BoundaryRule;
pub use error::{CoreError, Result};
pub use fragment::Fragment;
pub use magnitude::{times_ten_to_power, MagnitudeMultiplier};
pub use matcher::{find_fragment, find_numbers, FragmentMatches, MatchResult, Matches};
pub use number_type::{all_number_types, DecodedNumber, NumberKind, NumberType, SignPolicy};
