//! Core error types (deterministic only)
//!
//! Every variant is a construction-time failure: a fragment or number type
//! that is malformed is rejected when it is built, never at match time.
//! Matching itself cannot fail: a non-match is an empty result, not an error.

use thiserror::Error;

/// Errors raised while composing fragments and number types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An alternation with no alternatives can never match anything
    #[error("alternation fragment has no alternatives")]
    EmptyAlternation,

    /// A sequence with no parts is ill-formed
    #[error("sequence fragment has no parts")]
    EmptySequence,

    /// Repetition over a fragment that can match the empty string would
    /// loop without consuming input
    #[error("repetition over a fragment that can match empty input")]
    NullableRepetition,

    /// Repetition bounds are inverted or zero-width
    #[error("invalid repetition bounds: min {min}, max {max}")]
    InvalidRepetition {
        /// Minimum repetition count requested
        min: usize,
        /// Maximum repetition count requested
        max: usize,
    },
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
