//! Public API for numerus clinical numeric extraction
//!
//! This crate provides a clean, stable interface over the numerus-core
//! matching engine: pick a number kind, hand it a buffer, get decoded
//! matches with spans and run statistics back.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use numerus_core::{find_fragment, find_numbers, MagnitudeMultiplier, NumberType};

use dto::{Metadata, ScaleMatchDTO};
use error::Result;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Input, NumberMatchDTO, Output};
pub use error::ApiError;
pub use numerus_core::NumberKind;

/// Main entry point for numeric extraction
///
/// Holds one composed number type and the configured magnitude-multiplier
/// patterns. Immutable once built; share it freely across threads.
pub struct NumberExtractor {
    number_type: NumberType,
    scales: Vec<MagnitudeMultiplier>,
    config: Config,
}

impl NumberExtractor {
    /// Create an extractor with default configuration (liberal-number,
    /// billion and trillion scales)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create an extractor for a specific number kind
    pub fn with_kind(kind: NumberKind) -> Result<Self> {
        Self::with_config(Config::builder().kind_value(kind).build()?)
    }

    /// Create an extractor with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let number_type = NumberType::new(config.kind)?;
        let scales = config
            .scale_exponents
            .iter()
            .map(|n| MagnitudeMultiplier::new(*n))
            .collect::<numerus_core::Result<Vec<_>>>()?;
        Ok(Self {
            number_type,
            scales,
            config,
        })
    }

    /// Extract numerals from the input
    pub fn extract(&self, input: Input) -> Result<Output> {
        let start = std::time::Instant::now();

        let text = input.read_text()?;
        let total_bytes = text.len();
        let total_chars = text.chars().count();

        let matches: Vec<NumberMatchDTO> = find_numbers(&self.number_type, &text)
            .map(NumberMatchDTO::from)
            .collect();

        let elapsed = start.elapsed();
        tracing::debug!(
            kind = self.number_type.name(),
            total_bytes,
            match_count = matches.len(),
            elapsed_us = elapsed.as_micros() as u64,
            "extraction finished"
        );

        let metadata = Metadata {
            total_bytes,
            total_chars,
            match_count: matches.len(),
            processing_time_ms: elapsed.as_millis() as u64,
            kind: self.number_type.name().to_string(),
        };

        Ok(Output { matches, metadata })
    }

    /// Extract numerals from a text buffer (convenience method)
    pub fn extract_text(&self, text: &str) -> Result<Output> {
        self.extract(Input::from_text(text))
    }

    /// Find magnitude-multiplier notation ("×10^9" and friends) for the
    /// configured scales, in buffer order per scale
    pub fn find_scales(&self, text: &str) -> Vec<ScaleMatchDTO> {
        let mut found: Vec<ScaleMatchDTO> = self
            .scales
            .iter()
            .flat_map(|scale| {
                find_fragment(scale.fragment(), text).map(|span| ScaleMatchDTO {
                    start: span.start,
                    end: span.end,
                    text: text[span].to_string(),
                    exponent: scale.exponent(),
                })
            })
            .collect();
        found.sort_by_key(|s| (s.start, s.end));
        found
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the configured number kind
    pub fn kind(&self) -> NumberKind {
        self.config.kind
    }
}

impl Default for NumberExtractor {
    fn default() -> Self {
        Self::new().expect("default extractor creation should not fail")
    }
}

// Convenience functions

/// Extract numerals from text with the default configuration
pub fn extract_text(text: &str) -> Result<Output> {
    let extractor = NumberExtractor::new()?;
    extractor.extract(Input::from_text(text))
}

/// Extract numerals from text with a specific kind, named canonically
/// (e.g. "unsigned-integer")
pub fn extract_text_with_kind(text: &str, kind_name: &str) -> Result<Output> {
    let config = Config::builder().kind(kind_name)?.build()?;
    let extractor = NumberExtractor::with_config(config)?;
    extractor.extract(Input::from_text(text))
}
