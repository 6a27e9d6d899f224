//! High-level extraction configuration

use numerus_core::NumberKind;

use crate::error::{ApiError, Result};

/// Configuration for a [`crate::NumberExtractor`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) kind: NumberKind,
    pub(crate) scale_exponents: Vec<i64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kind: NumberKind::LiberalNumber,
            // Billion and trillion scales, the ones clinical cell-count
            // units actually use
            scale_exponents: vec![9, 12],
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The configured number kind
    pub fn kind(&self) -> NumberKind {
        self.kind
    }

    /// The configured magnitude-scale exponents
    pub fn scale_exponents(&self) -> &[i64] {
        &self.scale_exponents
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Select the number kind by its canonical name, e.g. "signed-float".
    pub fn kind(mut self, name: &str) -> Result<Self> {
        let kind = NumberKind::from_name(name).ok_or_else(|| ApiError::UnknownNumberKind {
            name: name.to_string(),
        })?;
        self.config.kind = kind;
        Ok(self)
    }

    /// Select the number kind directly.
    pub fn kind_value(mut self, kind: NumberKind) -> Self {
        self.config.kind = kind;
        self
    }

    /// Replace the magnitude-scale exponents with the given integers.
    pub fn scale_exponents(mut self, exponents: Vec<i64>) -> Self {
        self.config.scale_exponents = exponents;
        self
    }

    /// Add a magnitude scale from textual exponent input.
    ///
    /// Rejected at build time when the text is not an integer: "9" is a
    /// valid scale, "9.5" is not and is never silently coerced.
    pub fn scale_exponent(mut self, text: &str) -> Result<Self> {
        let exponent: i64 = text.trim().parse().map_err(|_| {
            ApiError::Config(format!(
                "magnitude scale exponent must be an integer, got '{text}'"
            ))
        })?;
        self.config.scale_exponents.push(exponent);
        Ok(self)
    }

    /// Drop the default scales, keeping only explicitly added ones.
    pub fn no_default_scales(mut self) -> Self {
        self.config.scale_exponents.clear();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<Config> {
        Ok(self.config)
    }
}
