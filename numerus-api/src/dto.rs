//! Data Transfer Objects for the API

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use numerus_core::MatchResult;

use crate::error::{ApiError, Result};

/// Input source for extraction
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

/// One extracted numeral (FFI-safe DTO)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberMatchDTO {
    /// Byte offset of the first matched character
    pub start: usize,
    /// Byte offset one past the last matched character
    pub end: usize,
    /// The raw matched text
    pub text: String,
    /// +1 or -1
    pub sign: i32,
    /// Integer magnitude digits, thousands separators stripped
    pub int_digits: String,
    /// Fractional digits, if a decimal part was present
    pub fraction: Option<String>,
    /// Signed integer exponent, if a scientific exponent was present
    pub exponent: Option<i64>,
}

impl From<MatchResult> for NumberMatchDTO {
    fn from(m: MatchResult) -> Self {
        Self {
            start: m.start,
            end: m.end,
            text: m.text,
            sign: m.sign,
            int_digits: m.int_digits,
            fraction: m.fraction,
            exponent: m.exponent,
        }
    }
}

/// One recognized magnitude-multiplier notation span
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleMatchDTO {
    /// Byte offset of the first matched character
    pub start: usize,
    /// Byte offset one past the last matched character
    pub end: usize,
    /// The raw matched notation, e.g. "x10^9"
    pub text: String,
    /// The power-of-ten exponent the notation denotes
    pub exponent: i64,
}

/// Extraction run statistics
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Total bytes scanned
    pub total_bytes: usize,
    /// Total characters scanned
    pub total_chars: usize,
    /// Number of numerals extracted
    pub match_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Canonical name of the number kind used
    pub kind: String,
}

/// Extraction result: matches plus run statistics
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Extracted numerals, in buffer order
    pub matches: Vec<NumberMatchDTO>,
    /// Run statistics
    pub metadata: Metadata,
}
