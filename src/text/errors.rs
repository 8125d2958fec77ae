//! Error types for rich-text values
//!
//! Only construction and decoding can fail. The format operations themselves
//! treat bad ranges and missing formats as no-ops.

use thiserror::Error;

/// Invariant violations detected while building or decoding a value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RichTextError {
    /// `formats` must hold exactly one entry per character of `text`
    #[error("formats length {formats_len} does not match text length {text_len}")]
    FormatsLengthMismatch { text_len: usize, formats_len: usize },

    /// A position was given an empty stack instead of being left unset
    #[error("empty format stack at index {index}")]
    EmptyFormatStack { index: usize },

    /// Selection must satisfy `start <= end <= len`
    #[error("invalid selection {start}..{end} for text of length {len}")]
    InvalidSelection { start: usize, end: usize, len: usize },

    /// Stored instance id too large to round-trip through JavaScript
    #[error("format id {id} is out of range")]
    FormatIdOutOfRange { id: u64 },

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for RichTextError {
    fn from(err: serde_json::Error) -> Self {
        RichTextError::Json(err.to_string())
    }
}
