//! Rich-text value: text plus per-character format stacks
//!
//! A value is never edited in place. Operations borrow one and return a new
//! one; stacks are `Arc`-shared so unchanged positions cost a pointer copy.

use super::errors::RichTextError;
use super::format::FormatDescriptor;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Formats active at one character, innermost last. Never empty.
pub type FormatStack = Arc<[FormatDescriptor]>;

/// Build a stack from descriptors; `None` when there are none
pub fn format_stack(formats: impl IntoIterator<Item = FormatDescriptor>) -> Option<FormatStack> {
    let formats: Vec<FormatDescriptor> = formats.into_iter().collect();
    if formats.is_empty() {
        None
    } else {
        Some(formats.into())
    }
}

/// Text annotated with formats and a selection
///
/// `formats[i]` belongs to the i-th `char` of `text`. The selection is
/// `start..end` in chars; `start == end` is a caret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawRichTextValue")]
pub struct RichTextValue {
    text: String,
    formats: Vec<Option<FormatStack>>,
    start: usize,
    end: usize,
    /// Formats pending at a caret, waiting for text to be typed
    #[serde(skip_serializing_if = "Option::is_none")]
    active_formats: Option<Vec<FormatDescriptor>>,
}

impl RichTextValue {
    /// Create a value from text and its format stacks, caret at 0
    pub fn new(
        text: impl Into<String>,
        formats: Vec<Option<FormatStack>>,
    ) -> Result<Self, RichTextError> {
        let text = text.into();
        let text_len = text.chars().count();

        if formats.len() != text_len {
            return Err(RichTextError::FormatsLengthMismatch {
                text_len,
                formats_len: formats.len(),
            });
        }

        if let Some(index) = formats
            .iter()
            .position(|stack| matches!(stack, Some(s) if s.is_empty()))
        {
            return Err(RichTextError::EmptyFormatStack { index });
        }

        Ok(Self {
            text,
            formats,
            start: 0,
            end: 0,
            active_formats: None,
        })
    }

    /// Create an unformatted value from plain text
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let formats = vec![None; text.chars().count()];
        Self::from_parts(text, formats, 0, 0, None)
    }

    /// Create an empty value
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// Set the selection, checking `start <= end <= len`
    pub fn with_selection(mut self, start: usize, end: usize) -> Result<Self, RichTextError> {
        let len = self.len();
        if start > end || end > len {
            return Err(RichTextError::InvalidSelection { start, end, len });
        }
        self.start = start;
        self.end = end;
        Ok(self)
    }

    /// Collapse the selection to a caret
    pub fn with_caret(self, index: usize) -> Result<Self, RichTextError> {
        self.with_selection(index, index)
    }

    /// Assemble a value whose invariants the caller already upholds
    pub(crate) fn from_parts(
        text: String,
        formats: Vec<Option<FormatStack>>,
        start: usize,
        end: usize,
        active_formats: Option<Vec<FormatDescriptor>>,
    ) -> Self {
        debug_assert_eq!(formats.len(), text.chars().count());
        Self {
            text,
            formats,
            start,
            end,
            active_formats,
        }
    }

    /// Copy of this value with different stacks and pending formats
    pub(crate) fn with_formats(
        &self,
        formats: Vec<Option<FormatStack>>,
        active_formats: Option<Vec<FormatDescriptor>>,
    ) -> Self {
        Self::from_parts(
            self.text.clone(),
            formats,
            self.start,
            self.end,
            active_formats,
        )
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in chars
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    pub fn formats(&self) -> &[Option<FormatStack>] {
        &self.formats
    }

    pub fn active_formats(&self) -> Option<&[FormatDescriptor]> {
        self.active_formats.as_deref()
    }

    /// Stack at a char index; out of range and unset both read as `None`
    pub fn formats_at(&self, index: usize) -> Option<&[FormatDescriptor]> {
        self.formats.get(index).and_then(|stack| stack.as_deref())
    }

    /// Like `formats_at`, for signed probe positions
    pub fn formats_at_signed(&self, index: isize) -> Option<&[FormatDescriptor]> {
        usize::try_from(index).ok().and_then(|i| self.formats_at(i))
    }

    /// First descriptor of `format_type` at a char index
    pub fn find_format_at(&self, index: usize, format_type: &str) -> Option<&FormatDescriptor> {
        self.formats_at(index)?
            .iter()
            .find(|format| format.is_type(format_type))
    }

    pub fn to_json(&self) -> Result<String, RichTextError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, RichTextError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for RichTextValue {
    fn default() -> Self {
        Self::empty()
    }
}

/// Wire shape of a value before its invariants are checked
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRichTextValue {
    #[serde(default)]
    text: String,
    #[serde(default)]
    formats: Vec<Option<FormatStack>>,
    #[serde(default)]
    start: usize,
    #[serde(default)]
    end: usize,
    #[serde(default)]
    active_formats: Option<Vec<FormatDescriptor>>,
}

impl TryFrom<RawRichTextValue> for RichTextValue {
    type Error = RichTextError;

    fn try_from(raw: RawRichTextValue) -> Result<Self, Self::Error> {
        let mut value = RichTextValue::new(raw.text, raw.formats)?.with_selection(raw.start, raw.end)?;
        value.active_formats = raw.active_formats;
        Ok(value)
    }
}
