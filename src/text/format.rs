//! Format descriptors applied to ranges of text
//!
//! Every descriptor carries an instance id handed out by a process-wide
//! counter. Runs are made of positions holding the *same instance*, so two
//! adjacent bold spans applied separately stay two runs even though their
//! type and attributes match. Clones share the id: a clone is another handle
//! to the same instance, not a new one.

use super::errors::RichTextError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_FORMAT_ID: AtomicU64 = AtomicU64::new(1);

/// Largest id that survives a trip through JavaScript (`Number.MAX_SAFE_INTEGER`)
///
/// Loaded ids must stay below it, which leaves the counter room to hand out
/// fresh ids without wrapping onto one already in use.
pub const MAX_FORMAT_ID: u64 = (1 << 53) - 1;

/// Identity of one applied format instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct FormatId(u64);

impl FormatId {
    /// Allocate a fresh id
    pub fn next() -> Self {
        FormatId(NEXT_FORMAT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric id
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Ids read back from storage reserve their slot so that later `next()`
/// calls cannot hand the same number to a different instance.
impl TryFrom<u64> for FormatId {
    type Error = RichTextError;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        if raw >= MAX_FORMAT_ID {
            return Err(RichTextError::FormatIdOutOfRange { id: raw });
        }
        NEXT_FORMAT_ID.fetch_max(raw + 1, Ordering::Relaxed);
        Ok(FormatId(raw))
    }
}

impl From<FormatId> for u64 {
    fn from(id: FormatId) -> Self {
        id.0
    }
}

/// Attribute map of a format (e.g. `href` for a link)
pub type FormatAttributes = BTreeMap<String, String>;

/// One applied format: its kind, its data and its instance id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatDescriptor {
    id: FormatId,
    #[serde(rename = "type")]
    format_type: String,
    #[serde(default)]
    attributes: FormatAttributes,
}

impl FormatDescriptor {
    /// Create a new format instance with a fresh id
    pub fn new(format_type: impl Into<String>, attributes: FormatAttributes) -> Self {
        Self {
            id: FormatId::next(),
            format_type: format_type.into(),
            attributes,
        }
    }

    /// Create a new format instance without attributes (bold, italic, ...)
    pub fn of_type(format_type: impl Into<String>) -> Self {
        Self::new(format_type, FormatAttributes::new())
    }

    /// Create a new format instance from `(key, value)` pairs
    pub fn with_attributes<K, V>(
        format_type: impl Into<String>,
        attributes: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let attributes = attributes
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::new(format_type, attributes)
    }

    /// Instance id shared by every clone of this descriptor
    pub fn id(&self) -> FormatId {
        self.id
    }

    /// Format kind, e.g. `core/link`
    pub fn format_type(&self) -> &str {
        &self.format_type
    }

    /// All attributes of this instance
    pub fn attributes(&self) -> &FormatAttributes {
        &self.attributes
    }

    /// Single attribute value, if set
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Whether this descriptor is of kind `format_type`
    pub fn is_type(&self, format_type: &str) -> bool {
        self.format_type == format_type
    }

    /// Whether both descriptors are handles to one applied instance
    pub fn is_same_instance(&self, other: &FormatDescriptor) -> bool {
        self.id == other.id
    }
}

/// Structural equality: same type and same attributes, regardless of instance
pub fn is_format_equal(a: &FormatDescriptor, b: &FormatDescriptor) -> bool {
    a.format_type == b.format_type && a.attributes == b.attributes
}
