//! Rich-text core
//!
//! Text annotated with possibly overlapping inline formats, and the
//! operations that apply, remove and locate them. No DOM and no rendering:
//! everything here works on plain values and returns new ones.
//!
//! ## Modules
//!
//! - `format`: format descriptors and their instance ids
//! - `value`: the annotated text value and its invariants
//! - `boundary`: resolving the run of a format around a selection
//! - `apply_format` / `remove_format`: range mutations and toggling
//! - `active_formats`: formats in effect at the selection
//! - `compose`: slice, concat, normalise
//! - `errors`: construction and decoding errors

pub mod active_formats;
pub mod apply_format;
pub mod boundary;
pub mod compose;
pub mod errors;
pub mod format;
pub mod remove_format;
pub mod value;

// Re-exports for convenience
pub use active_formats::{get_active_format, get_active_formats};
pub use apply_format::{apply_format, apply_format_in, toggle_format};
pub use boundary::{get_format_boundary, FormatBoundary};
pub use compose::{concat, normalise_formats, slice};
pub use errors::RichTextError;
pub use format::{is_format_equal, FormatAttributes, FormatDescriptor, FormatId};
pub use remove_format::{remove_format, remove_format_in};
pub use value::{format_stack, FormatStack, RichTextValue};
