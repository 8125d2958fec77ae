//! Rich-text WASM API
//!
//! JavaScript-facing wrappers around the `text` operations.
//!
//! # Module Structure
//!
//! - `helpers`: Console logging macros, serialization and error conversion
//! - `formats`: Format operations (create, apply, remove, toggle, boundary)

pub mod helpers;
pub mod formats;

pub use formats::{
    apply_format, create_value, get_active_formats, get_format_boundary, remove_format,
    toggle_format,
};
