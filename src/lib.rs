//! Rich-Text Annotation WASM Module
//!
//! Text with overlapping inline formats (bold, links, colors, ...), and the
//! operations that apply, remove and locate them as the user edits.
//!
//! - `text`: the engine, usable from plain Rust
//! - `api`: `wasm-bindgen` exports for JavaScript callers

pub mod text;
pub mod api;

// Re-export commonly used types
pub use text::*;

use wasm_bindgen::prelude::*;

/// Level handed to `console_log` when the module starts
pub const LOG_LEVEL: log::Level = log::Level::Debug;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    install_panic_hook();
    init_logger();

    log::info!("Rich-text WASM module initialized");
}

#[cfg(feature = "console_error_panic_hook")]
fn install_panic_hook() {
    console_error_panic_hook::set_once();
}

#[cfg(not(feature = "console_error_panic_hook"))]
fn install_panic_hook() {}

#[cfg(feature = "console_log")]
fn init_logger() {
    if let Err(e) = console_log::init_with_level(LOG_LEVEL) {
        crate::wasm_warn!("Logger already initialized: {}", e);
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logger() {}
