//! Format operations exported to JavaScript
//!
//! Values cross the boundary as plain objects:
//! `{ text, formats, start, end, activeFormats? }`, with each format as
//! `{ id, type, attributes }` and unset positions as `null`. Every function
//! takes a value and returns a new one; nothing is kept on the Rust side.

use wasm_bindgen::prelude::*;
use crate::api::helpers::{
    deserialize_attributes, deserialize_value, range_or_selection, serialize, validation_error,
};
use crate::text::{self, FormatDescriptor};
use crate::{wasm_info, wasm_log};

/// Create an unformatted value from plain text
///
/// # Parameters
/// - `content`: Plain text
/// - `start`, `end`: Optional selection (defaults to a caret at 0)
#[wasm_bindgen(js_name = createValue)]
pub fn create_value(content: &str, start: Option<u32>, end: Option<u32>) -> Result<JsValue, JsValue> {
    wasm_info!("createValue called: {} chars", content.chars().count());

    let value = text::RichTextValue::from_text(content);
    let start = start.map_or(0, |s| s as usize);
    let end = end.map_or(start, |e| e as usize);
    let value = value
        .with_selection(start, end)
        .map_err(|e| validation_error(e.to_string()))?;

    serialize(&value, "Serialization error")
}

/// Apply a new format over a range (defaults to the selection)
///
/// # Parameters
/// - `value_js`: Rich-text value
/// - `format_type`: Format kind, e.g. `core/bold`
/// - `attributes_js`: Optional string map of attributes
/// - `start`, `end`: Optional range overriding the selection
#[wasm_bindgen(js_name = applyFormat)]
pub fn apply_format(
    value_js: JsValue,
    format_type: &str,
    attributes_js: JsValue,
    start: Option<u32>,
    end: Option<u32>,
) -> Result<JsValue, JsValue> {
    let value = deserialize_value(value_js)?;
    let attributes = deserialize_attributes(attributes_js)?;
    let (start, end) = range_or_selection(&value, start, end);

    wasm_info!("applyFormat called: type={}, range={}..{}", format_type, start, end);

    let format = FormatDescriptor::new(format_type, attributes);
    wasm_log!("  New format instance id={}", format.id().get());
    let result = text::apply_format_in(&value, format, start, end);

    serialize(&result, "Serialization error")
}

/// Remove a format type over a range (defaults to the selection)
///
/// A collapsed range removes the whole run around the caret.
#[wasm_bindgen(js_name = removeFormat)]
pub fn remove_format(
    value_js: JsValue,
    format_type: &str,
    start: Option<u32>,
    end: Option<u32>,
) -> Result<JsValue, JsValue> {
    let value = deserialize_value(value_js)?;
    let (start, end) = range_or_selection(&value, start, end);

    wasm_info!("removeFormat called: type={}, range={}..{}", format_type, start, end);

    let result = text::remove_format_in(&value, format_type, start, end);
    serialize(&result, "Serialization error")
}

/// Toggle a format at the selection
#[wasm_bindgen(js_name = toggleFormat)]
pub fn toggle_format(
    value_js: JsValue,
    format_type: &str,
    attributes_js: JsValue,
) -> Result<JsValue, JsValue> {
    let value = deserialize_value(value_js)?;
    let attributes = deserialize_attributes(attributes_js)?;

    wasm_info!(
        "toggleFormat called: type={}, selection={}..{}",
        format_type,
        value.start(),
        value.end()
    );

    let result = text::toggle_format(&value, format_type, attributes);
    serialize(&result, "Serialization error")
}

/// Find the run of a format around the selection or the given anchors
///
/// # Returns
/// `{ start, end }` with the first and last formatted index, or nulls
#[wasm_bindgen(js_name = getFormatBoundary)]
pub fn get_format_boundary(
    value_js: JsValue,
    format_type: &str,
    start: Option<i32>,
    end: Option<i32>,
) -> Result<JsValue, JsValue> {
    let value = deserialize_value(value_js)?;
    let start = start.map_or_else(|| text::boundary::to_signed(value.start()), |s| s as isize);
    let end = end.map_or_else(|| text::boundary::to_signed(value.end()), |e| e as isize);

    let boundary = text::get_format_boundary(&value, format_type, start, end);
    wasm_log!(
        "getFormatBoundary: type={}, anchors={}..{} -> {:?}",
        format_type,
        start,
        end,
        boundary
    );

    serialize(&boundary, "Serialization error")
}

/// Formats active at the selection
///
/// # Returns
/// JavaScript array of `{ id, type, attributes }` objects
#[wasm_bindgen(js_name = getActiveFormats)]
pub fn get_active_formats(value_js: JsValue) -> Result<js_sys::Array, JsValue> {
    let value = deserialize_value(value_js)?;
    let active = text::get_active_formats(&value);

    wasm_log!("getActiveFormats: {} active", active.len());

    let result = js_sys::Array::new();
    for format in &active {
        result.push(&serialize(format, "Serialization error")?);
    }
    Ok(result)
}
