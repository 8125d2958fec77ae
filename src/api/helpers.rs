//! Shared helpers for WASM API operations
//!
//! Console logging, serialization across the JS boundary, and error
//! conversion for every exported function.

use crate::text::{FormatAttributes, RichTextValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        crate::wasm_error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
///
/// Uses the JSON-compatible serializer: maps become plain objects and `None`
/// becomes `null`, matching what callers get from `JSON.parse`.
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        crate::wasm_error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Read a rich-text value; invariant violations surface as the error message
pub fn deserialize_value(value_js: JsValue) -> Result<RichTextValue, JsValue> {
    deserialize(value_js, "Invalid rich-text value")
}

/// Read an optional attribute map; `undefined` and `null` mean no attributes
pub fn deserialize_attributes(attributes_js: JsValue) -> Result<FormatAttributes, JsValue> {
    let attributes: Option<FormatAttributes> = deserialize(attributes_js, "Invalid format attributes")?;
    Ok(attributes.unwrap_or_default())
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert a validation error to a JsValue
pub fn validation_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    crate::wasm_error!("{}", msg);
    JsValue::from_str(&msg)
}

/// Resolve an optional JS range against the value's selection
pub fn range_or_selection(value: &RichTextValue, start: Option<u32>, end: Option<u32>) -> (usize, usize) {
    let start = start.map_or(value.start(), |s| s as usize);
    let end = end.map_or(value.end(), |e| e as usize);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_defaults_to_selection() {
        let value = RichTextValue::from_text("abcdef").with_selection(1, 4).unwrap();

        assert_eq!(range_or_selection(&value, None, None), (1, 4));
        assert_eq!(range_or_selection(&value, Some(2), None), (2, 4));
        assert_eq!(range_or_selection(&value, Some(0), Some(6)), (0, 6));
    }
}
