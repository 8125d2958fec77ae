//! WASM build test
//!
//! Exercises the JavaScript-facing API through real `JsValue`s. Only built
//! for wasm32; run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use rich_text_wasm::api;
use rich_text_wasm::{FormatBoundary, RichTextValue};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn to_value(js: JsValue) -> RichTextValue {
    serde_wasm_bindgen::from_value(js).expect("value should deserialize")
}

#[wasm_bindgen_test]
fn test_create_value() {
    let js = api::create_value("hello", Some(1), Some(3)).expect("createValue should succeed");
    let value = to_value(js);

    assert_eq!(value.text(), "hello");
    assert_eq!((value.start(), value.end()), (1, 3));
}

#[wasm_bindgen_test]
fn test_create_value_rejects_bad_selection() {
    assert!(api::create_value("hi", Some(1), Some(9)).is_err());
}

#[wasm_bindgen_test]
fn test_apply_then_resolve_boundary() {
    let js = api::create_value("hello world", Some(0), Some(5)).unwrap();
    let js = api::apply_format(js, "core/bold", JsValue::UNDEFINED, None, None)
        .expect("applyFormat should succeed");

    let boundary = api::get_format_boundary(js, "core/bold", Some(2), Some(2))
        .expect("getFormatBoundary should succeed");
    let boundary: FormatBoundary = serde_wasm_bindgen::from_value(boundary).unwrap();

    assert_eq!(boundary, FormatBoundary::new(0, 4));
}

#[wasm_bindgen_test]
fn test_toggle_and_remove() {
    let js = api::create_value("abc", Some(0), Some(3)).unwrap();
    let on = api::toggle_format(js, "core/italic", JsValue::NULL).unwrap();
    let active = api::get_active_formats(on.clone()).unwrap();
    assert_eq!(active.length(), 1);

    let off = api::remove_format(on, "core/italic", None, None).unwrap();
    assert!(to_value(off).formats().iter().all(Option::is_none));
}

#[wasm_bindgen_test]
fn test_invalid_value_is_rejected() {
    let bad = JsValue::from_str("not a value");
    assert!(api::remove_format(bad, "core/bold", None, None).is_err());
}

#[wasm_bindgen_test]
fn test_validation_error_carries_message() {
    let err = api::helpers::validation_error("bad range");
    assert_eq!(err.as_string().as_deref(), Some("bad range"));
}
