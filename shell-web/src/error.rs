//! JsValue to BridgeError conversion helpers.

use capability_bridge::error::{BridgeError, Result};
use wasm_bindgen::{JsCast, JsValue};

/// Extract a readable message from a thrown `JsValue`.
pub(crate) fn js_error(context: &str, err: JsValue) -> BridgeError {
    BridgeError::OperationFailed(format!("{context}: {}", js_message(&err)))
}

pub(crate) fn js_message(err: &JsValue) -> String {
    if err.is_string() {
        err.as_string().unwrap_or_default()
    } else if let Some(js_err) = err.dyn_ref::<js_sys::Error>() {
        js_err.message().into()
    } else {
        format!("{err:?}")
    }
}

/// The DOMException name, when the thrown value is one. `AbortError`
/// identifies user cancellation of the share sheet.
pub(crate) fn js_error_name(err: &JsValue) -> Option<String> {
    err.dyn_ref::<js_sys::Error>().map(|e| String::from(e.name()))
}

pub(crate) fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| BridgeError::NotAvailable("window".into()))
}
