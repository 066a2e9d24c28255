//! Web Share API bridge.

use async_trait::async_trait;
use capability_bridge::error::{BridgeError, Result};
use capability_bridge::share::{ShareBridge, ShareOutcome, ShareRequest};
use js_sys::{Function, Object, Reflect};
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::{js_error, js_error_name};

/// `navigator.share` bridge.
///
/// The function is looked up dynamically: Safari and Chrome on Android
/// expose it, most desktop browsers do not, and some expose it only in
/// secure contexts. `is_supported` probes for the function so the
/// adapter can hide share affordances where it is missing.
pub struct NavigatorShare;

impl NavigatorShare {
    pub fn new() -> Self {
        Self
    }

    fn share_function() -> Option<(JsValue, Function)> {
        let navigator = web_sys::window()?.navigator();
        let function = Reflect::get(navigator.as_ref(), &JsValue::from_str("share")).ok()?;
        let function = function.dyn_into::<Function>().ok()?;
        Some((JsValue::from(navigator), function))
    }

    fn share_data(request: &ShareRequest) -> Result<Object> {
        let data = Object::new();
        let mut set = |name: &str, value: &Option<String>| -> Result<()> {
            if let Some(value) = value {
                Reflect::set(&data, &JsValue::from_str(name), &JsValue::from_str(value))
                    .map_err(|err| js_error("share payload", err))?;
            }
            Ok(())
        };
        set("title", &request.title)?;
        set("text", &request.text)?;
        set("url", &request.url)?;
        Ok(data)
    }
}

impl Default for NavigatorShare {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ShareBridge for NavigatorShare {
    fn is_supported(&self) -> bool {
        Self::share_function().is_some()
    }

    async fn share(&self, request: &ShareRequest) -> Result<ShareOutcome> {
        let (navigator, function) = Self::share_function()
            .ok_or_else(|| BridgeError::NotAvailable("navigator.share".into()))?;

        let data = Self::share_data(request)?;
        let promise = function
            .call1(&navigator, &data)
            .map_err(|err| js_error("navigator.share", err))?
            .dyn_into::<js_sys::Promise>()
            .map_err(|err| js_error("navigator.share", err))?;

        match JsFuture::from(promise).await {
            Ok(_) => Ok(ShareOutcome::Shared),
            // Closing the sheet without picking a target rejects with
            // AbortError; that is the user's answer, not a failure.
            Err(err) if js_error_name(&err).as_deref() == Some("AbortError") => {
                debug!("share sheet dismissed");
                Ok(ShareOutcome::Dismissed)
            }
            Err(err) => Err(js_error("navigator.share", err)),
        }
    }
}
