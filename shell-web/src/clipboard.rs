//! Async clipboard via `navigator.clipboard`.

use async_trait::async_trait;
use capability_bridge::error::Result;
use capability_bridge::share::ClipboardBridge;
use wasm_bindgen_futures::JsFuture;

use crate::error::{js_error, window};

/// `navigator.clipboard` bridge. Browsers gate both directions behind
/// permission and focus checks; a denial surfaces as a rejected promise
/// and becomes an `OperationFailed` for the adapter to absorb.
pub struct NavigatorClipboard;

impl NavigatorClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NavigatorClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ClipboardBridge for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let clipboard = window()?.navigator().clipboard();
        JsFuture::from(clipboard.write_text(text))
            .await
            .map_err(|err| js_error("clipboard write", err))?;
        Ok(())
    }

    async fn read_text(&self) -> Result<Option<String>> {
        let clipboard = window()?.navigator().clipboard();
        let value = JsFuture::from(clipboard.read_text())
            .await
            .map_err(|err| js_error("clipboard read", err))?;
        Ok(value.as_string().filter(|text| !text.is_empty()))
    }
}
