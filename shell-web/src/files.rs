//! File downloads via a synthesized anchor click.

use async_trait::async_trait;
use capability_bridge::error::{BridgeError, Result};
use capability_bridge::files::FileSinkBridge;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use crate::error::{js_error, window};

/// Triggers the browser's own download flow: an `<a download>` element
/// is created, clicked, and removed. The browser handles the fetch and
/// the save dialog; same-origin URLs honor the suggested filename,
/// cross-origin ones fall back to the server's name.
pub struct AnchorFileSink;

impl AnchorFileSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AnchorFileSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl FileSinkBridge for AnchorFileSink {
    async fn save_remote(&self, url: &str, filename: &str) -> Result<()> {
        let document = window()?
            .document()
            .ok_or_else(|| BridgeError::NotAvailable("document".into()))?;
        let body = document
            .body()
            .ok_or_else(|| BridgeError::NotAvailable("document.body".into()))?;

        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|err| js_error("create anchor", err))?
            .dyn_into()
            .map_err(|_| BridgeError::OperationFailed("anchor element cast failed".into()))?;
        anchor.set_href(url);
        anchor.set_download(filename);
        anchor.set_rel("noopener");

        body.append_child(&anchor)
            .map_err(|err| js_error("append anchor", err))?;
        anchor.click();
        anchor.remove();

        debug!(url = url, filename = filename, "download handed to browser");
        Ok(())
    }
}
