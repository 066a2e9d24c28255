//! URL opening in a browser context.

use async_trait::async_trait;
use capability_bridge::error::{BridgeError, Result};
use capability_bridge::launcher::UrlHandlerBridge;
use tracing::debug;

use crate::error::{js_error, window};

/// Opens browsable URLs in a new tab and hands OS schemes to the
/// current page's location, which dispatches them to the registered
/// protocol handler.
pub struct WindowUrlOpener;

impl WindowUrlOpener {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowUrlOpener {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl UrlHandlerBridge for WindowUrlOpener {
    async fn open_in_app(&self, url: &str) -> Result<()> {
        let opened = window()?
            .open_with_url_and_target(url, "_blank")
            .map_err(|err| js_error("window.open", err))?;

        // A popup blocker returns null instead of throwing.
        if opened.is_none() {
            return Err(BridgeError::OperationFailed(
                "window.open returned null (popup blocked?)".into(),
            ));
        }
        debug!(url = url, "opened URL in new tab");
        Ok(())
    }

    async fn open_external(&self, url: &str) -> Result<()> {
        window()?
            .location()
            .set_href(url)
            .map_err(|err| js_error("location.href", err))?;
        debug!(url = url, "navigated to OS-handled URL");
        Ok(())
    }
}
