//! URL opening via the operating system.

use async_trait::async_trait;
use capability_bridge::error::{BridgeError, Result};
use capability_bridge::launcher::UrlHandlerBridge;
use tokio::process::Command;
use tracing::debug;

/// Hands URLs to the platform opener (`open`, `xdg-open`, `start`).
///
/// The desktop shell has no in-app browser overlay; `open_in_app`
/// reports [`BridgeError::NotAvailable`] and the adapter falls back to
/// the external handler.
pub struct SystemUrlOpener;

impl SystemUrlOpener {
    pub fn new() -> Self {
        Self
    }

    fn opener(url: &str) -> Command {
        #[cfg(target_os = "macos")]
        {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        }
        #[cfg(target_os = "windows")]
        {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

impl Default for SystemUrlOpener {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlHandlerBridge for SystemUrlOpener {
    async fn open_in_app(&self, _url: &str) -> Result<()> {
        Err(BridgeError::NotAvailable(
            "desktop shell has no in-app browser".to_string(),
        ))
    }

    async fn open_external(&self, url: &str) -> Result<()> {
        let status = Self::opener(url).status().await?;
        if !status.success() {
            return Err(BridgeError::OperationFailed(format!(
                "system opener exited with {status}"
            )));
        }
        debug!(url = url, "opened URL with system handler");
        Ok(())
    }
}
