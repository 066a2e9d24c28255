//! URL Handling Bridge
//!
//! Two ways out of the app: the in-app browser overlay (native shells) or
//! a new tab (web), and the OS-level handler used for `tel:`, `mailto:`
//! and `sms:` links on every platform. The adapter decides which entry
//! point to use; this trait just provides both.

use crate::error::Result;
use crate::platform::PlatformSendSync;

/// Opens URLs through the host environment.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait UrlHandlerBridge: PlatformSendSync {
    /// Open inside the app: browser overlay on native shells, a new
    /// tab/window on web. Shells without an overlay return
    /// [`BridgeError::NotAvailable`](crate::BridgeError::NotAvailable).
    async fn open_in_app(&self, url: &str) -> Result<()>;

    /// Hand the URL to the operating system's default handler.
    async fn open_external(&self, url: &str) -> Result<()>;
}
