//! Convenience helpers for wiring all web bridge implementations together.
//!
//! Host pages call [`build_web_bridges`] once at startup and inject the
//! resulting set into the capability layer, mirroring the role that
//! `shell-desktop` plays for native builds.

use std::sync::Arc;

use capability_bridge::error::Result;
use capability_bridge::files::FileSinkBridge;
use capability_bridge::launcher::UrlHandlerBridge;
use capability_bridge::lifecycle::AppStateBridge;
use capability_bridge::share::{ClipboardBridge, ShareBridge};
use capability_bridge::storage::KeyValueStore;

use crate::clipboard::NavigatorClipboard;
use crate::files::AnchorFileSink;
use crate::launcher::WindowUrlOpener;
use crate::lifecycle::BrowserAppState;
use crate::share::NavigatorShare;
use crate::storage::LocalStore;

/// Configuration for [`build_web_bridges`].
#[derive(Debug, Clone)]
pub struct WebBridgeConfig {
    /// Namespace prefixed onto every `localStorage` key.
    pub namespace: String,
}

impl WebBridgeConfig {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl Default for WebBridgeConfig {
    fn default() -> Self {
        Self::new("agora")
    }
}

/// Fully constructed web bridge objects ready for injection.
pub struct WebBridgeSet {
    /// Namespaced `localStorage` store.
    pub storage: Arc<dyn KeyValueStore>,
    /// `navigator.clipboard` bridge.
    pub clipboard: Arc<dyn ClipboardBridge>,
    /// `navigator.share` bridge.
    pub share: Arc<dyn ShareBridge>,
    /// Anchor-click download sink.
    pub file_sink: Arc<dyn FileSinkBridge>,
    /// New-tab / location URL opener.
    pub url_handler: Arc<dyn UrlHandlerBridge>,
    /// Never-yielding app state source.
    pub app_state: Arc<dyn AppStateBridge>,
}

/// Build the full web bridge set.
///
/// Fails only when `localStorage` is denied; every other bridge degrades
/// at call time instead.
pub fn build_web_bridges(config: &WebBridgeConfig) -> Result<WebBridgeSet> {
    Ok(WebBridgeSet {
        storage: Arc::new(LocalStore::new(config.namespace.clone())?),
        clipboard: Arc::new(NavigatorClipboard::new()),
        share: Arc::new(NavigatorShare::new()),
        file_sink: Arc::new(AnchorFileSink::new()),
        url_handler: Arc::new(WindowUrlOpener::new()),
        app_state: Arc::new(BrowserAppState),
    })
}
