//! Capability assembly.
//!
//! Host shells construct one [`CapabilitySet`] at startup, injecting the
//! bridge objects for their platform. Only the session store is required;
//! every other capability degrades gracefully when its bridge is missing,
//! so the builder accepts any subset.

use std::sync::Arc;

use capability_bridge::device::{HapticsBridge, KeyboardBridge, StatusBarBridge};
use capability_bridge::error::{BridgeError, Result};
use capability_bridge::files::FileSinkBridge;
use capability_bridge::launcher::UrlHandlerBridge;
use capability_bridge::lifecycle::AppStateBridge;
use capability_bridge::share::{ClipboardBridge, ShareBridge};
use capability_bridge::storage::KeyValueStore;

use crate::clipboard::Clipboard;
use crate::file_save::FileSaver;
use crate::haptics::Haptics;
use crate::keyboard::KeyboardWatcher;
use crate::launcher::UrlLauncher;
use crate::lifecycle::LifecycleBridge;
use crate::notices::NoticeBus;
use crate::platform::PlatformContext;
use crate::share::ShareSheet;
use crate::status_bar::StatusBar;
use crate::storage::SessionStorage;

/// Fully wired adapters ready for feature code.
pub struct CapabilitySet {
    pub storage: SessionStorage,
    pub clipboard: Clipboard,
    pub share: ShareSheet,
    pub haptics: Haptics,
    pub status_bar: StatusBar,
    pub keyboard: KeyboardWatcher,
    pub file_saver: FileSaver,
    pub launcher: UrlLauncher,
    pub lifecycle: LifecycleBridge,
    pub notices: NoticeBus,

    app_state_bridge: Option<Arc<dyn AppStateBridge>>,
    keyboard_bridge: Option<Arc<dyn KeyboardBridge>>,
}

impl std::fmt::Debug for CapabilitySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilitySet").finish_non_exhaustive()
    }
}

impl CapabilitySet {
    /// Start the lifecycle and keyboard event pumps for any bridges that
    /// were provided. Call once the async runtime is up.
    pub async fn connect(&self) -> Result<()> {
        if let Some(bridge) = &self.app_state_bridge {
            self.lifecycle.attach(bridge.as_ref()).await?;
        }
        if let Some(bridge) = &self.keyboard_bridge {
            self.keyboard.attach(bridge.as_ref()).await?;
        }
        Ok(())
    }
}

/// Builder for [`CapabilitySet`].
pub struct CapabilityBuilder {
    ctx: PlatformContext,
    notices: NoticeBus,
    storage: Option<Arc<dyn KeyValueStore>>,
    clipboard_native: Option<Arc<dyn ClipboardBridge>>,
    clipboard_web: Option<Arc<dyn ClipboardBridge>>,
    share_native: Option<Arc<dyn ShareBridge>>,
    share_web: Option<Arc<dyn ShareBridge>>,
    haptics: Option<Arc<dyn HapticsBridge>>,
    status_bar: Option<Arc<dyn StatusBarBridge>>,
    keyboard: Option<Arc<dyn KeyboardBridge>>,
    file_sink_native: Option<Arc<dyn FileSinkBridge>>,
    file_sink_web: Option<Arc<dyn FileSinkBridge>>,
    url_native: Option<Arc<dyn UrlHandlerBridge>>,
    url_web: Option<Arc<dyn UrlHandlerBridge>>,
    app_state: Option<Arc<dyn AppStateBridge>>,
}

impl CapabilityBuilder {
    pub fn new(ctx: PlatformContext) -> Self {
        Self {
            ctx,
            notices: NoticeBus::default(),
            storage: None,
            clipboard_native: None,
            clipboard_web: None,
            share_native: None,
            share_web: None,
            haptics: None,
            status_bar: None,
            keyboard: None,
            file_sink_native: None,
            file_sink_web: None,
            url_native: None,
            url_web: None,
            app_state: None,
        }
    }

    pub fn with_notices(mut self, notices: NoticeBus) -> Self {
        self.notices = notices;
        self
    }

    pub fn with_storage(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.storage = Some(store);
        self
    }

    pub fn with_native_clipboard(mut self, bridge: Arc<dyn ClipboardBridge>) -> Self {
        self.clipboard_native = Some(bridge);
        self
    }

    pub fn with_web_clipboard(mut self, bridge: Arc<dyn ClipboardBridge>) -> Self {
        self.clipboard_web = Some(bridge);
        self
    }

    pub fn with_native_share(mut self, bridge: Arc<dyn ShareBridge>) -> Self {
        self.share_native = Some(bridge);
        self
    }

    pub fn with_web_share(mut self, bridge: Arc<dyn ShareBridge>) -> Self {
        self.share_web = Some(bridge);
        self
    }

    pub fn with_haptics(mut self, bridge: Arc<dyn HapticsBridge>) -> Self {
        self.haptics = Some(bridge);
        self
    }

    pub fn with_status_bar(mut self, bridge: Arc<dyn StatusBarBridge>) -> Self {
        self.status_bar = Some(bridge);
        self
    }

    pub fn with_keyboard(mut self, bridge: Arc<dyn KeyboardBridge>) -> Self {
        self.keyboard = Some(bridge);
        self
    }

    pub fn with_native_file_sink(mut self, bridge: Arc<dyn FileSinkBridge>) -> Self {
        self.file_sink_native = Some(bridge);
        self
    }

    pub fn with_web_file_sink(mut self, bridge: Arc<dyn FileSinkBridge>) -> Self {
        self.file_sink_web = Some(bridge);
        self
    }

    pub fn with_native_url_handler(mut self, bridge: Arc<dyn UrlHandlerBridge>) -> Self {
        self.url_native = Some(bridge);
        self
    }

    pub fn with_web_url_handler(mut self, bridge: Arc<dyn UrlHandlerBridge>) -> Self {
        self.url_web = Some(bridge);
        self
    }

    pub fn with_app_state(mut self, bridge: Arc<dyn AppStateBridge>) -> Self {
        self.app_state = Some(bridge);
        self
    }

    /// Assemble the set. Fails fast only when the session store is
    /// missing: without it the auth layer cannot function, and a
    /// descriptive error at startup beats a broken session later.
    pub fn build(self) -> Result<CapabilitySet> {
        let storage = self.storage.ok_or_else(|| {
            BridgeError::NotAvailable(
                "KeyValueStore: no storage bridge provided. \
                 Desktop: inject shell_desktop::KeyringStore. \
                 Web: inject the localStorage store from shell_web. \
                 Mobile: inject the shell's secure storage plugin."
                    .to_string(),
            )
        })?;

        Ok(CapabilitySet {
            storage: SessionStorage::new(storage),
            clipboard: Clipboard::new(self.ctx, self.clipboard_native, self.clipboard_web)
                .with_notices(self.notices.clone()),
            share: ShareSheet::new(self.ctx, self.share_native, self.share_web),
            haptics: Haptics::new(self.ctx, self.haptics),
            status_bar: StatusBar::new(self.ctx, self.status_bar),
            keyboard: KeyboardWatcher::new(self.ctx),
            file_saver: FileSaver::new(self.ctx, self.file_sink_native, self.file_sink_web)
                .with_notices(self.notices.clone()),
            launcher: UrlLauncher::new(self.ctx, self.url_native, self.url_web),
            lifecycle: LifecycleBridge::new(),
            notices: self.notices,
            app_state_bridge: self.app_state,
            keyboard_bridge: self.keyboard,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capability_bridge::Platform;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MapStore(Mutex<HashMap<String, String>>);

    #[async_trait::async_trait]
    impl KeyValueStore for MapStore {
        async fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.0.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<()> {
            self.0
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn remove(&self, key: &str) -> Result<()> {
            self.0.lock().unwrap().remove(key);
            Ok(())
        }
    }

    #[test]
    fn build_requires_storage() {
        let err = CapabilityBuilder::new(PlatformContext::new(Platform::Web))
            .build()
            .unwrap_err();

        assert!(matches!(err, BridgeError::NotAvailable(_)));
    }

    #[tokio::test]
    async fn minimal_set_degrades_instead_of_failing() {
        let set = CapabilityBuilder::new(PlatformContext::new(Platform::Web))
            .with_storage(Arc::new(MapStore(Mutex::new(HashMap::new()))))
            .build()
            .unwrap();

        set.storage.set("k", "v").await.unwrap();
        assert_eq!(set.storage.get("k").await.as_deref(), Some("v"));

        // Everything else is wired but degraded.
        assert!(!set.share.can_share());
        assert!(!set.clipboard.write("x").await);
        assert!(!set.launcher.open("https://example.org").await);
        set.haptics.impact(capability_bridge::ImpactStyle::Light).await;
        set.connect().await.unwrap();
    }
}
