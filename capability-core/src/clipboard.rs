//! Clipboard adapter.
//!
//! Write/read never fail from the caller's perspective. On native
//! platforms a failing plugin call falls back to the web bridge when one
//! is present; in a browser only the web bridge is consulted. `copy` is
//! the user-facing variant: it emits a transient notice either way, since
//! a silent failed copy is indistinguishable from a successful one.

use std::sync::Arc;

use capability_bridge::share::ClipboardBridge;
use tracing::{debug, warn};

use crate::notices::NoticeBus;
use crate::platform::PlatformContext;

pub struct Clipboard {
    ctx: PlatformContext,
    native: Option<Arc<dyn ClipboardBridge>>,
    web: Option<Arc<dyn ClipboardBridge>>,
    notices: Option<NoticeBus>,
}

impl Clipboard {
    pub fn new(
        ctx: PlatformContext,
        native: Option<Arc<dyn ClipboardBridge>>,
        web: Option<Arc<dyn ClipboardBridge>>,
    ) -> Self {
        Self {
            ctx,
            native,
            web,
            notices: None,
        }
    }

    pub fn with_notices(mut self, notices: NoticeBus) -> Self {
        self.notices = Some(notices);
        self
    }

    /// Put `text` on the clipboard. Returns whether any mechanism took it.
    pub async fn write(&self, text: &str) -> bool {
        if self.ctx.is_native() {
            if let Some(native) = &self.native {
                match native.write_text(text).await {
                    Ok(()) => return true,
                    Err(err) => {
                        warn!(error = %err, "native clipboard write failed; trying web fallback");
                    }
                }
            }
        }

        match &self.web {
            Some(web) => match web.write_text(text).await {
                Ok(()) => true,
                Err(err) => {
                    warn!(error = %err, "clipboard write failed");
                    false
                }
            },
            None => {
                debug!("no clipboard mechanism available");
                false
            }
        }
    }

    /// Read the clipboard. `None` covers empty, unsupported, and failed.
    pub async fn read(&self) -> Option<String> {
        if self.ctx.is_native() {
            if let Some(native) = &self.native {
                match native.read_text().await {
                    Ok(value) => return value,
                    Err(err) => {
                        warn!(error = %err, "native clipboard read failed; trying web fallback");
                    }
                }
            }
        }

        match &self.web {
            Some(web) => match web.read_text().await {
                Ok(value) => value,
                Err(err) => {
                    warn!(error = %err, "clipboard read failed");
                    None
                }
            },
            None => None,
        }
    }

    /// User-initiated copy: same as [`write`] plus a transient notice
    /// reporting the outcome.
    ///
    /// [`write`]: Clipboard::write
    pub async fn copy(&self, text: &str) -> bool {
        let copied = self.write(text).await;
        if let Some(notices) = &self.notices {
            if copied {
                notices.info("Copied to clipboard");
            } else {
                notices.error("Could not copy to clipboard");
            }
        }
        copied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capability_bridge::error::{BridgeError, Result};
    use capability_bridge::Platform;
    use std::sync::Mutex;

    struct FakeClipboard {
        contents: Mutex<Option<String>>,
        broken: bool,
    }

    impl FakeClipboard {
        fn working() -> Self {
            Self {
                contents: Mutex::new(None),
                broken: false,
            }
        }

        fn broken() -> Self {
            Self {
                contents: Mutex::new(None),
                broken: true,
            }
        }
    }

    #[async_trait::async_trait]
    impl ClipboardBridge for FakeClipboard {
        async fn write_text(&self, text: &str) -> Result<()> {
            if self.broken {
                return Err(BridgeError::OperationFailed("plugin rejected".into()));
            }
            *self.contents.lock().unwrap() = Some(text.to_string());
            Ok(())
        }

        async fn read_text(&self) -> Result<Option<String>> {
            if self.broken {
                return Err(BridgeError::OperationFailed("plugin rejected".into()));
            }
            Ok(self.contents.lock().unwrap().clone())
        }
    }

    fn web_ctx() -> PlatformContext {
        PlatformContext::new(Platform::Web)
    }

    fn ios_ctx() -> PlatformContext {
        PlatformContext::new(Platform::Ios)
    }

    #[tokio::test]
    async fn web_round_trip() {
        let clipboard = Clipboard::new(web_ctx(), None, Some(Arc::new(FakeClipboard::working())));

        assert!(clipboard.write("hello").await);
        assert_eq!(clipboard.read().await.as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn native_failure_falls_back_to_web() {
        let clipboard = Clipboard::new(
            ios_ctx(),
            Some(Arc::new(FakeClipboard::broken())),
            Some(Arc::new(FakeClipboard::working())),
        );

        assert!(clipboard.write("fallback text").await);
        assert_eq!(clipboard.read().await.as_deref(), Some("fallback text"));
    }

    #[tokio::test]
    async fn no_mechanism_returns_neutral_results() {
        let clipboard = Clipboard::new(web_ctx(), None, None);

        assert!(!clipboard.write("lost").await);
        assert_eq!(clipboard.read().await, None);
    }

    #[tokio::test]
    async fn copy_emits_notice_on_failure() {
        let bus = NoticeBus::default();
        let mut notices = bus.subscribe();
        let clipboard = Clipboard::new(web_ctx(), None, None).with_notices(bus);

        assert!(!clipboard.copy("unreachable").await);

        let notice = notices.recv().await.unwrap();
        assert_eq!(notice.level, crate::notices::NoticeLevel::Error);
    }

    #[tokio::test]
    async fn copy_emits_notice_on_success() {
        let bus = NoticeBus::default();
        let mut notices = bus.subscribe();
        let clipboard = Clipboard::new(web_ctx(), None, Some(Arc::new(FakeClipboard::working())))
            .with_notices(bus);

        assert!(clipboard.copy("shareable link").await);
        assert_eq!(notices.recv().await.unwrap().message, "Copied to clipboard");
    }
}
