//! URL launch adapter.
//!
//! Classification comes first: `tel:`, `mailto:` and `sms:` links belong
//! to the operating system on every platform. Everything else opens in
//! the in-app browser overlay on native shells (falling back to the OS
//! handler if the overlay refuses) or a new tab on web.

use std::sync::Arc;

use capability_bridge::launcher::UrlHandlerBridge;
use tracing::{debug, warn};

use crate::platform::PlatformContext;

/// Where a URL should be routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind {
    /// Scheme handled by the OS directly (`tel:`, `mailto:`, `sms:`).
    OsHandled,
    /// Anything else: open in a browser surface.
    Browsable,
}

/// Classify a URL by scheme, case-insensitively. URLs without a scheme
/// count as browsable; the host surface will reject them if malformed.
pub fn classify_url(url: &str) -> UrlKind {
    let scheme = url.split(':').next().unwrap_or_default();
    match scheme.to_ascii_lowercase().as_str() {
        "tel" | "mailto" | "sms" => UrlKind::OsHandled,
        _ => UrlKind::Browsable,
    }
}

pub struct UrlLauncher {
    ctx: PlatformContext,
    native: Option<Arc<dyn UrlHandlerBridge>>,
    web: Option<Arc<dyn UrlHandlerBridge>>,
}

impl UrlLauncher {
    pub fn new(
        ctx: PlatformContext,
        native: Option<Arc<dyn UrlHandlerBridge>>,
        web: Option<Arc<dyn UrlHandlerBridge>>,
    ) -> Self {
        Self { ctx, native, web }
    }

    fn handler(&self) -> Option<&Arc<dyn UrlHandlerBridge>> {
        if self.ctx.is_native() {
            self.native.as_ref()
        } else {
            self.web.as_ref()
        }
    }

    /// Open `url`. Returns whether anything presented it.
    pub async fn open(&self, url: &str) -> bool {
        let Some(handler) = self.handler() else {
            warn!(url = url, "no URL handler available on this platform");
            return false;
        };

        match classify_url(url) {
            UrlKind::OsHandled => match handler.open_external(url).await {
                Ok(()) => true,
                Err(err) => {
                    warn!(url = url, error = %err, "OS handler refused URL");
                    false
                }
            },
            UrlKind::Browsable => match handler.open_in_app(url).await {
                Ok(()) => true,
                Err(err) if self.ctx.is_native() => {
                    // Overlay failed (plugin absent, denied); hand the
                    // link to the OS rather than dropping it silently.
                    debug!(url = url, error = %err, "in-app browser failed; using OS handler");
                    match handler.open_external(url).await {
                        Ok(()) => true,
                        Err(err) => {
                            warn!(url = url, error = %err, "OS handler fallback failed");
                            false
                        }
                    }
                }
                Err(err) => {
                    warn!(url = url, error = %err, "could not open new tab");
                    false
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capability_bridge::error::{BridgeError, Result};
    use capability_bridge::Platform;
    use std::sync::Mutex;

    #[test]
    fn os_schemes_are_classified_case_insensitively() {
        assert_eq!(classify_url("tel:+1234567890"), UrlKind::OsHandled);
        assert_eq!(classify_url("MAILTO:team@example.org"), UrlKind::OsHandled);
        assert_eq!(classify_url("sms:+15551234"), UrlKind::OsHandled);
        assert_eq!(classify_url("https://example.org"), UrlKind::Browsable);
        assert_eq!(classify_url("example.org/no-scheme"), UrlKind::Browsable);
    }

    struct RecordingHandler {
        overlay_fails: bool,
        log: Mutex<Vec<String>>,
    }

    impl RecordingHandler {
        fn new(overlay_fails: bool) -> Self {
            Self {
                overlay_fails,
                log: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl UrlHandlerBridge for RecordingHandler {
        async fn open_in_app(&self, url: &str) -> Result<()> {
            if self.overlay_fails {
                return Err(BridgeError::NotAvailable("overlay".into()));
            }
            self.log.lock().unwrap().push(format!("in_app:{url}"));
            Ok(())
        }

        async fn open_external(&self, url: &str) -> Result<()> {
            self.log.lock().unwrap().push(format!("external:{url}"));
            Ok(())
        }
    }

    #[tokio::test]
    async fn tel_always_goes_to_the_os_handler() {
        for platform in [Platform::Ios, Platform::Web] {
            let handler = Arc::new(RecordingHandler::new(false));
            let bridge = Arc::clone(&handler) as Arc<dyn UrlHandlerBridge>;
            let launcher = match platform {
                Platform::Web => {
                    UrlLauncher::new(PlatformContext::new(platform), None, Some(bridge))
                }
                _ => UrlLauncher::new(PlatformContext::new(platform), Some(bridge), None),
            };

            assert!(launcher.open("tel:+1234567890").await);
            assert_eq!(
                &*handler.log.lock().unwrap(),
                &["external:tel:+1234567890".to_string()]
            );
        }
    }

    #[tokio::test]
    async fn native_overlay_failure_falls_back_to_os_handler() {
        let handler = Arc::new(RecordingHandler::new(true));
        let launcher = UrlLauncher::new(
            PlatformContext::new(Platform::Android),
            Some(Arc::clone(&handler) as Arc<dyn UrlHandlerBridge>),
            None,
        );

        assert!(launcher.open("https://example.org/post/7").await);
        assert_eq!(
            &*handler.log.lock().unwrap(),
            &["external:https://example.org/post/7".to_string()]
        );
    }

    #[tokio::test]
    async fn web_opens_a_new_tab() {
        let handler = Arc::new(RecordingHandler::new(false));
        let launcher = UrlLauncher::new(
            PlatformContext::new(Platform::Web),
            None,
            Some(Arc::clone(&handler) as Arc<dyn UrlHandlerBridge>),
        );

        assert!(launcher.open("https://example.org").await);
        assert_eq!(
            &*handler.log.lock().unwrap(),
            &["in_app:https://example.org".to_string()]
        );
    }

    #[tokio::test]
    async fn missing_handler_is_a_clean_failure() {
        let launcher = UrlLauncher::new(PlatformContext::new(Platform::Web), None, None);
        assert!(!launcher.open("https://example.org").await);
    }
}
