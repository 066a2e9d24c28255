//! Status bar adapter.
//!
//! Cosmetic like haptics: fire-and-forget, errors logged and swallowed,
//! no-op off the packaged shell. Background color is gated to Android;
//! iOS draws its own bar background and the call would be rejected by the
//! plugin anyway.

use std::sync::Arc;

use capability_bridge::device::{StatusBarBridge, StatusBarStyle};
use capability_bridge::Platform;
use tracing::{debug, warn};

use crate::platform::PlatformContext;

pub struct StatusBar {
    ctx: PlatformContext,
    bridge: Option<Arc<dyn StatusBarBridge>>,
}

impl StatusBar {
    pub fn new(ctx: PlatformContext, bridge: Option<Arc<dyn StatusBarBridge>>) -> Self {
        Self { ctx, bridge }
    }

    fn bar(&self) -> Option<&Arc<dyn StatusBarBridge>> {
        if !self.ctx.is_native() {
            return None;
        }
        self.bridge.as_ref()
    }

    pub async fn set_style(&self, style: StatusBarStyle) {
        let Some(bar) = self.bar() else { return };
        if let Err(err) = bar.set_style(style).await {
            warn!(style = ?style, error = %err, "status bar style change failed");
        }
    }

    /// Android-only; ignored elsewhere.
    pub async fn set_background_color(&self, color_hex: &str) {
        if self.ctx.platform() != Platform::Android {
            debug!(color = color_hex, "status bar background ignored off Android");
            return;
        }
        let Some(bar) = self.bar() else { return };
        if let Err(err) = bar.set_background_color(color_hex).await {
            warn!(color = color_hex, error = %err, "status bar color change failed");
        }
    }

    pub async fn show(&self) {
        let Some(bar) = self.bar() else { return };
        if let Err(err) = bar.show().await {
            warn!(error = %err, "status bar show failed");
        }
    }

    pub async fn hide(&self) {
        let Some(bar) = self.bar() else { return };
        if let Err(err) = bar.hide().await {
            warn!(error = %err, "status bar hide failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capability_bridge::error::Result;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingBar {
        log: Mutex<Vec<String>>,
    }

    #[async_trait::async_trait]
    impl StatusBarBridge for RecordingBar {
        async fn set_style(&self, style: StatusBarStyle) -> Result<()> {
            self.log.lock().unwrap().push(format!("style:{style:?}"));
            Ok(())
        }

        async fn set_background_color(&self, color_hex: &str) -> Result<()> {
            self.log.lock().unwrap().push(format!("color:{color_hex}"));
            Ok(())
        }

        async fn show(&self) -> Result<()> {
            self.log.lock().unwrap().push("show".into());
            Ok(())
        }

        async fn hide(&self) -> Result<()> {
            self.log.lock().unwrap().push("hide".into());
            Ok(())
        }
    }

    #[tokio::test]
    async fn background_color_only_reaches_android() {
        let bar = Arc::new(RecordingBar::default());

        let android = StatusBar::new(
            PlatformContext::new(Platform::Android),
            Some(Arc::clone(&bar) as Arc<dyn StatusBarBridge>),
        );
        android.set_background_color("#10B981").await;

        let ios = StatusBar::new(
            PlatformContext::new(Platform::Ios),
            Some(Arc::clone(&bar) as Arc<dyn StatusBarBridge>),
        );
        ios.set_background_color("#10B981").await;

        assert_eq!(&*bar.log.lock().unwrap(), &["color:#10B981".to_string()]);
    }

    #[tokio::test]
    async fn repeated_state_is_not_an_error() {
        let bar = Arc::new(RecordingBar::default());
        let status = StatusBar::new(
            PlatformContext::new(Platform::Ios),
            Some(Arc::clone(&bar) as Arc<dyn StatusBarBridge>),
        );

        status.set_style(StatusBarStyle::Dark).await;
        status.set_style(StatusBarStyle::Dark).await;
        status.hide().await;
        status.hide().await;

        assert_eq!(bar.log.lock().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn web_is_a_no_op() {
        let bar = Arc::new(RecordingBar::default());
        let status = StatusBar::new(
            PlatformContext::new(Platform::Web),
            Some(Arc::clone(&bar) as Arc<dyn StatusBarBridge>),
        );

        status.set_style(StatusBarStyle::Light).await;
        status.show().await;

        assert!(bar.log.lock().unwrap().is_empty());
    }
}
