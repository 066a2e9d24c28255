//! Haptics adapter.
//!
//! Purely cosmetic feedback: every operation resolves, every failure is
//! logged and swallowed, and off the packaged shell everything is a
//! no-op. There is no web fallback on purpose.

use std::sync::Arc;

use capability_bridge::device::{HapticsBridge, ImpactStyle, NotificationKind};
use tracing::warn;

use crate::platform::PlatformContext;

pub struct Haptics {
    ctx: PlatformContext,
    bridge: Option<Arc<dyn HapticsBridge>>,
}

impl Haptics {
    pub fn new(ctx: PlatformContext, bridge: Option<Arc<dyn HapticsBridge>>) -> Self {
        Self { ctx, bridge }
    }

    fn engine(&self) -> Option<&Arc<dyn HapticsBridge>> {
        if !self.ctx.is_native() {
            return None;
        }
        self.bridge.as_ref()
    }

    pub async fn impact(&self, style: ImpactStyle) {
        let Some(engine) = self.engine() else { return };
        if let Err(err) = engine.impact(style).await {
            warn!(style = ?style, error = %err, "haptic impact failed");
        }
    }

    pub async fn notification(&self, kind: NotificationKind) {
        let Some(engine) = self.engine() else { return };
        if let Err(err) = engine.notification(kind).await {
            warn!(kind = ?kind, error = %err, "haptic notification failed");
        }
    }

    pub async fn vibrate(&self, duration_ms: u64) {
        let Some(engine) = self.engine() else { return };
        if let Err(err) = engine.vibrate(duration_ms).await {
            warn!(duration_ms = duration_ms, error = %err, "vibrate failed");
        }
    }

    pub async fn selection_start(&self) {
        let Some(engine) = self.engine() else { return };
        if let Err(err) = engine.selection_start().await {
            warn!(error = %err, "selection feedback start failed");
        }
    }

    pub async fn selection_changed(&self) {
        let Some(engine) = self.engine() else { return };
        if let Err(err) = engine.selection_changed().await {
            warn!(error = %err, "selection feedback tick failed");
        }
    }

    pub async fn selection_end(&self) {
        let Some(engine) = self.engine() else { return };
        if let Err(err) = engine.selection_end().await {
            warn!(error = %err, "selection feedback end failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capability_bridge::error::{BridgeError, Result};
    use capability_bridge::Platform;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingHaptics {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingHaptics {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }

        fn touch(&self) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(BridgeError::OperationFailed("engine unavailable".into()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait::async_trait]
    impl HapticsBridge for CountingHaptics {
        async fn impact(&self, _style: ImpactStyle) -> Result<()> {
            self.touch()
        }

        async fn notification(&self, _kind: NotificationKind) -> Result<()> {
            self.touch()
        }

        async fn vibrate(&self, _duration_ms: u64) -> Result<()> {
            self.touch()
        }

        async fn selection_start(&self) -> Result<()> {
            self.touch()
        }

        async fn selection_changed(&self) -> Result<()> {
            self.touch()
        }

        async fn selection_end(&self) -> Result<()> {
            self.touch()
        }
    }

    #[tokio::test]
    async fn plugin_error_resolves_quietly() {
        let engine = Arc::new(CountingHaptics::new(true));
        let haptics = Haptics::new(
            PlatformContext::new(Platform::Ios),
            Some(Arc::clone(&engine) as Arc<dyn HapticsBridge>),
        );

        // Must resolve, not panic or propagate, even though the bridge errors.
        haptics.impact(ImpactStyle::Heavy).await;
        haptics.notification(NotificationKind::Error).await;
        haptics.vibrate(120).await;

        assert_eq!(engine.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn web_platform_never_touches_the_bridge() {
        let engine = Arc::new(CountingHaptics::new(false));
        let haptics = Haptics::new(
            PlatformContext::new(Platform::Web),
            Some(Arc::clone(&engine) as Arc<dyn HapticsBridge>),
        );

        haptics.impact(ImpactStyle::Light).await;
        haptics.selection_start().await;
        haptics.selection_changed().await;
        haptics.selection_end().await;

        assert_eq!(engine.calls.load(Ordering::SeqCst), 0);
    }
}
