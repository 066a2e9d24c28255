//! Device-feedback bridges the desktop does not have.
//!
//! Implemented as honest no-ops rather than left uninjected so desktop
//! startup code can wire the full bridge set and exercise the adapter
//! paths that mobile shells hit.

use async_trait::async_trait;
use capability_bridge::device::{
    HapticsBridge, ImpactStyle, KeyboardBridge, KeyboardEvent, KeyboardEventStream,
    NotificationKind, StatusBarBridge, StatusBarStyle,
};
use capability_bridge::error::Result;
use tracing::trace;

/// Haptics that only log. Desktops do not vibrate.
pub struct NoopHaptics;

#[async_trait]
impl HapticsBridge for NoopHaptics {
    async fn impact(&self, style: ImpactStyle) -> Result<()> {
        trace!(style = ?style, "haptic impact (no-op)");
        Ok(())
    }

    async fn notification(&self, kind: NotificationKind) -> Result<()> {
        trace!(kind = ?kind, "haptic notification (no-op)");
        Ok(())
    }

    async fn vibrate(&self, duration_ms: u64) -> Result<()> {
        trace!(duration_ms = duration_ms, "vibrate (no-op)");
        Ok(())
    }

    async fn selection_start(&self) -> Result<()> {
        Ok(())
    }

    async fn selection_changed(&self) -> Result<()> {
        Ok(())
    }

    async fn selection_end(&self) -> Result<()> {
        Ok(())
    }
}

/// Status bar that only logs. There is no status bar to style.
pub struct NoopStatusBar;

#[async_trait]
impl StatusBarBridge for NoopStatusBar {
    async fn set_style(&self, style: StatusBarStyle) -> Result<()> {
        trace!(style = ?style, "status bar style (no-op)");
        Ok(())
    }

    async fn set_background_color(&self, color_hex: &str) -> Result<()> {
        trace!(color = color_hex, "status bar color (no-op)");
        Ok(())
    }

    async fn show(&self) -> Result<()> {
        Ok(())
    }

    async fn hide(&self) -> Result<()> {
        Ok(())
    }
}

/// Keyboard bridge whose stream never yields; hardware keyboards do not
/// occlude the viewport.
pub struct SilentKeyboard;

struct PendingKeyboardStream;

#[async_trait]
impl KeyboardEventStream for PendingKeyboardStream {
    async fn next(&mut self) -> Option<KeyboardEvent> {
        std::future::pending().await
    }
}

#[async_trait]
impl KeyboardBridge for SilentKeyboard {
    async fn subscribe(&self) -> Result<Box<dyn KeyboardEventStream>> {
        Ok(Box::new(PendingKeyboardStream))
    }
}
