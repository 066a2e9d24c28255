//! Device Feedback and Chrome Bridges
//!
//! Haptics, status bar, and soft-keyboard observation. These capabilities
//! are cosmetic: they only exist on the packaged mobile shell, and every
//! failure is swallowed by the adapters above. None of them has a web
//! fallback.

use crate::error::Result;
use crate::platform::{PlatformSend, PlatformSendSync};

/// Strength of an impact haptic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
}

/// Semantic category of a notification haptic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

/// Tactile feedback plugin surface.
///
/// All operations are fire-and-forget from the caller's perspective; the
/// bridge may still report errors so they can be logged.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait HapticsBridge: PlatformSendSync {
    async fn impact(&self, style: ImpactStyle) -> Result<()>;

    async fn notification(&self, kind: NotificationKind) -> Result<()>;

    /// Vibrate for the given duration, in milliseconds.
    async fn vibrate(&self, duration_ms: u64) -> Result<()>;

    /// Begin a selection-feedback session (drag/reorder gestures).
    async fn selection_start(&self) -> Result<()>;

    /// Tick within an active selection-feedback session.
    async fn selection_changed(&self) -> Result<()>;

    /// End a selection-feedback session.
    async fn selection_end(&self) -> Result<()>;
}

/// Status bar text/icon style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBarStyle {
    /// Light content for dark backgrounds.
    Light,
    /// Dark content for light backgrounds.
    Dark,
}

/// Status bar styling plugin surface.
///
/// Applying the current state again must succeed; implementations may not
/// treat redundant calls as errors.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait StatusBarBridge: PlatformSendSync {
    async fn set_style(&self, style: StatusBarStyle) -> Result<()>;

    /// Set the bar background color from a `#RRGGBB` string.
    ///
    /// Only meaningful on Android; other shells may reject it.
    async fn set_background_color(&self, color_hex: &str) -> Result<()>;

    async fn show(&self) -> Result<()>;

    async fn hide(&self) -> Result<()>;
}

/// A soft-keyboard transition reported by the shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyboardEvent {
    /// The keyboard is about to appear with the given height in pixels.
    WillShow { height: f64 },
    /// The keyboard has been dismissed.
    DidHide,
}

/// Soft-keyboard observation plugin surface.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait KeyboardBridge: PlatformSendSync {
    /// Subscribe to keyboard show/hide events.
    async fn subscribe(&self) -> Result<Box<dyn KeyboardEventStream>>;
}

/// Stream of keyboard events. Returns `None` when the subscription ends.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait KeyboardEventStream: PlatformSend {
    async fn next(&mut self) -> Option<KeyboardEvent>;
}

/// Something on screen that can bring itself into centered view, typically
/// the input element that just received focus.
pub trait ScrollTarget {
    fn scroll_into_view_centered(&self);
}
