//! App Lifecycle Bridge
//!
//! Reports foreground/background transitions from the packaged shell.
//! Web implementations return a stream that never yields: a browser tab is
//! treated as permanently active by this layer.

use crate::error::Result;
use crate::platform::{PlatformSend, PlatformSendSync};

/// Coarse application state as the shell reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Active,
    Background,
}

/// App state event source.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait AppStateBridge: PlatformSendSync {
    /// Subscribe to app state change events.
    ///
    /// The stream reports the raw shell events; deduplication and
    /// edge-triggering are the consumer's job.
    async fn subscribe(&self) -> Result<Box<dyn AppStateStream>>;
}

/// Stream of app state events. Returns `None` when the subscription ends.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait AppStateStream: PlatformSend {
    async fn next(&mut self) -> Option<AppState>;
}
