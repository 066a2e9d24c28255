//! # Capability Bridge Traits
//!
//! The downward contract between the capability layer and the host shell.
//!
//! ## Overview
//!
//! Each trait in this crate represents one native capability that the hybrid
//! client needs but that must be implemented differently per platform
//! (iOS shell, Android shell, desktop development shell, browser). The
//! adapters in `capability-core` consume these traits; the `shell-desktop`
//! and `shell-web` crates provide the concrete implementations, and mobile
//! shells inject their own.
//!
//! ## Traits
//!
//! - [`KeyValueStore`](storage::KeyValueStore) - session key/value persistence
//! - [`ClipboardBridge`](share::ClipboardBridge) - plain-text clipboard access
//! - [`ShareBridge`](share::ShareBridge) - native/web share sheet
//! - [`HapticsBridge`](device::HapticsBridge) - vibration and tactile feedback
//! - [`StatusBarBridge`](device::StatusBarBridge) - status bar styling
//! - [`KeyboardBridge`](device::KeyboardBridge) - soft-keyboard show/hide events
//! - [`FileSinkBridge`](files::FileSinkBridge) - saving remote resources to disk
//! - [`UrlHandlerBridge`](launcher::UrlHandlerBridge) - in-app browser / OS handler
//! - [`AppStateBridge`](lifecycle::AppStateBridge) - foreground/background events
//!
//! ## Error Handling
//!
//! All bridge traits use [`BridgeError`](error::BridgeError). Shell
//! implementations convert platform-specific failures into `BridgeError`
//! with enough context to be actionable in logs; the adapters above decide
//! whether a failure is swallowed, falls back, or propagates.
//!
//! ## Thread Safety
//!
//! Native targets require `Send + Sync` so bridge objects can be shared
//! across async tasks. WebAssembly runs single-threaded and browser handles
//! are not thread-safe, so the bounds are relaxed there via the marker
//! traits in [`platform`].

pub mod device;
pub mod error;
pub mod files;
pub mod launcher;
pub mod lifecycle;
pub mod platform;
pub mod share;
pub mod storage;

pub use error::BridgeError;

// Re-export commonly used types
pub use device::{
    ImpactStyle, KeyboardBridge, KeyboardEvent, KeyboardEventStream, NotificationKind,
    ScrollTarget, StatusBarBridge, StatusBarStyle,
};
pub use device::HapticsBridge;
pub use files::FileSinkBridge;
pub use launcher::UrlHandlerBridge;
pub use lifecycle::{AppState, AppStateBridge, AppStateStream};
pub use platform::Platform;
pub use share::{ClipboardBridge, ShareBridge, ShareOutcome, ShareRequest};
pub use storage::KeyValueStore;
