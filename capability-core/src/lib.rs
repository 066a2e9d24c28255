//! # Platform-Adaptive Capability Layer
//!
//! One uniform API over the divergent mechanisms of the packaged mobile
//! shell and the browser. Feature code calls the adapters in this crate;
//! the adapters consult the process-wide [`platform`] context once, pick
//! the native or web bridge, and normalize every outcome so callers never
//! need exception handling for "capability unsupported" or "plugin threw".
//!
//! ## Degradation policy
//!
//! - Unavailable capability: neutral result (`false` / `None`), no error.
//! - Bridge failure: caught and logged; clipboard and share retry the web
//!   bridge, haptics and status bar return quietly. The asymmetry is
//!   deliberate and documented per adapter.
//! - User cancellation: success.
//! - Storage `set`/`remove` failures: propagated. Silently losing a
//!   session value is worse than an explicit failure the caller can react
//!   to.
//!
//! ## Assembly
//!
//! Host shells build a [`capabilities::CapabilitySet`] via
//! [`capabilities::CapabilityBuilder`] during startup, injecting the
//! bridge objects from `shell-desktop`, `shell-web`, or the mobile shell's
//! own plugins, then call `connect` to start the lifecycle and keyboard
//! event pumps.

pub mod capabilities;
pub mod clipboard;
pub mod file_save;
pub mod haptics;
pub mod launcher;
pub mod lifecycle;
pub mod logging;
pub mod notices;
pub mod platform;
pub mod share;
pub mod status_bar;
pub mod storage;
pub mod keyboard;

mod time;

pub use capabilities::{CapabilityBuilder, CapabilitySet};
pub use clipboard::Clipboard;
pub use file_save::FileSaver;
pub use haptics::Haptics;
pub use keyboard::{KeyboardState, KeyboardWatcher};
pub use launcher::{classify_url, UrlKind, UrlLauncher};
pub use lifecycle::{LifecycleBridge, LifecycleCallbacks, LifecycleSubscription};
pub use notices::{Notice, NoticeBus, NoticeLevel};
pub use platform::{current_platform, init_platform, is_native_platform, PlatformContext};
pub use share::ShareSheet;
pub use status_bar::StatusBar;
pub use storage::SessionStorage;
