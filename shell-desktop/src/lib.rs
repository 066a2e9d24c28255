//! # Desktop Shell Bridges
//!
//! Bridge implementations for the desktop development shell (macOS,
//! Windows, Linux). The desktop build exists for developing and testing
//! feature code outside a device or browser, so the capabilities split
//! in two groups:
//!
//! - Real implementations where the desktop has the mechanism:
//!   [`KeyringStore`] over the OS keychain, [`HttpFileSink`] downloading
//!   into the user's Downloads folder, [`SystemUrlOpener`] delegating to
//!   the default browser.
//! - Honest absences where it does not: share sheet, haptics, status bar
//!   and soft keyboard report themselves unavailable or never emit, and
//!   the adapter layer degrades exactly as it would for an unsupported
//!   browser.
//!
//! ## Feature Flags
//!
//! - `secure-store`: OS keychain integration via `keyring` (default).
//!   Without it, use [`MemoryStore`] and accept that sessions do not
//!   survive a restart.

mod device;
mod files;
mod launcher;
mod lifecycle;
mod share;
mod storage;

pub use device::{NoopHaptics, NoopStatusBar, SilentKeyboard};
pub use files::HttpFileSink;
pub use launcher::SystemUrlOpener;
pub use lifecycle::DesktopAppState;
pub use share::DesktopShare;
pub use storage::MemoryStore;

#[cfg(feature = "secure-store")]
pub use storage::KeyringStore;
