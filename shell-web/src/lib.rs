//! # Web Shell Bridges
//!
//! Browser implementations of the capability bridge traits, used both by
//! the standalone web build and inside the packaged shells' webview when
//! a capability falls back to its web mechanism.
//!
//! # Platform Support
//!
//! This crate is designed exclusively for the `wasm32-unknown-unknown`
//! target. It compiles to an empty crate everywhere else.
//!
//! # Implementations
//!
//! - [`LocalStore`]: namespaced `localStorage` key/value store
//! - [`NavigatorClipboard`]: async clipboard via `navigator.clipboard`
//! - [`NavigatorShare`]: `navigator.share`, probed at call time
//! - [`AnchorFileSink`]: downloads via a synthesized anchor click
//! - [`WindowUrlOpener`]: new tab / `location.href` navigation
//! - [`BrowserAppState`]: a stream that never yields; tabs count as
//!   permanently active
//! - [`DomScrollTarget`]: centered smooth scroll for a focused element

#![cfg(target_arch = "wasm32")]

mod clipboard;
mod error;
mod files;
mod launcher;
mod lifecycle;
mod scroll;
mod share;
mod storage;

pub mod bootstrap;

pub use bootstrap::{build_web_bridges, WebBridgeConfig, WebBridgeSet};
pub use clipboard::NavigatorClipboard;
pub use files::AnchorFileSink;
pub use launcher::WindowUrlOpener;
pub use lifecycle::BrowserAppState;
pub use scroll::DomScrollTarget;
pub use share::NavigatorShare;
pub use storage::LocalStore;
