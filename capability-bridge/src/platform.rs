//! Platform identification and target-dependent trait bounds.
//!
//! Native targets share bridge objects across async tasks and therefore
//! need `Send + Sync`. WebAssembly builds run on a single thread and hold
//! browser objects (`web_sys` types) that are not thread-safe, so the same
//! bounds cannot apply there. The marker traits below make the bounds
//! conditional without duplicating every trait definition.

use serde::{Deserialize, Serialize};

/// The execution environment the client was packaged for.
///
/// `Web` covers any browser tab; the other variants identify the packaged
/// mobile shell. The value is reported once by the host at startup and
/// treated as immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Web,
}

impl Platform {
    /// True for the packaged mobile shells, false for a browser tab.
    pub fn is_native(self) -> bool {
        !matches!(self, Platform::Web)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Web => "web",
        }
    }
}

/// `Send + Sync` on native targets, a no-op bound on `wasm32`.
#[cfg(not(target_arch = "wasm32"))]
pub trait PlatformSendSync: Send + Sync {}

#[cfg(not(target_arch = "wasm32"))]
impl<T> PlatformSendSync for T where T: Send + Sync {}

#[cfg(target_arch = "wasm32")]
pub trait PlatformSendSync {}

#[cfg(target_arch = "wasm32")]
impl<T> PlatformSendSync for T {}

/// `Send` on native targets, a no-op bound on `wasm32`.
#[cfg(not(target_arch = "wasm32"))]
pub trait PlatformSend: Send {}

#[cfg(not(target_arch = "wasm32"))]
impl<T> PlatformSend for T where T: Send {}

#[cfg(target_arch = "wasm32")]
pub trait PlatformSend {}

#[cfg(target_arch = "wasm32")]
impl<T> PlatformSend for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_platforms() {
        assert!(Platform::Ios.is_native());
        assert!(Platform::Android.is_native());
        assert!(!Platform::Web.is_native());
    }

    #[test]
    fn platform_names() {
        assert_eq!(Platform::Ios.as_str(), "ios");
        assert_eq!(Platform::Web.as_str(), "web");
    }
}
