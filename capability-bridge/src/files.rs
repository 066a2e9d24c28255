//! File Save Bridge
//!
//! Persists a remote resource where the user can find it:
//! - Mobile shell: download into the app's user-visible documents directory
//! - Desktop shell: download into the downloads directory
//! - Web: synthesized anchor click so the browser runs its own download UI

use crate::error::Result;
use crate::platform::PlatformSendSync;

/// Saves remote resources under a user-chosen filename.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait FileSinkBridge: PlatformSendSync {
    /// Fetch `url` and store it as `filename` in the platform's
    /// user-accessible download location.
    ///
    /// `filename` is a bare name; implementations must reject names that
    /// attempt path traversal.
    async fn save_remote(&self, url: &str, filename: &str) -> Result<()>;
}
