//! Session Key/Value Storage
//!
//! Backed by the platform's secure persistent store:
//! - iOS/Android shell: secure key-value plugin (Keychain / Keystore)
//! - Desktop shell: OS keychain via `keyring`
//! - Web: browser `localStorage`
//!
//! Implementations must be read-after-write consistent within a single
//! process. The session layer stores auth tokens through this trait, so
//! `set`/`remove` failures are real data-loss risks and must be reported,
//! not swallowed.

use crate::error::Result;
use crate::platform::PlatformSendSync;

/// Persistent string key/value store.
///
/// # Example
///
/// ```ignore
/// use capability_bridge::storage::KeyValueStore;
///
/// async fn remember_session(store: &dyn KeyValueStore, token: &str) -> Result<()> {
///     store.set("session_token", token).await
/// }
/// ```
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait KeyValueStore: PlatformSendSync {
    /// Retrieve a value.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a key. Deleting a missing key is a success.
    async fn remove(&self, key: &str) -> Result<()>;
}
