//! Session key/value storage adapter.
//!
//! The backing store is selected at construction time: the shell injects
//! its secure store on native platforms and the localStorage bridge on
//! web. Reads degrade to `None`; writes and removals propagate failures
//! because the session layer must know when a token was not persisted.

use std::sync::Arc;

use capability_bridge::error::Result;
use capability_bridge::storage::KeyValueStore;
use tracing::{debug, warn};

/// Adapter over the platform's persistent key/value store.
#[derive(Clone)]
pub struct SessionStorage {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStorage {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read a value. Bridge failures are logged and read as "absent".
    pub async fn get(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(value) => value,
            Err(err) => {
                warn!(key = key, error = %err, "storage read failed");
                None
            }
        }
    }

    /// Persist a value. Failures propagate: a lost write here is lost
    /// session data.
    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.store.set(key, value).await?;
        debug!(key = key, "stored value");
        Ok(())
    }

    /// Delete a key. Failures propagate for the same reason as [`set`].
    ///
    /// [`set`]: SessionStorage::set
    pub async fn remove(&self, key: &str) -> Result<()> {
        self.store.remove(key).await?;
        debug!(key = key, "removed value");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capability_bridge::error::BridgeError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MapStore {
        entries: Mutex<HashMap<String, String>>,
        fail_reads: bool,
    }

    impl MapStore {
        fn new() -> Self {
            Self {
                entries: Mutex::new(HashMap::new()),
                fail_reads: false,
            }
        }
    }

    #[async_trait::async_trait]
    impl KeyValueStore for MapStore {
        async fn get(&self, key: &str) -> Result<Option<String>> {
            if self.fail_reads {
                return Err(BridgeError::OperationFailed("read refused".into()));
            }
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<()> {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn remove(&self, key: &str) -> Result<()> {
            self.entries.lock().unwrap().remove(key);
            Ok(())
        }
    }

    #[tokio::test]
    async fn round_trip() {
        let storage = SessionStorage::new(Arc::new(MapStore::new()));

        storage.set("session_token", "abc123").await.unwrap();
        assert_eq!(storage.get("session_token").await.as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn remove_makes_key_absent() {
        let storage = SessionStorage::new(Arc::new(MapStore::new()));

        storage.set("k", "v").await.unwrap();
        storage.remove("k").await.unwrap();
        assert_eq!(storage.get("k").await, None);
    }

    #[tokio::test]
    async fn failed_read_is_absent_not_error() {
        let store = MapStore {
            entries: Mutex::new(HashMap::new()),
            fail_reads: true,
        };
        let storage = SessionStorage::new(Arc::new(store));

        assert_eq!(storage.get("anything").await, None);
    }
}
