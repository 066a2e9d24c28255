//! Namespaced `localStorage` key/value store.

use async_trait::async_trait;
use capability_bridge::error::{BridgeError, Result};
use capability_bridge::storage::KeyValueStore;

use crate::error::{js_error, window};

/// `localStorage`-backed store. Values are plain text; the session layer
/// decides what belongs here. Namespaces keep multiple host shells from
/// clobbering each other's keys on the same origin.
#[derive(Clone)]
pub struct LocalStore {
    storage: web_sys::Storage,
    namespace: String,
}

impl LocalStore {
    /// Construct a store scoped to `namespace`. Fails when the browser
    /// denies `localStorage` (private mode on some engines).
    pub fn new(namespace: impl Into<String>) -> Result<Self> {
        let storage = window()?
            .local_storage()
            .map_err(|err| js_error("localStorage", err))?
            .ok_or_else(|| BridgeError::NotAvailable("localStorage".into()))?;
        Ok(Self {
            storage,
            namespace: namespace.into(),
        })
    }

    fn key_for(&self, key: &str) -> String {
        format!("{}::{key}", self.namespace)
    }
}

#[async_trait(?Send)]
impl KeyValueStore for LocalStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(&self.key_for(key))
            .map_err(|err| js_error("get_item", err))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(&self.key_for(key), value)
            .map_err(|err| js_error("set_item", err))
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(&self.key_for(key))
            .map_err(|err| js_error("remove_item", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    fn unique_namespace() -> String {
        format!("store-test-{}", js_sys::Date::now())
    }

    #[wasm_bindgen_test]
    async fn round_trip_and_remove() {
        let store = LocalStore::new(unique_namespace()).expect("localStorage available");

        assert_eq!(store.get("session_token").await.expect("get"), None);
        store.set("session_token", "tok").await.expect("set");
        assert_eq!(
            store.get("session_token").await.expect("get").as_deref(),
            Some("tok")
        );
        store.remove("session_token").await.expect("remove");
        assert_eq!(store.get("session_token").await.expect("get"), None);
    }

    #[wasm_bindgen_test]
    async fn namespaces_do_not_collide() {
        let ns = unique_namespace();
        let first = LocalStore::new(format!("{ns}-a")).expect("store");
        let second = LocalStore::new(format!("{ns}-b")).expect("store");

        first.set("k", "one").await.expect("set");
        second.set("k", "two").await.expect("set");

        assert_eq!(first.get("k").await.expect("get").as_deref(), Some("one"));
        assert_eq!(second.get("k").await.expect("get").as_deref(), Some("two"));
    }
}
