//! Item list persistence adapter.
//!
//! # Responsibility
//! - Serialize the full item sequence into one named slot.
//! - Restore it on startup.
//!
//! # Invariants
//! - Every save rewrites the whole sequence.
//! - Load never fails: absent, unreadable or malformed slots yield an empty list.
//! - Save failures propagate to the caller.

use crate::model::item::Item;
use crate::repo::kv_store::{KeyValueStore, StoreResult};
use log::{debug, warn};

/// Slot name used when no other key is configured.
pub const DEFAULT_STORAGE_KEY: &str = "todos-jquery";

/// JSON adapter between an item sequence and a key-value slot.
pub struct TodoStore<S: KeyValueStore> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> TodoStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Returns the saved sequence, or an empty one when nothing usable is stored.
    pub fn load(&self) -> Vec<Item> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("event=store_load module=repo status=ok source=empty");
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    "event=store_load module=repo status=error error_code=read_failed error={}",
                    err
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Item>>(&raw) {
            Ok(items) => {
                debug!(
                    "event=store_load module=repo status=ok source=slot count={}",
                    items.len()
                );
                items
            }
            Err(err) => {
                warn!(
                    "event=store_load module=repo status=error error_code=parse_failed error={}",
                    err
                );
                Vec::new()
            }
        }
    }

    /// Overwrites the slot with the full sequence.
    pub fn save(&mut self, items: &[Item]) -> StoreResult<()> {
        let payload = serde_json::to_string(items)?;
        self.backend.set(&self.key, &payload)?;
        debug!(
            "event=store_save module=repo status=ok count={}",
            items.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::TodoStore;
    use crate::db::DbError;
    use crate::model::item::Item;
    use crate::repo::kv_store::{KeyValueStore, MemoryKeyValueStore, StoreError, StoreResult};

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::Db(DbError::SchemaAhead {
                db_version: 99,
                supported: 1,
            }))
        }

        fn set(&mut self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Db(DbError::SchemaAhead {
                db_version: 99,
                supported: 1,
            }))
        }
    }

    #[test]
    fn load_swallows_backend_errors() {
        let store = TodoStore::new(BrokenStore, "todos");
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_propagates_backend_errors() {
        let mut store = TodoStore::new(BrokenStore, "todos");
        let items = vec![Item::new("a").unwrap()];
        assert!(store.save(&items).is_err());
    }

    #[test]
    fn load_treats_blank_title_record_as_malformed() {
        let mut backend = MemoryKeyValueStore::new();
        backend
            .set(
                "todos",
                r#"[{"id":"a","title":"ok","completed":false},{"id":"b","title":"  ","completed":true}]"#,
            )
            .unwrap();
        let store = TodoStore::new(backend, "todos");
        assert!(store.load().is_empty());
    }
}
