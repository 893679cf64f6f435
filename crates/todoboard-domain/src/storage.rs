//! Best-effort access to the key/value store.
//!
//! Reads that fail or hold malformed JSON come back as absent or default.
//! Writes that fail are logged and reported as `false`; the in-memory model
//! stays authoritative for the session.

use serde::de::DeserializeOwned;
use serde::Serialize;
use todoboard_core::KeyValueStore;

pub(crate) fn read(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", key, e);
            None
        }
    }
}

/// Parse the JSON stored under `key`, substituting `T::default()` when the
/// value is absent or does not match the schema.
pub(crate) fn read_json<T: DeserializeOwned + Default>(store: &dyn KeyValueStore, key: &str) -> T {
    let Some(raw) = read(store, key) else {
        return T::default();
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Discarding malformed value under {}: {}", key, e);
            T::default()
        }
    }
}

pub(crate) fn write(store: &mut dyn KeyValueStore, key: &str, value: &str) -> bool {
    match store.set(key, value) {
        Ok(()) => {
            tracing::debug!("Wrote {} bytes to {}", value.len(), key);
            true
        }
        Err(e) => {
            tracing::warn!("Failed to persist {}: {}", key, e);
            false
        }
    }
}

pub(crate) fn write_json<T: Serialize + ?Sized>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> bool {
    match serde_json::to_string(value) {
        Ok(json) => write(store, key, &json),
        Err(e) => {
            tracing::warn!("Failed to serialize {}: {}", key, e);
            false
        }
    }
}

pub(crate) fn remove(store: &mut dyn KeyValueStore, key: &str) -> bool {
    match store.remove(key) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Failed to remove {}: {}", key, e);
            false
        }
    }
}
