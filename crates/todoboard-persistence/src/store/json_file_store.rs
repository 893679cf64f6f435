use crate::store::atomic_writer::AtomicWriter;
use crate::traits::{PersistenceMetadata, FORMAT_VERSION};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use todoboard_core::{KeyValueStore, TodoError, TodoResult};
use uuid::Uuid;

/// JSON file-backed key/value store
///
/// The whole key space lives in one file and is rewritten atomically on
/// every mutation. Reads are served from memory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    instance_id: Uuid,
    entries: BTreeMap<String, String>,
}

/// Wrapper structure for the JSON file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonEnvelope {
    pub version: u32,
    pub metadata: PersistenceMetadata,
    pub data: BTreeMap<String, String>,
}

impl JsonEnvelope {
    pub fn new(instance_id: Uuid, data: BTreeMap<String, String>) -> Self {
        Self {
            version: FORMAT_VERSION,
            metadata: PersistenceMetadata::new(instance_id),
            data,
        }
    }

    pub fn to_json_bytes(&self) -> TodoResult<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|e| TodoError::Serialization(e.to_string()))
    }
}

impl JsonFileStore {
    /// Open the store at `path`
    ///
    /// A missing file opens empty. A file that is not a valid envelope is
    /// treated the same way and overwritten by the next mutation.
    pub fn open(path: impl AsRef<Path>) -> TodoResult<Self> {
        Self::open_with_instance_id(path, Uuid::new_v4())
    }

    /// Open with a specific instance ID (useful for testing)
    pub fn open_with_instance_id(path: impl AsRef<Path>, instance_id: Uuid) -> TodoResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match AtomicWriter::read_all(&path)? {
            None => BTreeMap::new(),
            Some(bytes) => match serde_json::from_slice::<JsonEnvelope>(&bytes) {
                Ok(envelope) if envelope.version == FORMAT_VERSION => {
                    tracing::info!(
                        "Loaded {} entries from {}",
                        envelope.data.len(),
                        path.display()
                    );
                    envelope.data
                }
                Ok(envelope) => {
                    tracing::warn!(
                        "Unsupported format version {} in {}, starting empty",
                        envelope.version,
                        path.display()
                    );
                    BTreeMap::new()
                }
                Err(e) => {
                    tracing::warn!("Malformed store file {}: {}, starting empty", path.display(), e);
                    BTreeMap::new()
                }
            },
        };

        Ok(Self {
            path,
            instance_id,
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn flush(&self) -> TodoResult<()> {
        let envelope = JsonEnvelope::new(self.instance_id, self.entries.clone());
        AtomicWriter::write_atomic(&self.path, &envelope.to_json_bytes()?)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> TodoResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> TodoResult<()> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> TodoResult<()> {
        let Some(previous) = self.entries.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.flush() {
            self.entries.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_and_reopen() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("store.json");

        let mut store = JsonFileStore::open(&file_path).unwrap();
        assert!(store.is_empty());
        store.set("todoApps", "[{\"id\":\"a\"}]").unwrap();
        store.set("todos_a-title", "Groceries").unwrap();
        assert!(file_path.exists());

        let reopened = JsonFileStore::open(&file_path).unwrap();
        assert_eq!(reopened.len(), 2);
        assert_eq!(
            reopened.get("todos_a-title").unwrap(),
            Some("Groceries".to_string())
        );
    }

    #[test]
    fn test_envelope_metadata() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("store.json");
        let instance_id = Uuid::new_v4();

        let mut store = JsonFileStore::open_with_instance_id(&file_path, instance_id).unwrap();
        store.set("todoApps", "[]").unwrap();

        let bytes = std::fs::read(&file_path).unwrap();
        let envelope: JsonEnvelope = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(envelope.version, FORMAT_VERSION);
        assert_eq!(envelope.metadata.instance_id, instance_id);
        assert_eq!(envelope.data.get("todoApps"), Some(&"[]".to_string()));
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("store.json");

        let mut store = JsonFileStore::open(&file_path).unwrap();
        store.set("todos_a", "[]").unwrap();
        store.remove("todos_a").unwrap();
        store.remove("todos_a").unwrap();

        let reopened = JsonFileStore::open(&file_path).unwrap();
        assert_eq!(reopened.get("todos_a").unwrap(), None);
    }

    #[test]
    fn test_remove_missing_key_does_not_create_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("store.json");

        let mut store = JsonFileStore::open(&file_path).unwrap();
        store.remove("todos_a").unwrap();
        assert!(!file_path.exists());
    }

    #[test]
    fn test_corrupt_file_opens_empty() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("store.json");
        std::fs::write(&file_path, b"{ not json").unwrap();

        let mut store = JsonFileStore::open(&file_path).unwrap();
        assert!(store.is_empty());

        store.set("todoApps", "[]").unwrap();
        let reopened = JsonFileStore::open(&file_path).unwrap();
        assert_eq!(reopened.get("todoApps").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_unknown_version_opens_empty() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("store.json");
        let mut envelope = JsonEnvelope::new(Uuid::new_v4(), BTreeMap::new());
        envelope.version = 99;
        envelope
            .data
            .insert("todoApps".to_string(), "[]".to_string());
        std::fs::write(&file_path, envelope.to_json_bytes().unwrap()).unwrap();

        let store = JsonFileStore::open(&file_path).unwrap();
        assert!(store.is_empty());
    }
}
