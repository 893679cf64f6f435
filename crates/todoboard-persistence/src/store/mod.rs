pub mod atomic_writer;
pub mod json_file_store;
pub mod memory_store;

pub use atomic_writer::AtomicWriter;
pub use json_file_store::{JsonEnvelope, JsonFileStore};
pub use memory_store::MemoryStore;

use todoboard_core::{AppConfig, TodoResult};

/// Open the file-backed store at the configured data file location.
pub fn open_store(config: &AppConfig) -> TodoResult<JsonFileStore> {
    let path = config.effective_data_file();
    tracing::info!("Opening store at {}", path.display());
    JsonFileStore::open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use todoboard_core::KeyValueStore;

    #[test]
    fn test_open_store_uses_configured_path() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("boards.json");
        let config = AppConfig {
            data_file: Some(file_path.clone()),
            ..AppConfig::default()
        };

        let mut store = open_store(&config).unwrap();
        assert_eq!(store.path(), file_path.as_path());
        store.set("todoApps", "[]").unwrap();
        assert!(file_path.exists());
    }
}
