use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use todoboard_core::KeyValueStore;

use crate::board::{erase_entries, BoardId};
use crate::storage;

/// Store key holding the ordered list of board identities.
pub const COLLECTION_KEY: &str = "todoApps";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardIdentity {
    pub id: BoardId,
}

/// Ordered set of existing boards. Holds identities only; each board's
/// content lives under its own storage key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardCollection {
    boards: Vec<BoardIdentity>,
}

impl BoardCollection {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let mut boards: Vec<BoardIdentity> = storage::read_json(store, COLLECTION_KEY);
        let mut seen = HashSet::new();
        boards.retain(|identity| seen.insert(identity.id.clone()));
        Self { boards }
    }

    /// Load the collection and write it back, replacing a malformed value.
    pub fn hydrate(store: &mut dyn KeyValueStore) -> Self {
        let collection = Self::load(&*store);
        collection.persist(store);
        tracing::debug!("Hydrated {} boards", collection.len());
        collection
    }

    pub fn boards(&self) -> &[BoardIdentity] {
        &self.boards
    }

    pub fn ids(&self) -> impl Iterator<Item = &BoardId> {
        self.boards.iter().map(|identity| &identity.id)
    }

    pub fn contains(&self, id: &BoardId) -> bool {
        self.boards.iter().any(|identity| &identity.id == id)
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn add_board(&mut self, store: &mut dyn KeyValueStore) -> BoardId {
        let id = loop {
            let candidate = BoardId::generate();
            if !self.contains(&candidate) {
                break candidate;
            }
        };
        self.boards.push(BoardIdentity { id: id.clone() });
        self.persist(store);
        tracing::info!("Created board {}", id);
        id
    }

    /// Drop the identity and erase the board's entries. Returns whether the
    /// identity was present; the entries are erased either way.
    pub fn remove_board(&mut self, store: &mut dyn KeyValueStore, id: &BoardId) -> bool {
        let before = self.boards.len();
        self.boards.retain(|identity| &identity.id != id);
        let removed = self.boards.len() != before;

        self.persist(store);
        erase_entries(store, &id.storage_key());
        if removed {
            tracing::info!("Removed board {}", id);
        }
        removed
    }

    fn persist(&self, store: &mut dyn KeyValueStore) {
        storage::write_json(store, COLLECTION_KEY, &self.boards);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todoboard_persistence::MemoryStore;

    #[test]
    fn test_hydrate_absent_writes_empty_array() {
        let mut store = MemoryStore::new();
        let collection = BoardCollection::hydrate(&mut store);
        assert!(collection.is_empty());
        assert_eq!(store.get(COLLECTION_KEY).unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_hydrate_malformed_is_normalized() {
        let mut store = MemoryStore::new();
        store.set(COLLECTION_KEY, "{broken").unwrap();

        let collection = BoardCollection::hydrate(&mut store);
        assert!(collection.is_empty());
        assert_eq!(store.get(COLLECTION_KEY).unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_wire_format() {
        let mut store = MemoryStore::new();
        store
            .set(COLLECTION_KEY, r#"[{"id":"first"},{"id":"second"},{"id":"first"}]"#)
            .unwrap();

        let collection = BoardCollection::hydrate(&mut store);
        let ids: Vec<&str> = collection.ids().map(BoardId::as_str).collect();
        assert_eq!(ids, vec!["first", "second"]);
        assert_eq!(
            store.get(COLLECTION_KEY).unwrap(),
            Some(r#"[{"id":"first"},{"id":"second"}]"#.to_string())
        );
    }

    #[test]
    fn test_add_board_appends_and_persists() {
        let mut store = MemoryStore::new();
        let mut collection = BoardCollection::hydrate(&mut store);
        let first = collection.add_board(&mut store);
        let second = collection.add_board(&mut store);

        assert_ne!(first, second);
        assert!(store.get(&first.storage_key()).unwrap().is_none());

        let reloaded = BoardCollection::load(&store);
        assert_eq!(reloaded.ids().cloned().collect::<Vec<_>>(), vec![first, second]);
    }

    #[test]
    fn test_remove_board_erases_entries() {
        let mut store = MemoryStore::new();
        let mut collection = BoardCollection::hydrate(&mut store);
        let first = collection.add_board(&mut store);
        let second = collection.add_board(&mut store);
        let key = first.storage_key();
        store.set(&key, "[]").unwrap();
        store.set(&format!("{}-title", key), "Doomed").unwrap();
        store.set(&format!("{}-color", key), "#fb7185").unwrap();

        assert!(collection.remove_board(&mut store, &first));
        assert_eq!(collection.ids().collect::<Vec<_>>(), vec![&second]);
        assert_eq!(store.keys(), vec![COLLECTION_KEY.to_string()]);
        assert_eq!(BoardCollection::load(&store), collection);
    }

    #[test]
    fn test_remove_unknown_board_is_noop() {
        let mut store = MemoryStore::new();
        let mut collection = BoardCollection::hydrate(&mut store);
        let id = collection.add_board(&mut store);

        assert!(!collection.remove_board(&mut store, &BoardId::from("missing")));
        assert_eq!(collection.len(), 1);
        assert!(collection.contains(&id));
    }
}
