use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use todoboard_core::KeyValueStore;
use uuid::Uuid;

use crate::storage;
use crate::task::{TaskId, TaskIdGenerator, TaskRecord};
use crate::theme::ThemeColor;

/// Opaque board identifier. Freshly created boards get a UUID v4.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardId(String);

impl BoardId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key holding this board's task list; title and color keys derive from it.
    pub fn storage_key(&self) -> String {
        format!("todos_{}", self.0)
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for BoardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for BoardId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

pub fn title_key(storage_key: &str) -> String {
    format!("{}-title", storage_key)
}

pub fn color_key(storage_key: &str) -> String {
    format!("{}-color", storage_key)
}

/// One todo list: title, theme color and ordered tasks.
///
/// Every mutation is mirrored to the store before the call returns. Store
/// failures are logged and otherwise ignored.
#[derive(Debug, Clone)]
pub struct Board {
    storage_key: String,
    title: String,
    theme_color: ThemeColor,
    tasks: Vec<TaskRecord>,
    ids: TaskIdGenerator,
}

impl Board {
    /// Empty board that has never been stored.
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
            title: String::new(),
            theme_color: ThemeColor::Default,
            tasks: Vec::new(),
            ids: TaskIdGenerator::new(),
        }
    }

    /// Read a board without writing anything back.
    pub fn load(store: &dyn KeyValueStore, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let title = storage::read(store, &title_key(&storage_key)).unwrap_or_default();
        let theme_color = storage::read(store, &color_key(&storage_key))
            .map(ThemeColor::from)
            .unwrap_or_default();

        let mut tasks: Vec<TaskRecord> = storage::read_json(store, &storage_key);
        let mut seen = HashSet::new();
        let before = tasks.len();
        tasks.retain(|task| seen.insert(task.id));
        if tasks.len() != before {
            tracing::warn!(
                "Dropped {} tasks with duplicate ids from {}",
                before - tasks.len(),
                storage_key
            );
        }

        let ids = TaskIdGenerator::seeded(tasks.iter().map(|task| task.id));
        Self {
            storage_key,
            title,
            theme_color,
            tasks,
            ids,
        }
    }

    /// Load a board and write its normalized snapshot straight back.
    pub fn hydrate(store: &mut dyn KeyValueStore, storage_key: impl Into<String>) -> Self {
        let board = Self::load(&*store, storage_key);
        board.persist(store);
        board
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn theme_color(&self) -> &ThemeColor {
        &self.theme_color
    }

    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    pub fn task(&self, task_id: TaskId) -> Option<&TaskRecord> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    pub fn set_title(&mut self, store: &mut dyn KeyValueStore, title: impl Into<String>) {
        self.title = title.into();
        self.persist(store);
    }

    pub fn set_theme_color(&mut self, store: &mut dyn KeyValueStore, color: ThemeColor) {
        self.theme_color = color;
        storage::write(store, &color_key(&self.storage_key), self.theme_color.as_css());
    }

    /// Append a task. Empty text is ignored; whitespace is not trimmed.
    pub fn add_task(&mut self, store: &mut dyn KeyValueStore, text: &str) -> Option<TaskId> {
        if text.is_empty() {
            return None;
        }
        let id = self.ids.next_id();
        self.tasks.push(TaskRecord::new(id, text.to_string()));
        self.persist(store);
        Some(id)
    }

    pub fn toggle_completion(&mut self, store: &mut dyn KeyValueStore, task_id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == task_id) else {
            return false;
        };
        task.toggle_completion();
        self.persist(store);
        true
    }

    /// Replace a task's text. Empty `text` leaves the stored text untouched.
    pub fn update_task_text(
        &mut self,
        store: &mut dyn KeyValueStore,
        task_id: TaskId,
        text: &str,
    ) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == task_id) else {
            return false;
        };
        if !task.update_text(text) {
            return false;
        }
        self.persist(store);
        true
    }

    pub fn delete_task(&mut self, store: &mut dyn KeyValueStore, task_id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != task_id);
        if self.tasks.len() == before {
            return false;
        }
        self.persist(store);
        true
    }

    /// Remove the task list, title and color entries of this board.
    pub fn erase(&self, store: &mut dyn KeyValueStore) {
        erase_entries(store, &self.storage_key);
    }

    fn persist(&self, store: &mut dyn KeyValueStore) {
        storage::write_json(store, &self.storage_key, &self.tasks);
        storage::write(store, &title_key(&self.storage_key), &self.title);
    }
}

/// Remove all three entries stored under `storage_key`.
pub fn erase_entries(store: &mut dyn KeyValueStore, storage_key: &str) {
    storage::remove(store, storage_key);
    storage::remove(store, &title_key(storage_key));
    storage::remove(store, &color_key(storage_key));
}
