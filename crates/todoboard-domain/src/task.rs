use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Millisecond creation timestamp, kept unique within a board.
pub type TaskId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,
    #[serde(rename = "task")]
    pub text: String,
    pub completion: bool,
}

impl TaskRecord {
    pub fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            completion: false,
        }
    }

    pub fn toggle_completion(&mut self) {
        self.completion = !self.completion;
    }

    /// Replace the text unless `text` is empty. Returns whether it changed.
    pub fn update_text(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.text = text.to_string();
        true
    }
}

/// Hands out timestamp-derived task ids that never repeat.
///
/// Two tasks created within the same millisecond get consecutive ids, and a
/// clock that steps backwards cannot reissue an id already handed out. Once
/// the largest id reaches `i64::MAX`, new ids count down below the smallest
/// id seen so far.
#[derive(Debug, Clone, Default)]
pub struct TaskIdGenerator {
    last: Option<TaskId>,
    lowest: Option<TaskId>,
}

impl TaskIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator that never reissues an id in `existing`.
    pub fn seeded(existing: impl IntoIterator<Item = TaskId>) -> Self {
        let mut generator = Self::new();
        for id in existing {
            generator.record(id);
        }
        generator
    }

    pub fn next_id(&mut self) -> TaskId {
        self.next_at(Utc::now().timestamp_millis())
    }

    pub fn next_at(&mut self, now_millis: i64) -> TaskId {
        let id = match self.last {
            Some(last) if last >= now_millis => match last.checked_add(1) {
                Some(next) => next,
                None => self.below_lowest(),
            },
            _ => now_millis,
        };
        self.record(id);
        id
    }

    fn below_lowest(&self) -> TaskId {
        // Every issued or seeded id lies in [lowest, last]
        self.lowest
            .and_then(|lowest| lowest.checked_sub(1))
            .unwrap_or(TaskId::MIN)
    }

    fn record(&mut self, id: TaskId) {
        self.last = Some(self.last.map_or(id, |last| last.max(id)));
        self.lowest = Some(self.lowest.map_or(id, |lowest| lowest.min(id)));
    }
}
