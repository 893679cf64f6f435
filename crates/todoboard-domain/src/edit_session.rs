//! Per-task view/edit state machine.
//!
//! `Viewing` is the resting state. `begin` moves to `Editing` with a draft
//! seeded from the stored text, unless the task is completed. `submit` and
//! `cancel` both return to `Viewing`. Sessions are never persisted.

use todoboard_core::KeyValueStore;

use crate::board::Board;
use crate::task::{TaskId, TaskRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Viewing,
    Editing {
        draft: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    task_id: TaskId,
    state: EditState,
    fresh: bool,
}

impl EditSession {
    pub fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            state: EditState::Viewing,
            fresh: false,
        }
    }

    /// Session for a task created during this session, so the presentation
    /// layer can play its entry animation.
    pub fn fresh(task_id: TaskId) -> Self {
        Self {
            fresh: true,
            ..Self::new(task_id)
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    pub fn draft(&self) -> Option<&str> {
        match &self.state {
            EditState::Editing { draft } => Some(draft.as_str()),
            EditState::Viewing => None,
        }
    }

    /// Enter `Editing`. Refused for completed tasks and while already editing.
    pub fn begin(&mut self, task: &TaskRecord) -> bool {
        if task.completion || self.is_editing() {
            return false;
        }
        self.state = EditState::Editing {
            draft: task.text.clone(),
        };
        true
    }

    pub fn change_draft(&mut self, text: impl Into<String>) -> bool {
        match &mut self.state {
            EditState::Editing { draft } => {
                *draft = text.into();
                true
            }
            EditState::Viewing => false,
        }
    }

    /// Commit the draft through the board and return to `Viewing`.
    ///
    /// Returns whether the board saved the draft; an empty draft is
    /// discarded and the stored text stays in place.
    pub fn submit(&mut self, board: &mut Board, store: &mut dyn KeyValueStore) -> bool {
        let EditState::Editing { draft } = std::mem::take(&mut self.state) else {
            return false;
        };
        let saved = board.update_task_text(store, self.task_id, &draft);
        self.fresh = false;
        saved
    }

    pub fn cancel(&mut self) -> bool {
        if !self.is_editing() {
            return false;
        }
        self.state = EditState::Viewing;
        self.fresh = false;
        true
    }
}
