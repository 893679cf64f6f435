//! Session state owner.
//!
//! A `Workspace` is built once per session from a store handle. It hydrates
//! the board collection and every board, owns the transient interaction
//! state (edit sessions, delete confirmations), and routes each user intent
//! to the model that handles it. Intents naming an unknown board or task are
//! ignored.

use std::collections::HashMap;

use todoboard_core::{KeyValueStore, TodoResult};

use crate::board::{Board, BoardId};
use crate::collection::BoardCollection;
use crate::commands::Command;
use crate::delete_confirmation::{DeleteConfirmation, DeleteRequest, DeleteState};
use crate::edit_session::{EditSession, EditState};
use crate::task::TaskId;
use crate::theme::ThemeColor;

#[derive(Debug)]
struct BoardSession {
    id: BoardId,
    board: Board,
    delete: DeleteConfirmation,
    edits: HashMap<TaskId, EditSession>,
}

impl BoardSession {
    fn hydrate(store: &mut dyn KeyValueStore, id: BoardId) -> Self {
        let board = Board::hydrate(store, id.storage_key());
        Self {
            id,
            board,
            delete: DeleteConfirmation::new(),
            edits: HashMap::new(),
        }
    }

    fn edit_session(&mut self, task_id: TaskId) -> Option<&mut EditSession> {
        self.board.task(task_id)?;
        Some(
            self.edits
                .entry(task_id)
                .or_insert_with(|| EditSession::new(task_id)),
        )
    }
}

fn find<'a>(sessions: &'a [BoardSession], id: &BoardId) -> Option<&'a BoardSession> {
    sessions.iter().find(|session| &session.id == id)
}

fn find_mut<'a>(sessions: &'a mut [BoardSession], id: &BoardId) -> Option<&'a mut BoardSession> {
    sessions.iter_mut().find(|session| &session.id == id)
}

pub struct Workspace {
    store: Box<dyn KeyValueStore>,
    collection: BoardCollection,
    sessions: Vec<BoardSession>,
}

impl Workspace {
    /// Hydrate the collection and every board it lists, in display order.
    pub fn open(store: impl KeyValueStore + 'static) -> Self {
        let mut store: Box<dyn KeyValueStore> = Box::new(store);
        let collection = BoardCollection::hydrate(store.as_mut());
        let sessions = collection
            .ids()
            .map(|id| BoardSession::hydrate(store.as_mut(), id.clone()))
            .collect();
        tracing::info!("Opened workspace with {} boards", collection.len());

        Self {
            store,
            collection,
            sessions,
        }
    }

    /// Give the store back, e.g. to reopen it as a fresh session.
    pub fn into_store(self) -> Box<dyn KeyValueStore> {
        self.store
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn collection(&self) -> &BoardCollection {
        &self.collection
    }

    /// Boards in display order.
    pub fn boards(&self) -> impl Iterator<Item = (&BoardId, &Board)> {
        self.sessions
            .iter()
            .map(|session| (&session.id, &session.board))
    }

    pub fn board(&self, id: &BoardId) -> Option<&Board> {
        find(&self.sessions, id).map(|session| &session.board)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn execute(&mut self, command: &dyn Command) -> TodoResult<()> {
        tracing::debug!("Executing: {}", command.description());
        command.execute(self)
    }

    pub fn add_board(&mut self) -> BoardId {
        let id = self.collection.add_board(self.store.as_mut());
        let session = BoardSession::hydrate(self.store.as_mut(), id.clone());
        self.sessions.push(session);
        id
    }

    /// First call arms the board's delete; a second consecutive call removes
    /// the board and its stored entries.
    pub fn request_delete(&mut self, id: &BoardId) -> Option<DeleteRequest> {
        let session = find_mut(&mut self.sessions, id)?;
        let request = session.delete.request();
        if request == DeleteRequest::Confirmed {
            self.collection.remove_board(self.store.as_mut(), id);
            self.sessions.retain(|session| &session.id != id);
        }
        Some(request)
    }

    pub fn cancel_delete(&mut self, id: &BoardId) -> bool {
        find_mut(&mut self.sessions, id).is_some_and(|session| session.delete.cancel())
    }

    pub fn delete_state(&self, id: &BoardId) -> Option<DeleteState> {
        find(&self.sessions, id).map(|session| session.delete.state())
    }

    pub fn set_title(&mut self, id: &BoardId, title: impl Into<String>) -> bool {
        let Some(session) = find_mut(&mut self.sessions, id) else {
            return false;
        };
        session.board.set_title(self.store.as_mut(), title);
        true
    }

    pub fn set_theme_color(&mut self, id: &BoardId, color: impl Into<ThemeColor>) -> bool {
        let Some(session) = find_mut(&mut self.sessions, id) else {
            return false;
        };
        session.board.set_theme_color(self.store.as_mut(), color.into());
        true
    }

    pub fn add_task(&mut self, id: &BoardId, text: &str) -> Option<TaskId> {
        let session = find_mut(&mut self.sessions, id)?;
        let task_id = session.board.add_task(self.store.as_mut(), text)?;
        session.edits.insert(task_id, EditSession::fresh(task_id));
        Some(task_id)
    }

    pub fn toggle_task(&mut self, id: &BoardId, task_id: TaskId) -> bool {
        find_mut(&mut self.sessions, id).is_some_and(|session| {
            session
                .board
                .toggle_completion(self.store.as_mut(), task_id)
        })
    }

    /// Enter edit mode for a task; refused for completed tasks.
    pub fn begin_edit(&mut self, id: &BoardId, task_id: TaskId) -> bool {
        let Some(session) = find_mut(&mut self.sessions, id) else {
            return false;
        };
        let Some(task) = session.board.task(task_id).cloned() else {
            return false;
        };
        session
            .edit_session(task_id)
            .is_some_and(|edit| edit.begin(&task))
    }

    pub fn change_draft(&mut self, id: &BoardId, task_id: TaskId, text: impl Into<String>) -> bool {
        find_mut(&mut self.sessions, id)
            .and_then(|session| session.edit_session(task_id))
            .is_some_and(|edit| edit.change_draft(text))
    }

    /// Commit the current draft. Returns whether it was saved; an empty
    /// draft ends the edit without touching the task.
    pub fn submit_edit(&mut self, id: &BoardId, task_id: TaskId) -> bool {
        let Some(session) = find_mut(&mut self.sessions, id) else {
            return false;
        };
        let Some(edit) = session.edits.get_mut(&task_id) else {
            return false;
        };
        edit.submit(&mut session.board, self.store.as_mut())
    }

    pub fn cancel_edit(&mut self, id: &BoardId, task_id: TaskId) -> bool {
        find_mut(&mut self.sessions, id)
            .and_then(|session| session.edits.get_mut(&task_id))
            .is_some_and(|edit| edit.cancel())
    }

    pub fn delete_task(&mut self, id: &BoardId, task_id: TaskId) -> bool {
        let Some(session) = find_mut(&mut self.sessions, id) else {
            return false;
        };
        session.edits.remove(&task_id);
        session.board.delete_task(self.store.as_mut(), task_id)
    }

    /// Edit state of a task, `None` when the board or task is unknown.
    pub fn edit_state(&self, id: &BoardId, task_id: TaskId) -> Option<EditState> {
        let session = find(&self.sessions, id)?;
        session.board.task(task_id)?;
        Some(
            session
                .edits
                .get(&task_id)
                .map(|edit| edit.state().clone())
                .unwrap_or_default(),
        )
    }

    pub fn draft(&self, id: &BoardId, task_id: TaskId) -> Option<&str> {
        find(&self.sessions, id)?.edits.get(&task_id)?.draft()
    }

    /// Whether the task was created in this session and not yet edited.
    pub fn is_fresh(&self, id: &BoardId, task_id: TaskId) -> bool {
        find(&self.sessions, id)
            .and_then(|session| session.edits.get(&task_id))
            .is_some_and(EditSession::is_fresh)
    }
}
