pub mod board;
pub mod collection;
pub mod commands;
pub mod delete_confirmation;
pub mod edit_session;
mod storage;
pub mod task;
pub mod theme;
pub mod workspace;

pub use board::{Board, BoardId};
pub use collection::{BoardCollection, BoardIdentity, COLLECTION_KEY};
pub use delete_confirmation::{DeleteConfirmation, DeleteRequest, DeleteState};
pub use edit_session::{EditSession, EditState};
pub use task::{TaskId, TaskIdGenerator, TaskRecord};
pub use theme::ThemeColor;
pub use workspace::Workspace;
