use super::Command;
use crate::{BoardId, TaskId, Workspace};
use todoboard_core::TodoResult;

/// Append a task; empty text is ignored
pub struct AddTask {
    pub board_id: BoardId,
    pub text: String,
}

impl Command for AddTask {
    fn execute(&self, workspace: &mut Workspace) -> TodoResult<()> {
        workspace.add_task(&self.board_id, &self.text);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add task to board {}", self.board_id)
    }
}

pub struct ToggleTask {
    pub board_id: BoardId,
    pub task_id: TaskId,
}

impl Command for ToggleTask {
    fn execute(&self, workspace: &mut Workspace) -> TodoResult<()> {
        workspace.toggle_task(&self.board_id, self.task_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Toggle task {} on board {}", self.task_id, self.board_id)
    }
}

pub struct BeginEditTask {
    pub board_id: BoardId,
    pub task_id: TaskId,
}

impl Command for BeginEditTask {
    fn execute(&self, workspace: &mut Workspace) -> TodoResult<()> {
        if !workspace.begin_edit(&self.board_id, self.task_id) {
            tracing::debug!("Edit of task {} refused", self.task_id);
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Begin editing task {} on board {}", self.task_id, self.board_id)
    }
}

pub struct ChangeTaskDraft {
    pub board_id: BoardId,
    pub task_id: TaskId,
    pub text: String,
}

impl Command for ChangeTaskDraft {
    fn execute(&self, workspace: &mut Workspace) -> TodoResult<()> {
        workspace.change_draft(&self.board_id, self.task_id, self.text.clone());
        Ok(())
    }

    fn description(&self) -> String {
        format!("Change draft of task {} on board {}", self.task_id, self.board_id)
    }
}

/// Commit an edit's draft, replacing it with `text` first when given.
/// An empty draft cancels the edit instead
pub struct SubmitEditTask {
    pub board_id: BoardId,
    pub task_id: TaskId,
    pub text: Option<String>,
}

impl Command for SubmitEditTask {
    fn execute(&self, workspace: &mut Workspace) -> TodoResult<()> {
        if let Some(text) = &self.text {
            workspace.change_draft(&self.board_id, self.task_id, text.clone());
        }
        workspace.submit_edit(&self.board_id, self.task_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Submit edit of task {} on board {}", self.task_id, self.board_id)
    }
}

pub struct CancelEditTask {
    pub board_id: BoardId,
    pub task_id: TaskId,
}

impl Command for CancelEditTask {
    fn execute(&self, workspace: &mut Workspace) -> TodoResult<()> {
        workspace.cancel_edit(&self.board_id, self.task_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Cancel editing task {} on board {}", self.task_id, self.board_id)
    }
}

pub struct DeleteTask {
    pub board_id: BoardId,
    pub task_id: TaskId,
}

impl Command for DeleteTask {
    fn execute(&self, workspace: &mut Workspace) -> TodoResult<()> {
        workspace.delete_task(&self.board_id, self.task_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete task {} from board {}", self.task_id, self.board_id)
    }
}
