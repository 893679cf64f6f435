use super::Command;
use crate::{BoardId, ThemeColor, Workspace};
use todoboard_core::TodoResult;

/// Create a new, empty board at the end of the collection
pub struct AddBoard;

impl Command for AddBoard {
    fn execute(&self, workspace: &mut Workspace) -> TodoResult<()> {
        workspace.add_board();
        Ok(())
    }

    fn description(&self) -> String {
        "Add board".to_string()
    }
}

/// Delete gesture: arms on the first dispatch, removes on the second
pub struct DeleteBoard {
    pub board_id: BoardId,
}

impl Command for DeleteBoard {
    fn execute(&self, workspace: &mut Workspace) -> TodoResult<()> {
        workspace.request_delete(&self.board_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete board {}", self.board_id)
    }
}

pub struct CancelDeleteBoard {
    pub board_id: BoardId,
}

impl Command for CancelDeleteBoard {
    fn execute(&self, workspace: &mut Workspace) -> TodoResult<()> {
        workspace.cancel_delete(&self.board_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Cancel delete of board {}", self.board_id)
    }
}

pub struct SetBoardTitle {
    pub board_id: BoardId,
    pub title: String,
}

impl Command for SetBoardTitle {
    fn execute(&self, workspace: &mut Workspace) -> TodoResult<()> {
        workspace.set_title(&self.board_id, self.title.clone());
        Ok(())
    }

    fn description(&self) -> String {
        format!("Set title of board {}", self.board_id)
    }
}

/// Change the board color; values outside the palette are kept as given
pub struct SetBoardColor {
    pub board_id: BoardId,
    pub color: ThemeColor,
}

impl Command for SetBoardColor {
    fn execute(&self, workspace: &mut Workspace) -> TodoResult<()> {
        workspace.set_theme_color(&self.board_id, self.color.clone());
        Ok(())
    }

    fn description(&self) -> String {
        format!("Set color of board {} to {}", self.board_id, self.color)
    }
}
