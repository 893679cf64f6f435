use crate::Workspace;
use todoboard_core::TodoResult;

pub mod board_commands;
pub mod task_commands;

pub use board_commands::*;
pub use task_commands::*;

/// A single user intent coming from the presentation layer.
/// Commands run one at a time, each to completion, against the workspace.
pub trait Command: Send + Sync {
    /// Apply this intent. Unknown boards or tasks make it a no-op.
    fn execute(&self, workspace: &mut Workspace) -> TodoResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}
