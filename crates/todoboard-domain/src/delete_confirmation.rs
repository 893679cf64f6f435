/// Two-step delete gesture for a board: the first request arms, the second
/// confirms, and cancel disarms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteState {
    #[default]
    Idle,
    PendingConfirm,
}

/// What a delete request resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteRequest {
    /// First request: nothing removed yet.
    Armed,
    /// Second consecutive request: the board must be removed.
    Confirmed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteConfirmation {
    state: DeleteState,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DeleteState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == DeleteState::PendingConfirm
    }

    pub fn request(&mut self) -> DeleteRequest {
        match self.state {
            DeleteState::Idle => {
                self.state = DeleteState::PendingConfirm;
                DeleteRequest::Armed
            }
            DeleteState::PendingConfirm => DeleteRequest::Confirmed,
        }
    }

    pub fn cancel(&mut self) -> bool {
        let was_pending = self.is_pending();
        self.state = DeleteState::Idle;
        was_pending
    }
}
