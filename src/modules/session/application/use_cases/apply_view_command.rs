use async_trait::async_trait;
use std::sync::Arc;

use crate::session::application::domain::entities::{ViewCommand, ViewState};
use crate::session::application::ports::outgoing::{
    SessionStateRepository, SessionStateRepositoryError,
};

#[derive(Debug, Clone)]
pub enum ApplyViewCommandError {
    RepositoryError(String),
}

/// Applies one closed view command and returns the resulting flags.
#[async_trait]
pub trait IApplyViewCommandUseCase: Send + Sync {
    async fn execute(&self, command: ViewCommand) -> Result<ViewState, ApplyViewCommandError>;
}

pub struct ApplyViewCommandService {
    session_state: Arc<dyn SessionStateRepository>,
}

impl ApplyViewCommandService {
    pub fn new(session_state: Arc<dyn SessionStateRepository>) -> Self {
        Self { session_state }
    }
}

#[async_trait]
impl IApplyViewCommandUseCase for ApplyViewCommandService {
    async fn execute(&self, command: ViewCommand) -> Result<ViewState, ApplyViewCommandError> {
        self.session_state
            .apply_view_command(command)
            .await
            .map_err(|SessionStateRepositoryError::StorageError(msg)| {
                ApplyViewCommandError::RepositoryError(msg)
            })
    }
}
