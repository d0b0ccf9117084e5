// src/modules/session/application/ports/outgoing/session_state_repository.rs

use async_trait::async_trait;

use crate::session::application::domain::entities::{GateStatus, ViewCommand, ViewState};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionStateRepositoryError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Gate status, the committed flag and the view flags as one port. There is
/// exactly one operator session in the whole process.
#[async_trait]
pub trait SessionStateRepository: Send + Sync {
    async fn gate_status(&self) -> Result<GateStatus, SessionStateRepositoryError>;

    async fn set_gate_status(&self, status: GateStatus)
        -> Result<(), SessionStateRepositoryError>;

    /// Flips the committed flag and stamps the profile's `last_login`.
    async fn commit_authentication(&self) -> Result<(), SessionStateRepositoryError>;

    /// Deauthenticate and leave the admin view.
    async fn logout(&self) -> Result<(), SessionStateRepositoryError>;

    async fn view(&self) -> Result<ViewState, SessionStateRepositoryError>;

    async fn apply_view_command(
        &self,
        command: ViewCommand,
    ) -> Result<ViewState, SessionStateRepositoryError>;

    /// Lock-free read of the committed flag.
    fn is_authenticated(&self) -> bool;
}
