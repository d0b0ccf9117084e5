use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::session::application::domain::entities::{GateStatus, ViewState};
use crate::session::application::ports::outgoing::{
    SessionStateRepository, SessionStateRepositoryError,
};
use crate::site::application::domain::entities::OperatorProfile;
use crate::site::application::ports::outgoing::{ContentRepository, ContentRepositoryError};

/// What the client needs to render either face of the site: gate state,
/// committed flag, view flags and the operator header.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub authenticated: bool,
    pub gate_status: GateStatus,
    pub view: ViewState,
    pub profile: OperatorProfile,
}

#[derive(Debug, Clone)]
pub enum GetSessionError {
    QueryFailed(String),
}

#[async_trait]
pub trait IGetSessionUseCase: Send + Sync {
    async fn execute(&self) -> Result<SessionSnapshot, GetSessionError>;
}

pub struct GetSessionService<C>
where
    C: ContentRepository,
{
    session_state: Arc<dyn SessionStateRepository>,
    content_repository: C,
}

impl<C> GetSessionService<C>
where
    C: ContentRepository,
{
    pub fn new(session_state: Arc<dyn SessionStateRepository>, content_repository: C) -> Self {
        Self {
            session_state,
            content_repository,
        }
    }
}

#[async_trait]
impl<C> IGetSessionUseCase for GetSessionService<C>
where
    C: ContentRepository + Send + Sync,
{
    async fn execute(&self) -> Result<SessionSnapshot, GetSessionError> {
        let gate_status: GateStatus = self
            .session_state
            .gate_status()
            .await
            .map_err(|SessionStateRepositoryError::StorageError(msg)| {
                GetSessionError::QueryFailed(msg)
            })?;

        let view: ViewState = self
            .session_state
            .view()
            .await
            .map_err(|SessionStateRepositoryError::StorageError(msg)| {
                GetSessionError::QueryFailed(msg)
            })?;

        let profile = self
            .content_repository
            .profile()
            .await
            .map_err(|ContentRepositoryError::StorageError(msg)| {
                GetSessionError::QueryFailed(msg)
            })?;

        Ok(SessionSnapshot {
            authenticated: self.session_state.is_authenticated(),
            gate_status,
            view,
            profile,
        })
    }
}
