use async_trait::async_trait;
use std::sync::Arc;

use crate::session::application::ports::outgoing::{
    SessionStateRepository, SessionStateRepositoryError,
};
use crate::session::application::use_cases::submit_access_key::GateTimers;

#[derive(Debug, Clone)]
pub enum LogoutError {
    RepositoryError(String),
}

/// Deauthenticate and leave the admin view. Also cancels a pending success
/// commit so a logout issued mid-staging cannot be re-authenticated by the
/// leftover timer.
#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), LogoutError>;
}

pub struct LogoutService {
    session_state: Arc<dyn SessionStateRepository>,
    timers: GateTimers,
}

impl LogoutService {
    pub fn new(session_state: Arc<dyn SessionStateRepository>, timers: GateTimers) -> Self {
        Self {
            session_state,
            timers,
        }
    }
}

#[async_trait]
impl ILogoutUseCase for LogoutService {
    async fn execute(&self) -> Result<(), LogoutError> {
        self.timers.cancel();

        self.session_state
            .logout()
            .await
            .map_err(|SessionStateRepositoryError::StorageError(msg)| {
                LogoutError::RepositoryError(msg)
            })
    }
}
