use async_trait::async_trait;
use std::sync::Arc;

use crate::session::application::domain::entities::{GateStatus, ViewCommand, ViewState};
use crate::session::application::ports::outgoing::{
    SessionStateRepository, SessionStateRepositoryError,
};
use crate::shared::store::MemoryStore;

#[derive(Clone)]
pub struct SessionStoreMemory {
    store: Arc<MemoryStore>,
}

impl SessionStoreMemory {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SessionStateRepository for SessionStoreMemory {
    async fn gate_status(&self) -> Result<GateStatus, SessionStateRepositoryError> {
        Ok(self.store.gate_status().await)
    }

    async fn set_gate_status(
        &self,
        status: GateStatus,
    ) -> Result<(), SessionStateRepositoryError> {
        self.store.set_gate_status(status).await;
        Ok(())
    }

    async fn commit_authentication(&self) -> Result<(), SessionStateRepositoryError> {
        self.store.set_authenticated(true);
        self.store.touch_last_login().await;
        Ok(())
    }

    async fn logout(&self) -> Result<(), SessionStateRepositoryError> {
        self.store.logout().await;
        Ok(())
    }

    async fn view(&self) -> Result<ViewState, SessionStateRepositoryError> {
        Ok(self.store.view().await)
    }

    async fn apply_view_command(
        &self,
        command: ViewCommand,
    ) -> Result<ViewState, SessionStateRepositoryError> {
        Ok(self.store.apply_view_command(command).await)
    }

    fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }
}
