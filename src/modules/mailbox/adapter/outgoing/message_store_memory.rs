use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::mailbox::application::domain::entities::{
    ContactMessage, IncomingMessage, MessagePriority,
};
use crate::mailbox::application::ports::outgoing::{MessageRepository, MessageRepositoryError};
use crate::shared::store::MemoryStore;

#[derive(Clone)]
pub struct MessageStoreMemory {
    store: Arc<MemoryStore>,
}

impl MessageStoreMemory {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MessageRepository for MessageStoreMemory {
    async fn add_message(
        &self,
        incoming: IncomingMessage,
    ) -> Result<ContactMessage, MessageRepositoryError> {
        Ok(self.store.add_message(incoming).await)
    }

    async fn all_messages(&self) -> Result<Vec<ContactMessage>, MessageRepositoryError> {
        Ok(self.store.messages().await)
    }

    async fn mark_read(&self, id: Uuid) -> Result<bool, MessageRepositoryError> {
        Ok(self.store.mark_message_read(id).await)
    }

    async fn archive(&self, id: Uuid) -> Result<bool, MessageRepositoryError> {
        Ok(self.store.archive_message(id).await)
    }

    async fn set_priority(
        &self,
        id: Uuid,
        priority: MessagePriority,
    ) -> Result<bool, MessageRepositoryError> {
        Ok(self.store.update_message_priority(id, priority).await)
    }

    async fn remove(&self, id: Uuid) -> Result<bool, MessageRepositoryError> {
        Ok(self.store.delete_message(id).await)
    }
}
