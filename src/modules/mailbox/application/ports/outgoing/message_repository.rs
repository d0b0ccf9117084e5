// src/modules/mailbox/application/ports/outgoing/message_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::mailbox::application::domain::entities::{
    ContactMessage, IncomingMessage, MessagePriority,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum MessageRepositoryError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Mailbox storage port. Targeted mutations report whether anything matched;
/// a miss is the store's silent no-op, never an error.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Synthesizes id, timestamp and fresh-message defaults, then prepends.
    async fn add_message(
        &self,
        incoming: IncomingMessage,
    ) -> Result<ContactMessage, MessageRepositoryError>;

    async fn all_messages(&self) -> Result<Vec<ContactMessage>, MessageRepositoryError>;

    async fn mark_read(&self, id: Uuid) -> Result<bool, MessageRepositoryError>;

    async fn archive(&self, id: Uuid) -> Result<bool, MessageRepositoryError>;

    async fn set_priority(
        &self,
        id: Uuid,
        priority: MessagePriority,
    ) -> Result<bool, MessageRepositoryError>;

    async fn remove(&self, id: Uuid) -> Result<bool, MessageRepositoryError>;
}
