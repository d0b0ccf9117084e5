use async_trait::async_trait;
use uuid::Uuid;

use crate::mailbox::application::ports::outgoing::{MessageRepository, MessageRepositoryError};

#[derive(Debug, Clone)]
pub enum ArchiveMessageError {
    RepositoryError(String),
}

/// Moves a message into the archived partition. Idempotent; `Ok(false)` when
/// no message carries the id.
#[async_trait]
pub trait IArchiveMessageUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<bool, ArchiveMessageError>;
}

pub struct ArchiveMessageService<R>
where
    R: MessageRepository,
{
    message_repository: R,
}

impl<R> ArchiveMessageService<R>
where
    R: MessageRepository,
{
    pub fn new(message_repository: R) -> Self {
        Self { message_repository }
    }
}

#[async_trait]
impl<R> IArchiveMessageUseCase for ArchiveMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<bool, ArchiveMessageError> {
        self.message_repository
            .archive(id)
            .await
            .map_err(|MessageRepositoryError::StorageError(msg)| {
                ArchiveMessageError::RepositoryError(msg)
            })
    }
}
