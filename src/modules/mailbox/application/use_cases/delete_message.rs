use async_trait::async_trait;
use uuid::Uuid;

use crate::mailbox::application::ports::outgoing::{MessageRepository, MessageRepositoryError};

#[derive(Debug, Clone)]
pub enum DeleteMessageError {
    RepositoryError(String),
}

/// Permanent purge. `Ok(false)` when the mailbox never held the id.
#[async_trait]
pub trait IDeleteMessageUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<bool, DeleteMessageError>;
}

pub struct DeleteMessageService<R>
where
    R: MessageRepository,
{
    message_repository: R,
}

impl<R> DeleteMessageService<R>
where
    R: MessageRepository,
{
    pub fn new(message_repository: R) -> Self {
        Self { message_repository }
    }
}

#[async_trait]
impl<R> IDeleteMessageUseCase for DeleteMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<bool, DeleteMessageError> {
        self.message_repository
            .remove(id)
            .await
            .map_err(|MessageRepositoryError::StorageError(msg)| {
                DeleteMessageError::RepositoryError(msg)
            })
    }
}
