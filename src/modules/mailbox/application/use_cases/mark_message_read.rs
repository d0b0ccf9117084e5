use async_trait::async_trait;
use uuid::Uuid;

use crate::mailbox::application::ports::outgoing::{MessageRepository, MessageRepositoryError};

#[derive(Debug, Clone)]
pub enum MarkMessageReadError {
    RepositoryError(String),
}

/// `Ok(false)` when no message carries the id.
#[async_trait]
pub trait IMarkMessageReadUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<bool, MarkMessageReadError>;
}

pub struct MarkMessageReadService<R>
where
    R: MessageRepository,
{
    message_repository: R,
}

impl<R> MarkMessageReadService<R>
where
    R: MessageRepository,
{
    pub fn new(message_repository: R) -> Self {
        Self { message_repository }
    }
}

#[async_trait]
impl<R> IMarkMessageReadUseCase for MarkMessageReadService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<bool, MarkMessageReadError> {
        self.message_repository
            .mark_read(id)
            .await
            .map_err(|MessageRepositoryError::StorageError(msg)| {
                MarkMessageReadError::RepositoryError(msg)
            })
    }
}
