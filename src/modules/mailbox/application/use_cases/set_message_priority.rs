use async_trait::async_trait;
use uuid::Uuid;

use crate::mailbox::application::domain::entities::MessagePriority;
use crate::mailbox::application::ports::outgoing::{MessageRepository, MessageRepositoryError};

#[derive(Debug, Clone)]
pub enum SetMessagePriorityError {
    RepositoryError(String),
}

#[async_trait]
pub trait ISetMessagePriorityUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        priority: MessagePriority,
    ) -> Result<bool, SetMessagePriorityError>;
}

pub struct SetMessagePriorityService<R>
where
    R: MessageRepository,
{
    message_repository: R,
}

impl<R> SetMessagePriorityService<R>
where
    R: MessageRepository,
{
    pub fn new(message_repository: R) -> Self {
        Self { message_repository }
    }
}

#[async_trait]
impl<R> ISetMessagePriorityUseCase for SetMessagePriorityService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        priority: MessagePriority,
    ) -> Result<bool, SetMessagePriorityError> {
        self.message_repository
            .set_priority(id, priority)
            .await
            .map_err(|MessageRepositoryError::StorageError(msg)| {
                SetMessagePriorityError::RepositoryError(msg)
            })
    }
}
