use async_trait::async_trait;

use crate::mailbox::application::domain::entities::{partition, ContactMessage, MessageView};
use crate::mailbox::application::ports::outgoing::{MessageRepository, MessageRepositoryError};

#[derive(Debug, Clone)]
pub enum GetMessagesError {
    QueryFailed(String),
}

/// One partition of the mailbox: active or archived, never both.
#[async_trait]
pub trait IGetMessagesUseCase: Send + Sync {
    async fn execute(&self, view: MessageView) -> Result<Vec<ContactMessage>, GetMessagesError>;
}

pub struct GetMessagesService<R>
where
    R: MessageRepository,
{
    message_repository: R,
}

impl<R> GetMessagesService<R>
where
    R: MessageRepository,
{
    pub fn new(message_repository: R) -> Self {
        Self { message_repository }
    }
}

#[async_trait]
impl<R> IGetMessagesUseCase for GetMessagesService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self, view: MessageView) -> Result<Vec<ContactMessage>, GetMessagesError> {
        let messages = self
            .message_repository
            .all_messages()
            .await
            .map_err(|MessageRepositoryError::StorageError(msg)| {
                GetMessagesError::QueryFailed(msg)
            })?;

        Ok(partition(&messages, view))
    }
}
