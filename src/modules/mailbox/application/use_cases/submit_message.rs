use async_trait::async_trait;

use crate::mailbox::application::domain::entities::{ContactMessage, IncomingMessage};
use crate::mailbox::application::ports::outgoing::{MessageRepository, MessageRepositoryError};

#[derive(Debug, Clone)]
pub enum SubmitMessageError {
    RepositoryError(String),
}

/// An interface for the public contact-form submission
#[async_trait]
pub trait ISubmitMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        incoming: IncomingMessage,
    ) -> Result<ContactMessage, SubmitMessageError>;
}

pub struct SubmitMessageService<R>
where
    R: MessageRepository,
{
    message_repository: R,
}

impl<R> SubmitMessageService<R>
where
    R: MessageRepository,
{
    pub fn new(message_repository: R) -> Self {
        Self { message_repository }
    }
}

#[async_trait]
impl<R> ISubmitMessageUseCase for SubmitMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        incoming: IncomingMessage,
    ) -> Result<ContactMessage, SubmitMessageError> {
        self.message_repository
            .add_message(incoming)
            .await
            .map_err(|MessageRepositoryError::StorageError(msg)| {
                SubmitMessageError::RepositoryError(msg)
            })
    }
}
