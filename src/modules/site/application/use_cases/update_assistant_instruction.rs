use async_trait::async_trait;

use crate::site::application::ports::outgoing::{ContentRepository, ContentRepositoryError};

#[derive(Debug, Clone)]
pub enum UpdateAssistantInstructionError {
    RepositoryError(String),
}

/// Overwrites the chat assistant's system instruction. The bridge reads the
/// current value on every call, so the edit is live immediately.
#[async_trait]
pub trait IUpdateAssistantInstructionUseCase: Send + Sync {
    async fn execute(&self, text: String) -> Result<(), UpdateAssistantInstructionError>;
}

pub struct UpdateAssistantInstructionService<R>
where
    R: ContentRepository,
{
    content_repository: R,
}

impl<R> UpdateAssistantInstructionService<R>
where
    R: ContentRepository,
{
    pub fn new(content_repository: R) -> Self {
        Self { content_repository }
    }
}

#[async_trait]
impl<R> IUpdateAssistantInstructionUseCase for UpdateAssistantInstructionService<R>
where
    R: ContentRepository + Send + Sync,
{
    async fn execute(&self, text: String) -> Result<(), UpdateAssistantInstructionError> {
        self.content_repository
            .set_assistant_instruction(text)
            .await
            .map_err(|ContentRepositoryError::StorageError(msg)| {
                UpdateAssistantInstructionError::RepositoryError(msg)
            })
    }
}
