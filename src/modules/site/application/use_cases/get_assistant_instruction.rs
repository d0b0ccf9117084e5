use async_trait::async_trait;

use crate::site::application::ports::outgoing::{ContentRepository, ContentRepositoryError};

#[derive(Debug, Clone)]
pub enum GetAssistantInstructionError {
    QueryFailed(String),
}

#[async_trait]
pub trait IGetAssistantInstructionUseCase: Send + Sync {
    async fn execute(&self) -> Result<String, GetAssistantInstructionError>;
}

pub struct GetAssistantInstructionService<R>
where
    R: ContentRepository,
{
    content_repository: R,
}

impl<R> GetAssistantInstructionService<R>
where
    R: ContentRepository,
{
    pub fn new(content_repository: R) -> Self {
        Self { content_repository }
    }
}

#[async_trait]
impl<R> IGetAssistantInstructionUseCase for GetAssistantInstructionService<R>
where
    R: ContentRepository + Send + Sync,
{
    async fn execute(&self) -> Result<String, GetAssistantInstructionError> {
        self.content_repository
            .assistant_instruction()
            .await
            .map_err(|ContentRepositoryError::StorageError(msg)| {
                GetAssistantInstructionError::QueryFailed(msg)
            })
    }
}
