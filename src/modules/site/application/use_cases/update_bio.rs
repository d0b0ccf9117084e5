use async_trait::async_trait;

use crate::site::application::ports::outgoing::{ContentRepository, ContentRepositoryError};

#[derive(Debug, Clone)]
pub enum UpdateBioError {
    RepositoryError(String),
}

/// Unconditional overwrite of the bio text.
#[async_trait]
pub trait IUpdateBioUseCase: Send + Sync {
    async fn execute(&self, text: String) -> Result<(), UpdateBioError>;
}

pub struct UpdateBioService<R>
where
    R: ContentRepository,
{
    content_repository: R,
}

impl<R> UpdateBioService<R>
where
    R: ContentRepository,
{
    pub fn new(content_repository: R) -> Self {
        Self { content_repository }
    }
}

#[async_trait]
impl<R> IUpdateBioUseCase for UpdateBioService<R>
where
    R: ContentRepository + Send + Sync,
{
    async fn execute(&self, text: String) -> Result<(), UpdateBioError> {
        self.content_repository
            .set_bio(text)
            .await
            .map_err(|ContentRepositoryError::StorageError(msg)| {
                UpdateBioError::RepositoryError(msg)
            })
    }
}
