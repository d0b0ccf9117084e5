use async_trait::async_trait;

use crate::site::application::domain::entities::OperatorProfile;
use crate::site::application::ports::outgoing::{ContentRepository, ContentRepositoryError};

#[derive(Debug, Clone)]
pub struct UpdateProfileData {
    pub user: String,
    pub role: String,
    pub avatar: String,
}

#[derive(Debug, Clone)]
pub enum UpdateProfileError {
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    async fn execute(&self, data: UpdateProfileData)
        -> Result<OperatorProfile, UpdateProfileError>;
}

pub struct UpdateProfileService<R>
where
    R: ContentRepository,
{
    content_repository: R,
}

impl<R> UpdateProfileService<R>
where
    R: ContentRepository,
{
    pub fn new(content_repository: R) -> Self {
        Self { content_repository }
    }
}

#[async_trait]
impl<R> IUpdateProfileUseCase for UpdateProfileService<R>
where
    R: ContentRepository + Send + Sync,
{
    async fn execute(
        &self,
        data: UpdateProfileData,
    ) -> Result<OperatorProfile, UpdateProfileError> {
        self.content_repository
            .set_profile(data.user, data.role, data.avatar)
            .await
            .map_err(|ContentRepositoryError::StorageError(msg)| {
                UpdateProfileError::RepositoryError(msg)
            })
    }
}
