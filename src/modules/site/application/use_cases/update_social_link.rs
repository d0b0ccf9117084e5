use async_trait::async_trait;

use crate::site::application::ports::outgoing::{ContentRepository, ContentRepositoryError};

#[derive(Debug, Clone)]
pub enum UpdateSocialLinkError {
    RepositoryError(String),
}

/// Keyed upsert; no URL validation, matching the source's forms.
#[async_trait]
pub trait IUpdateSocialLinkUseCase: Send + Sync {
    async fn execute(&self, platform: String, url: String) -> Result<(), UpdateSocialLinkError>;
}

pub struct UpdateSocialLinkService<R>
where
    R: ContentRepository,
{
    content_repository: R,
}

impl<R> UpdateSocialLinkService<R>
where
    R: ContentRepository,
{
    pub fn new(content_repository: R) -> Self {
        Self { content_repository }
    }
}

#[async_trait]
impl<R> IUpdateSocialLinkUseCase for UpdateSocialLinkService<R>
where
    R: ContentRepository + Send + Sync,
{
    async fn execute(&self, platform: String, url: String) -> Result<(), UpdateSocialLinkError> {
        self.content_repository
            .upsert_social_link(platform, url)
            .await
            .map_err(|ContentRepositoryError::StorageError(msg)| {
                UpdateSocialLinkError::RepositoryError(msg)
            })
    }
}
