use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::site::application::domain::entities::OperatorProfile;
use crate::site::application::ports::outgoing::{ContentRepository, ContentRepositoryError};

/// Everything the public landing page needs in one read.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub bio: String,
    pub social_links: BTreeMap<String, String>,
    pub profile: OperatorProfile,
}

#[derive(Debug, Clone)]
pub enum GetSiteContentError {
    QueryFailed(String),
}

#[async_trait]
pub trait IGetSiteContentUseCase: Send + Sync {
    async fn execute(&self) -> Result<SiteContent, GetSiteContentError>;
}

pub struct GetSiteContentService<R>
where
    R: ContentRepository,
{
    content_repository: R,
}

impl<R> GetSiteContentService<R>
where
    R: ContentRepository,
{
    pub fn new(content_repository: R) -> Self {
        Self { content_repository }
    }
}

#[async_trait]
impl<R> IGetSiteContentUseCase for GetSiteContentService<R>
where
    R: ContentRepository + Send + Sync,
{
    async fn execute(&self) -> Result<SiteContent, GetSiteContentError> {
        let map_err = |ContentRepositoryError::StorageError(msg)| {
            GetSiteContentError::QueryFailed(msg)
        };

        Ok(SiteContent {
            bio: self.content_repository.bio().await.map_err(map_err)?,
            social_links: self
                .content_repository
                .social_links()
                .await
                .map_err(map_err)?,
            profile: self.content_repository.profile().await.map_err(map_err)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use maplit::btreemap;

    struct FixedContentRepo;

    #[async_trait]
    impl ContentRepository for FixedContentRepo {
        async fn bio(&self) -> Result<String, ContentRepositoryError> {
            Ok("bio text".to_string())
        }

        async fn set_bio(&self, _: String) -> Result<(), ContentRepositoryError> {
            unimplemented!("read-only fixture")
        }

        async fn assistant_instruction(&self) -> Result<String, ContentRepositoryError> {
            unimplemented!("read-only fixture")
        }

        async fn set_assistant_instruction(
            &self,
            _: String,
        ) -> Result<(), ContentRepositoryError> {
            unimplemented!("read-only fixture")
        }

        async fn social_links(
            &self,
        ) -> Result<BTreeMap<String, String>, ContentRepositoryError> {
            Ok(btreemap! {
                "github".to_string() => "https://github.com/usman".to_string(),
            })
        }

        async fn upsert_social_link(
            &self,
            _: String,
            _: String,
        ) -> Result<(), ContentRepositoryError> {
            unimplemented!("read-only fixture")
        }

        async fn profile(&self) -> Result<OperatorProfile, ContentRepositoryError> {
            Ok(OperatorProfile {
                user: "Usman".to_string(),
                role: "Root Architect".to_string(),
                avatar: "a.png".to_string(),
                last_login: Utc::now(),
            })
        }

        async fn set_profile(
            &self,
            _: String,
            _: String,
            _: String,
        ) -> Result<OperatorProfile, ContentRepositoryError> {
            unimplemented!("read-only fixture")
        }
    }

    #[tokio::test]
    async fn test_site_content_is_assembled_from_all_three_reads() {
        let service = GetSiteContentService::new(FixedContentRepo);

        let content = service.execute().await.unwrap();

        assert_eq!(content.bio, "bio text");
        assert_eq!(
            content.social_links.get("github").unwrap(),
            "https://github.com/usman"
        );
        assert_eq!(content.profile.user, "Usman");
    }
}
