use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::shared::store::MemoryStore;
use crate::site::application::domain::entities::OperatorProfile;
use crate::site::application::ports::outgoing::{ContentRepository, ContentRepositoryError};

#[derive(Clone)]
pub struct ContentStoreMemory {
    store: Arc<MemoryStore>,
}

impl ContentStoreMemory {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ContentRepository for ContentStoreMemory {
    async fn bio(&self) -> Result<String, ContentRepositoryError> {
        Ok(self.store.bio().await)
    }

    async fn set_bio(&self, text: String) -> Result<(), ContentRepositoryError> {
        self.store.update_bio(text).await;
        Ok(())
    }

    async fn assistant_instruction(&self) -> Result<String, ContentRepositoryError> {
        Ok(self.store.assistant_instruction().await)
    }

    async fn set_assistant_instruction(&self, text: String) -> Result<(), ContentRepositoryError> {
        self.store.update_assistant_instruction(text).await;
        Ok(())
    }

    async fn social_links(&self) -> Result<BTreeMap<String, String>, ContentRepositoryError> {
        Ok(self.store.social_links().await)
    }

    async fn upsert_social_link(
        &self,
        platform: String,
        url: String,
    ) -> Result<(), ContentRepositoryError> {
        self.store.update_social_link(platform, url).await;
        Ok(())
    }

    async fn profile(&self) -> Result<OperatorProfile, ContentRepositoryError> {
        Ok(self.store.profile().await)
    }

    async fn set_profile(
        &self,
        user: String,
        role: String,
        avatar: String,
    ) -> Result<OperatorProfile, ContentRepositoryError> {
        self.store.update_profile(user, role, avatar).await;
        Ok(self.store.profile().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_profile_update_keeps_last_login() {
        let repo = ContentStoreMemory::new(Arc::new(MemoryStore::new()));
        let before = repo.profile().await.unwrap();

        let updated = repo
            .set_profile(
                "Numan".to_string(),
                "Architect".to_string(),
                "n.png".to_string(),
            )
            .await
            .unwrap();

        assert_eq!(updated.user, "Numan");
        assert_eq!(updated.last_login, before.last_login);
    }

    #[tokio::test]
    async fn test_social_upsert_adds_new_platforms() {
        let repo = ContentStoreMemory::new(Arc::new(MemoryStore::empty()));

        repo.upsert_social_link("mastodon".to_string(), "https://hachyderm.io/@u".to_string())
            .await
            .unwrap();

        let links = repo.social_links().await.unwrap();
        assert_eq!(links.get("mastodon").unwrap(), "https://hachyderm.io/@u");
    }
}
