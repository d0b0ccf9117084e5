// src/modules/site/application/ports/outgoing/content_repository.rs

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::site::application::domain::entities::OperatorProfile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentRepositoryError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Singleton site content: bio, social links, operator profile and the chat
/// assistant's system instruction. All writes are unconditional overwrites.
///
/// The assistant module reads the instruction through this port at call time
/// so an admin edit applies to the very next chat message.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn bio(&self) -> Result<String, ContentRepositoryError>;

    async fn set_bio(&self, text: String) -> Result<(), ContentRepositoryError>;

    async fn assistant_instruction(&self) -> Result<String, ContentRepositoryError>;

    async fn set_assistant_instruction(&self, text: String) -> Result<(), ContentRepositoryError>;

    async fn social_links(&self) -> Result<BTreeMap<String, String>, ContentRepositoryError>;

    /// Keyed upsert by platform.
    async fn upsert_social_link(
        &self,
        platform: String,
        url: String,
    ) -> Result<(), ContentRepositoryError>;

    async fn profile(&self) -> Result<OperatorProfile, ContentRepositoryError>;

    /// Overwrites everything except `last_login`, which only the access gate
    /// stamps.
    async fn set_profile(
        &self,
        user: String,
        role: String,
        avatar: String,
    ) -> Result<OperatorProfile, ContentRepositoryError>;
}
