// src/modules/skill/application/ports/outgoing/skill_repository.rs

use async_trait::async_trait;

use crate::skill::application::domain::entities::Skill;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Skills are a fixed roster mutated in place by level; nothing creates or
/// deletes them at runtime.
#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn all_skills(&self) -> Result<Vec<Skill>, SkillRepositoryError>;

    /// Blind overwrite, no clamping. `Ok(false)` when the name is unknown.
    async fn set_level(&self, name: &str, level: u8) -> Result<bool, SkillRepositoryError>;
}
