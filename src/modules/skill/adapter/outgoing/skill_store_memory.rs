use async_trait::async_trait;
use std::sync::Arc;

use crate::shared::store::MemoryStore;
use crate::skill::application::domain::entities::Skill;
use crate::skill::application::ports::outgoing::{SkillRepository, SkillRepositoryError};

#[derive(Clone)]
pub struct SkillStoreMemory {
    store: Arc<MemoryStore>,
}

impl SkillStoreMemory {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SkillRepository for SkillStoreMemory {
    async fn all_skills(&self) -> Result<Vec<Skill>, SkillRepositoryError> {
        Ok(self.store.skills().await)
    }

    async fn set_level(&self, name: &str, level: u8) -> Result<bool, SkillRepositoryError> {
        Ok(self.store.update_skill_level(name, level).await)
    }
}
