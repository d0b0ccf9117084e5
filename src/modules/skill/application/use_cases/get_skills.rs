use async_trait::async_trait;

use crate::skill::application::domain::entities::Skill;
use crate::skill::application::ports::outgoing::{SkillRepository, SkillRepositoryError};

#[derive(Debug, Clone)]
pub enum GetSkillsError {
    QueryFailed(String),
}

#[async_trait]
pub trait IGetSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Skill>, GetSkillsError>;
}

pub struct GetSkillsService<R>
where
    R: SkillRepository,
{
    skill_repository: R,
}

impl<R> GetSkillsService<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repository: R) -> Self {
        Self { skill_repository }
    }
}

#[async_trait]
impl<R> IGetSkillsUseCase for GetSkillsService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Skill>, GetSkillsError> {
        self.skill_repository
            .all_skills()
            .await
            .map_err(|SkillRepositoryError::StorageError(msg)| GetSkillsError::QueryFailed(msg))
    }
}
