use async_trait::async_trait;

use crate::skill::application::ports::outgoing::{SkillRepository, SkillRepositoryError};

#[derive(Debug, Clone)]
pub enum UpdateSkillLevelError {
    RepositoryError(String),
}

/// In-place level overwrite. The 0-100 range is a documented contract, not
/// an enforced one; the store takes whatever arrives, as the source did.
#[async_trait]
pub trait IUpdateSkillLevelUseCase: Send + Sync {
    async fn execute(&self, name: &str, level: u8) -> Result<bool, UpdateSkillLevelError>;
}

pub struct UpdateSkillLevelService<R>
where
    R: SkillRepository,
{
    skill_repository: R,
}

impl<R> UpdateSkillLevelService<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repository: R) -> Self {
        Self { skill_repository }
    }
}

#[async_trait]
impl<R> IUpdateSkillLevelUseCase for UpdateSkillLevelService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, name: &str, level: u8) -> Result<bool, UpdateSkillLevelError> {
        self.skill_repository
            .set_level(name, level)
            .await
            .map_err(|SkillRepositoryError::StorageError(msg)| {
                UpdateSkillLevelError::RepositoryError(msg)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::application::domain::entities::Skill;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingSkillRepo {
        calls: Mutex<Vec<(String, u8)>>,
        matched: bool,
    }

    #[async_trait]
    impl SkillRepository for RecordingSkillRepo {
        async fn all_skills(&self) -> Result<Vec<Skill>, SkillRepositoryError> {
            unimplemented!("not needed for update tests")
        }

        async fn set_level(&self, name: &str, level: u8) -> Result<bool, SkillRepositoryError> {
            self.calls.lock().unwrap().push((name.to_string(), level));
            Ok(self.matched)
        }
    }

    #[tokio::test]
    async fn test_passes_the_level_through_unclamped() {
        let service = UpdateSkillLevelService::new(RecordingSkillRepo {
            calls: Mutex::new(vec![]),
            matched: true,
        });

        // 250 is out of the documented range; the store takes it anyway.
        assert!(service.execute("React", 250).await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_skill_is_a_no_op() {
        let service = UpdateSkillLevelService::new(RecordingSkillRepo {
            calls: Mutex::new(vec![]),
            matched: false,
        });

        assert!(!service.execute("Fortran", 10).await.unwrap());
    }
}
