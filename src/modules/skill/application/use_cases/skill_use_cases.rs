use std::sync::Arc;

use crate::skill::application::use_cases::{
    get_skills::IGetSkillsUseCase, update_skill_level::IUpdateSkillLevelUseCase,
};

#[derive(Clone)]
pub struct SkillUseCases {
    pub get_list: Arc<dyn IGetSkillsUseCase + Send + Sync>,
    pub update_level: Arc<dyn IUpdateSkillLevelUseCase + Send + Sync>,
}
