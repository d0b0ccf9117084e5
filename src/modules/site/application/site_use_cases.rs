use std::sync::Arc;

use crate::site::application::use_cases::{
    get_assistant_instruction::IGetAssistantInstructionUseCase,
    get_site_content::IGetSiteContentUseCase,
    update_assistant_instruction::IUpdateAssistantInstructionUseCase, update_bio::IUpdateBioUseCase,
    update_profile::IUpdateProfileUseCase, update_social_link::IUpdateSocialLinkUseCase,
};

#[derive(Clone)]
pub struct SiteUseCases {
    pub get_content: Arc<dyn IGetSiteContentUseCase + Send + Sync>,
    pub update_bio: Arc<dyn IUpdateBioUseCase + Send + Sync>,
    pub update_social_link: Arc<dyn IUpdateSocialLinkUseCase + Send + Sync>,
    pub get_instruction: Arc<dyn IGetAssistantInstructionUseCase + Send + Sync>,
    pub update_instruction: Arc<dyn IUpdateAssistantInstructionUseCase + Send + Sync>,
    pub update_profile: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
}
