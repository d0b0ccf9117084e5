use std::sync::Arc;

use crate::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectTagsUseCase, GetProjectsUseCase,
    GetRelatedProjectsUseCase, GetSingleProjectUseCase, UpdateProjectUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub create: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProjectUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleProjectUseCase + Send + Sync>,
    pub get_related: Arc<dyn GetRelatedProjectsUseCase + Send + Sync>,
    pub get_tags: Arc<dyn GetProjectTagsUseCase + Send + Sync>,
}
