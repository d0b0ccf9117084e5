use async_trait::async_trait;
use uuid::Uuid;

use crate::project::application::domain::entities::Project;
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase,
};
use crate::project::application::ports::outgoing::{
    NewProjectData, ProjectRepository, ProjectRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, data: NewProjectData) -> Result<Project, CreateProjectError> {
        let project = Project {
            id: data.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            title: data.title,
            description: data.description,
            full_description: data.full_description,
            challenges: data.challenges,
            solution: data.solution,
            tags: data.tags,
            image: data.image,
            live_link: data.live_link,
            source_link: data.source_link,
        };

        self.project_repository
            .insert_project(project.clone())
            .await
            .map_err(|ProjectRepositoryError::StorageError(msg)| {
                CreateProjectError::RepositoryError(msg)
            })?;

        Ok(project)
    }
}
