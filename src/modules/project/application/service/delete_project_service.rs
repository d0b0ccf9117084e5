use async_trait::async_trait;

use crate::project::application::ports::incoming::use_cases::{
    DeleteProjectError, DeleteProjectUseCase,
};
use crate::project::application::ports::outgoing::{ProjectRepository, ProjectRepositoryError};

pub struct DeleteProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> DeleteProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, id: &str) -> Result<bool, DeleteProjectError> {
        self.project_repository
            .remove_project(id)
            .await
            .map_err(|ProjectRepositoryError::StorageError(msg)| {
                DeleteProjectError::RepositoryError(msg)
            })
    }
}
