use async_trait::async_trait;

use crate::project::application::domain::entities::Project;
use crate::project::application::ports::incoming::use_cases::{
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::project::application::ports::outgoing::{ProjectRepository, ProjectRepositoryError};

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, project: Project) -> Result<bool, UpdateProjectError> {
        self.project_repository
            .replace_project(project)
            .await
            .map_err(|ProjectRepositoryError::StorageError(msg)| {
                UpdateProjectError::RepositoryError(msg)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StaticProjectRepo {
        matched: bool,
    }

    #[async_trait]
    impl ProjectRepository for StaticProjectRepo {
        async fn insert_project(&self, _: Project) -> Result<(), ProjectRepositoryError> {
            unimplemented!("not needed for update tests")
        }

        async fn replace_project(&self, _: Project) -> Result<bool, ProjectRepositoryError> {
            Ok(self.matched)
        }

        async fn remove_project(&self, _: &str) -> Result<bool, ProjectRepositoryError> {
            unimplemented!("not needed for update tests")
        }
    }

    fn sample_project() -> Project {
        Project {
            id: "1".to_string(),
            title: "Title".to_string(),
            description: String::new(),
            full_description: String::new(),
            challenges: vec![],
            solution: String::new(),
            tags: vec![],
            image: String::new(),
            live_link: String::new(),
            source_link: String::new(),
        }
    }

    #[tokio::test]
    async fn test_reports_a_matched_replace() {
        let service = UpdateProjectService::new(StaticProjectRepo { matched: true });

        assert!(service.execute(sample_project()).await.unwrap());
    }

    #[tokio::test]
    async fn test_a_missing_id_is_a_no_op_not_an_error() {
        let service = UpdateProjectService::new(StaticProjectRepo { matched: false });

        assert!(!service.execute(sample_project()).await.unwrap());
    }
}
