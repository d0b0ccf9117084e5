use async_trait::async_trait;
use std::fmt;

use crate::project::application::domain::entities::Project;
use crate::project::application::ports::outgoing::NewProjectData;

#[derive(Debug, Clone)]
pub enum CreateProjectError {
    RepositoryError(String),
}

impl fmt::Display for CreateProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateProjectError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, data: NewProjectData) -> Result<Project, CreateProjectError>;
}
