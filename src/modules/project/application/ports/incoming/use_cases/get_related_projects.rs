use async_trait::async_trait;
use std::fmt;

use crate::project::application::domain::entities::Project;

#[derive(Debug, Clone)]
pub enum GetRelatedProjectsError {
    NotFound,
    QueryFailed(String),
}

impl fmt::Display for GetRelatedProjectsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetRelatedProjectsError::NotFound => write!(f, "project not found"),
            GetRelatedProjectsError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

/// Top related projects for a detail view, ranked by shared-tag count.
#[async_trait]
pub trait GetRelatedProjectsUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<Vec<Project>, GetRelatedProjectsError>;
}
