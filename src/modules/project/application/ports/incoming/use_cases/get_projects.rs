use async_trait::async_trait;
use std::fmt;

use crate::project::application::domain::entities::Project;

/// Gallery filter: an optional tag (absent or `"All"` matches everything)
/// and a free-text query matched against titles and tags.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub tag: Option<String>,
    pub query: String,
}

#[derive(Debug, Clone)]
pub enum GetProjectsError {
    QueryFailed(String),
}

impl fmt::Display for GetProjectsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetProjectsError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self, filter: ProjectFilter) -> Result<Vec<Project>, GetProjectsError>;
}
