use async_trait::async_trait;
use std::fmt;

use crate::project::application::domain::entities::Project;

#[derive(Debug, Clone)]
pub enum UpdateProjectError {
    RepositoryError(String),
}

impl fmt::Display for UpdateProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateProjectError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

/// Whole-entity replace. `Ok(false)` means nothing matched the id; the
/// store treats that as a no-op rather than a failure.
#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(&self, project: Project) -> Result<bool, UpdateProjectError>;
}
