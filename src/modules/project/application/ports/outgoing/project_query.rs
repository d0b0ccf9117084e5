// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;

use crate::project::application::domain::entities::Project;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Read side. Returns the collection in storage order (newest first); all
/// filtering and ranking happens in the domain derivations.
#[async_trait]
pub trait ProjectQuery: Send + Sync {
    async fn all_projects(&self) -> Result<Vec<Project>, ProjectQueryError>;

    async fn project_by_id(&self, id: &str) -> Result<Option<Project>, ProjectQueryError>;
}
