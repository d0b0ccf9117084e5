use async_trait::async_trait;
use std::sync::Arc;

use crate::project::application::domain::entities::Project;
use crate::project::application::ports::outgoing::{
    ProjectQuery, ProjectQueryError, ProjectRepository, ProjectRepositoryError,
};
use crate::shared::store::MemoryStore;

/// Both project ports over the in-process store. Nothing here can actually
/// fail; the error types exist for the port contracts.
#[derive(Clone)]
pub struct ProjectStoreMemory {
    store: Arc<MemoryStore>,
}

impl ProjectStoreMemory {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProjectRepository for ProjectStoreMemory {
    async fn insert_project(&self, project: Project) -> Result<(), ProjectRepositoryError> {
        self.store.add_project(project).await;
        Ok(())
    }

    async fn replace_project(&self, project: Project) -> Result<bool, ProjectRepositoryError> {
        Ok(self.store.update_project(project).await)
    }

    async fn remove_project(&self, id: &str) -> Result<bool, ProjectRepositoryError> {
        Ok(self.store.delete_project(id).await)
    }
}

#[async_trait]
impl ProjectQuery for ProjectStoreMemory {
    async fn all_projects(&self) -> Result<Vec<Project>, ProjectQueryError> {
        Ok(self.store.projects().await)
    }

    async fn project_by_id(&self, id: &str) -> Result<Option<Project>, ProjectQueryError> {
        Ok(self.store.project_by_id(id).await)
    }
}
