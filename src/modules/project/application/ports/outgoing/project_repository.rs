// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;

use crate::project::application::domain::entities::Project;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Payload for a new gallery entry. The id is caller-supplied when the admin
/// panel already minted one; the create service mints a UUID otherwise.
#[derive(Debug, Clone)]
pub struct NewProjectData {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub challenges: Vec<String>,
    pub solution: String,
    pub tags: Vec<String>,
    pub image: String,
    pub live_link: String,
    pub source_link: String,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (command side)
// ──────────────────────────────────────────────────────────
//

/// Replace/remove report whether anything matched; a miss is not an error,
/// per the store's silent no-op contract.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Prepends. No duplicate-id check.
    async fn insert_project(&self, project: Project) -> Result<(), ProjectRepositoryError>;

    /// Whole-entity replace by id.
    async fn replace_project(&self, project: Project) -> Result<bool, ProjectRepositoryError>;

    async fn remove_project(&self, id: &str) -> Result<bool, ProjectRepositoryError>;
}
