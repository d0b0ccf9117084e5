use async_trait::async_trait;

use crate::project::application::domain::derive;
use crate::project::application::domain::entities::Project;
use crate::project::application::ports::incoming::use_cases::{
    GetRelatedProjectsError, GetRelatedProjectsUseCase,
};
use crate::project::application::ports::outgoing::{ProjectQuery, ProjectQueryError};

pub struct GetRelatedProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetRelatedProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetRelatedProjectsUseCase for GetRelatedProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, id: &str) -> Result<Vec<Project>, GetRelatedProjectsError> {
        let projects = self
            .query
            .all_projects()
            .await
            .map_err(|ProjectQueryError::QueryFailed(msg)| {
                GetRelatedProjectsError::QueryFailed(msg)
            })?;

        let focal = projects
            .iter()
            .find(|p| p.id == id)
            .ok_or(GetRelatedProjectsError::NotFound)?;

        Ok(derive::related_projects(focal, &projects))
    }
}
