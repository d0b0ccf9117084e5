use async_trait::async_trait;

use crate::project::application::domain::derive;
use crate::project::application::domain::entities::Project;
use crate::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase, ProjectFilter,
};
use crate::project::application::ports::outgoing::{ProjectQuery, ProjectQueryError};

pub struct GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, filter: ProjectFilter) -> Result<Vec<Project>, GetProjectsError> {
        let projects = self
            .query
            .all_projects()
            .await
            .map_err(|ProjectQueryError::QueryFailed(msg)| GetProjectsError::QueryFailed(msg))?;

        Ok(derive::filter_projects(
            &projects,
            filter.tag.as_deref(),
            filter.query.trim(),
        ))
    }
}
