use async_trait::async_trait;

use crate::project::application::domain::entities::Project;
use crate::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::project::application::ports::outgoing::{ProjectQuery, ProjectQueryError};

pub struct GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleProjectUseCase for GetSingleProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, id: &str) -> Result<Project, GetSingleProjectError> {
        self.query
            .project_by_id(id)
            .await
            .map_err(|ProjectQueryError::QueryFailed(msg)| {
                GetSingleProjectError::QueryFailed(msg)
            })?
            .ok_or(GetSingleProjectError::NotFound)
    }
}
