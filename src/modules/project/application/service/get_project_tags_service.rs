use async_trait::async_trait;

use crate::project::application::domain::derive;
use crate::project::application::ports::incoming::use_cases::{
    GetProjectTagsError, GetProjectTagsUseCase,
};
use crate::project::application::ports::outgoing::{ProjectQuery, ProjectQueryError};

pub struct GetProjectTagsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectTagsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectTagsUseCase for GetProjectTagsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<String>, GetProjectTagsError> {
        let projects = self
            .query
            .all_projects()
            .await
            .map_err(|ProjectQueryError::QueryFailed(msg)| GetProjectTagsError::QueryFailed(msg))?;

        Ok(derive::tag_universe(&projects))
    }
}
