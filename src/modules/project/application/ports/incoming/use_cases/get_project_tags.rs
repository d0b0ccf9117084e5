use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone)]
pub enum GetProjectTagsError {
    QueryFailed(String),
}

impl fmt::Display for GetProjectTagsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetProjectTagsError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

/// The deduplicated tag universe, `"All"` sentinel first.
#[async_trait]
pub trait GetProjectTagsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<String>, GetProjectTagsError>;
}
