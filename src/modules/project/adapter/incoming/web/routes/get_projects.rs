use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::project::application::ports::incoming::use_cases::{GetProjectsError, ProjectFilter};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GetProjectsParams {
    /// Gallery tag; absent or `All` matches everything.
    pub tag: Option<String>,
    /// Free-text search over titles and tags.
    #[serde(default)]
    pub q: String,
}

#[get("/api/projects")]
pub async fn get_projects_handler(
    params: web::Query<GetProjectsParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = params.into_inner();
    let filter = ProjectFilter {
        tag: params.tag,
        query: params.q,
    };

    match data.project.get_list.execute(filter).await {
        Ok(projects) => ApiResponse::success(projects),

        Err(GetProjectsError::QueryFailed(e)) => {
            error!("Query error listing projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}
