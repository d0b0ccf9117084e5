use actix_web::{get, web, Responder};
use tracing::error;

use crate::project::application::ports::incoming::use_cases::GetRelatedProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/projects/{id}/related")]
pub async fn get_related_projects_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.project.get_related.execute(&id).await {
        Ok(related) => ApiResponse::success(related),

        Err(GetRelatedProjectsError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetRelatedProjectsError::QueryFailed(e)) => {
            error!("Query error ranking related projects for {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
