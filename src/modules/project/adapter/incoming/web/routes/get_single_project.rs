use actix_web::{get, web, Responder};
use tracing::error;

use crate::project::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/projects/{id}")]
pub async fn get_single_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.project.get_single.execute(&id).await {
        Ok(project) => ApiResponse::success(project),

        Err(GetSingleProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetSingleProjectError::QueryFailed(e)) => {
            error!("Query error fetching project {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
