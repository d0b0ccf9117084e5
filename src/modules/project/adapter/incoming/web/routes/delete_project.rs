use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::project::application::ports::incoming::use_cases::DeleteProjectError;
use crate::session::adapter::incoming::web::extractors::AdminOperator;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct DeleteProjectResponse {
    pub deleted: bool,
}

#[delete("/api/admin/projects/{id}")]
pub async fn delete_project_handler(
    _operator: AdminOperator,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.project.delete.execute(&id).await {
        Ok(deleted) => ApiResponse::success(DeleteProjectResponse { deleted }),

        Err(DeleteProjectError::RepositoryError(e)) => {
            error!("Repository error deleting project {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
