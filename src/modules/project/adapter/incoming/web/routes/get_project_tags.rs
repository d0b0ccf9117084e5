use actix_web::{get, web, Responder};
use tracing::error;

use crate::project::application::ports::incoming::use_cases::GetProjectTagsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/projects/tags")]
pub async fn get_project_tags_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.get_tags.execute().await {
        Ok(tags) => ApiResponse::success(tags),

        Err(GetProjectTagsError::QueryFailed(e)) => {
            error!("Query error deriving tag universe: {}", e);
            ApiResponse::internal_error()
        }
    }
}
