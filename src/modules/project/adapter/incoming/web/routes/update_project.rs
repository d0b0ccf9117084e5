use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::project::application::domain::entities::Project;
use crate::project::application::ports::incoming::use_cases::UpdateProjectError;
use crate::session::adapter::incoming::web::extractors::AdminOperator;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub challenges: Vec<String>,
    pub solution: String,
    pub tags: Vec<String>,
    pub image: String,
    pub live_link: String,
    pub source_link: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateProjectResponse {
    /// False when no entry carried the id; the store keeps its no-op
    /// contract and the caller learns about the miss here.
    pub matched: bool,
}

#[put("/api/admin/projects/{id}")]
pub async fn update_project_handler(
    _operator: AdminOperator,
    path: web::Path<String>,
    req: web::Json<UpdateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let req = req.into_inner();

    let project = Project {
        id,
        title: req.title,
        description: req.description,
        full_description: req.full_description,
        challenges: req.challenges,
        solution: req.solution,
        tags: req.tags,
        image: req.image,
        live_link: req.live_link,
        source_link: req.source_link,
    };

    match data.project.update.execute(project).await {
        Ok(matched) => ApiResponse::success(UpdateProjectResponse { matched }),

        Err(UpdateProjectError::RepositoryError(e)) => {
            error!("Repository error updating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
