use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::project::application::ports::incoming::use_cases::CreateProjectError;
use crate::project::application::ports::outgoing::NewProjectData;
use crate::session::adapter::incoming::web::extractors::AdminOperator;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    /// Omitted by most callers; the admin panel mints timestamp ids.
    pub id: Option<String>,
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

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/admin/projects")]
pub async fn create_project_handler(
    _operator: AdminOperator,
    req: web::Json<CreateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let project_data = NewProjectData {
        id: req.id,
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

    match data.project.create.execute(project_data).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
