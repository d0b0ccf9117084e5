use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::session::adapter::incoming::web::extractors::AdminOperator;
use crate::shared::api::ApiResponse;
use crate::skill::application::use_cases::update_skill_level::UpdateSkillLevelError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateSkillLevelRequest {
    /// 0-100 by the admin slider's contract; the store does not enforce it.
    pub level: u8,
}

#[derive(Debug, Serialize)]
pub struct UpdateSkillLevelResponse {
    pub matched: bool,
}

#[put("/api/admin/skills/{name}")]
pub async fn update_skill_level_handler(
    _operator: AdminOperator,
    path: web::Path<String>,
    req: web::Json<UpdateSkillLevelRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let name = path.into_inner();

    match data
        .skill
        .update_level
        .execute(&name, req.into_inner().level)
        .await
    {
        Ok(matched) => ApiResponse::success(UpdateSkillLevelResponse { matched }),

        Err(UpdateSkillLevelError::RepositoryError(e)) => {
            error!("Repository error updating skill {}: {}", name, e);
            ApiResponse::internal_error()
        }
    }
}
