use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::session::adapter::incoming::web::extractors::AdminOperator;
use crate::shared::api::ApiResponse;
use crate::site::application::use_cases::update_assistant_instruction::UpdateAssistantInstructionError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateAssistantInstructionRequest {
    pub instruction: String,
}

#[put("/api/admin/site/assistant")]
pub async fn update_assistant_instruction_handler(
    _operator: AdminOperator,
    req: web::Json<UpdateAssistantInstructionRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .site
        .update_instruction
        .execute(req.into_inner().instruction)
        .await
    {
        Ok(()) => ApiResponse::success(()),

        Err(UpdateAssistantInstructionError::RepositoryError(e)) => {
            error!("Repository error updating assistant instruction: {}", e);
            ApiResponse::internal_error()
        }
    }
}
