use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::session::adapter::incoming::web::extractors::AdminOperator;
use crate::shared::api::ApiResponse;
use crate::site::application::use_cases::get_assistant_instruction::GetAssistantInstructionError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct AssistantInstructionResponse {
    pub instruction: String,
}

#[get("/api/admin/site/assistant")]
pub async fn get_assistant_instruction_handler(
    _operator: AdminOperator,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.site.get_instruction.execute().await {
        Ok(instruction) => ApiResponse::success(AssistantInstructionResponse { instruction }),

        Err(GetAssistantInstructionError::QueryFailed(e)) => {
            error!("Query error reading assistant instruction: {}", e);
            ApiResponse::internal_error()
        }
    }
}
