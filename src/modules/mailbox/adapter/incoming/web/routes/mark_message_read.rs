use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::mailbox::application::use_cases::mark_message_read::MarkMessageReadError;
use crate::session::adapter::incoming::web::extractors::AdminOperator;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct MessageMutationResponse {
    pub matched: bool,
}

#[post("/api/admin/messages/{id}/read")]
pub async fn mark_message_read_handler(
    _operator: AdminOperator,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.mailbox.mark_read.execute(id).await {
        Ok(matched) => ApiResponse::success(MessageMutationResponse { matched }),

        Err(MarkMessageReadError::RepositoryError(e)) => {
            error!("Repository error marking message {} read: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
