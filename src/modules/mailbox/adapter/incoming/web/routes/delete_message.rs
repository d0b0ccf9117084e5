use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::mailbox::application::use_cases::delete_message::DeleteMessageError;
use crate::session::adapter::incoming::web::extractors::AdminOperator;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct DeleteMessageResponse {
    pub deleted: bool,
}

#[delete("/api/admin/messages/{id}")]
pub async fn delete_message_handler(
    _operator: AdminOperator,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.mailbox.delete.execute(id).await {
        Ok(deleted) => ApiResponse::success(DeleteMessageResponse { deleted }),

        Err(DeleteMessageError::RepositoryError(e)) => {
            error!("Repository error purging message {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
