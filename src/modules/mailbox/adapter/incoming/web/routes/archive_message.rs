use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::mailbox::application::use_cases::archive_message::ArchiveMessageError;
use crate::session::adapter::incoming::web::extractors::AdminOperator;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ArchiveMessageResponse {
    pub matched: bool,
}

#[post("/api/admin/messages/{id}/archive")]
pub async fn archive_message_handler(
    _operator: AdminOperator,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.mailbox.archive.execute(id).await {
        Ok(matched) => ApiResponse::success(ArchiveMessageResponse { matched }),

        Err(ArchiveMessageError::RepositoryError(e)) => {
            error!("Repository error archiving message {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
