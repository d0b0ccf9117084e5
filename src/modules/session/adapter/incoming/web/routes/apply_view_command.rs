use actix_web::{post, web, Responder};
use tracing::error;

use crate::session::application::domain::entities::ViewCommand;
use crate::session::application::use_cases::apply_view_command::ApplyViewCommandError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/session/view")]
pub async fn apply_view_command_handler(
    command: web::Json<ViewCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .session
        .apply_view
        .execute(command.into_inner())
        .await
    {
        Ok(view) => ApiResponse::success(view),

        Err(ApplyViewCommandError::RepositoryError(e)) => {
            error!("Repository error applying view command: {}", e);
            ApiResponse::internal_error()
        }
    }
}
