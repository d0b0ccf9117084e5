use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::session::application::use_cases::logout::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/session/logout")]
pub async fn logout_handler(data: web::Data<AppState>) -> impl Responder {
    match data.session.logout.execute().await {
        Ok(()) => {
            info!("Operator session terminated");
            ApiResponse::success(())
        }

        Err(LogoutError::RepositoryError(e)) => {
            error!("Repository error during logout: {}", e);
            ApiResponse::internal_error()
        }
    }
}
