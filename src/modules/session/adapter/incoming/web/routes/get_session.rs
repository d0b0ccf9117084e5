use actix_web::{get, web, Responder};
use tracing::error;

use crate::session::application::use_cases::get_session::GetSessionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/session")]
pub async fn get_session_handler(data: web::Data<AppState>) -> impl Responder {
    match data.session.get_session.execute().await {
        Ok(snapshot) => ApiResponse::success(snapshot),

        Err(GetSessionError::QueryFailed(e)) => {
            error!("Query error assembling the session snapshot: {}", e);
            ApiResponse::internal_error()
        }
    }
}
