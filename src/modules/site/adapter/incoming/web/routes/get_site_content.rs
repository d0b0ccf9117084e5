use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::site::application::use_cases::get_site_content::GetSiteContentError;
use crate::AppState;

#[get("/api/site")]
pub async fn get_site_content_handler(data: web::Data<AppState>) -> impl Responder {
    match data.site.get_content.execute().await {
        Ok(content) => ApiResponse::success(content),

        Err(GetSiteContentError::QueryFailed(e)) => {
            error!("Query error assembling site content: {}", e);
            ApiResponse::internal_error()
        }
    }
}
