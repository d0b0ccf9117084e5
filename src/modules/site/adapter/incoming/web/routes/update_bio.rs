use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::session::adapter::incoming::web::extractors::AdminOperator;
use crate::shared::api::ApiResponse;
use crate::site::application::use_cases::update_bio::UpdateBioError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateBioRequest {
    pub bio: String,
}

#[put("/api/admin/site/bio")]
pub async fn update_bio_handler(
    _operator: AdminOperator,
    req: web::Json<UpdateBioRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.site.update_bio.execute(req.into_inner().bio).await {
        Ok(()) => ApiResponse::success(()),

        Err(UpdateBioError::RepositoryError(e)) => {
            error!("Repository error updating bio: {}", e);
            ApiResponse::internal_error()
        }
    }
}
