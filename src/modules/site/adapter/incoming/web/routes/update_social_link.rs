use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::session::adapter::incoming::web::extractors::AdminOperator;
use crate::shared::api::ApiResponse;
use crate::site::application::use_cases::update_social_link::UpdateSocialLinkError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateSocialLinkRequest {
    pub url: String,
}

#[put("/api/admin/site/social/{platform}")]
pub async fn update_social_link_handler(
    _operator: AdminOperator,
    path: web::Path<String>,
    req: web::Json<UpdateSocialLinkRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let platform = path.into_inner();

    match data
        .site
        .update_social_link
        .execute(platform.clone(), req.into_inner().url)
        .await
    {
        Ok(()) => ApiResponse::success(()),

        Err(UpdateSocialLinkError::RepositoryError(e)) => {
            error!("Repository error updating social link {}: {}", platform, e);
            ApiResponse::internal_error()
        }
    }
}
