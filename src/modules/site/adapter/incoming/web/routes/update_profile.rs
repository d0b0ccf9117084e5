use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::session::adapter::incoming::web::extractors::AdminOperator;
use crate::shared::api::ApiResponse;
use crate::site::application::use_cases::update_profile::{UpdateProfileData, UpdateProfileError};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub user: String,
    pub role: String,
    pub avatar: String,
}

#[put("/api/admin/site/profile")]
pub async fn update_profile_handler(
    _operator: AdminOperator,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let update = UpdateProfileData {
        user: req.user,
        role: req.role,
        avatar: req.avatar,
    };

    match data.site.update_profile.execute(update).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(UpdateProfileError::RepositoryError(e)) => {
            error!("Repository error updating profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}
