use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::skill::application::use_cases::get_skills::GetSkillsError;
use crate::AppState;

#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill.get_list.execute().await {
        Ok(skills) => ApiResponse::success(skills),

        Err(GetSkillsError::QueryFailed(e)) => {
            error!("Query error listing skills: {}", e);
            ApiResponse::internal_error()
        }
    }
}
