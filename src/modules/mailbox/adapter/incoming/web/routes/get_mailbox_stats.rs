use actix_web::{get, web, Responder};
use tracing::error;

use crate::mailbox::application::use_cases::get_mailbox_stats::GetMailboxStatsError;
use crate::session::adapter::incoming::web::extractors::AdminOperator;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/messages/stats")]
pub async fn get_mailbox_stats_handler(
    _operator: AdminOperator,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.mailbox.stats.execute().await {
        Ok(stats) => ApiResponse::success(stats),

        Err(GetMailboxStatsError::QueryFailed(e)) => {
            error!("Query error computing mailbox stats: {}", e);
            ApiResponse::internal_error()
        }
    }
}
