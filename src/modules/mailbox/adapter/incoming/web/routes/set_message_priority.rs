use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::mailbox::application::domain::entities::MessagePriority;
use crate::mailbox::application::use_cases::set_message_priority::SetMessagePriorityError;
use crate::session::adapter::incoming::web::extractors::AdminOperator;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SetMessagePriorityRequest {
    pub priority: MessagePriority,
}

#[derive(Debug, Serialize)]
pub struct SetMessagePriorityResponse {
    pub matched: bool,
}

#[put("/api/admin/messages/{id}/priority")]
pub async fn set_message_priority_handler(
    _operator: AdminOperator,
    path: web::Path<Uuid>,
    req: web::Json<SetMessagePriorityRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data
        .mailbox
        .set_priority
        .execute(id, req.into_inner().priority)
        .await
    {
        Ok(matched) => ApiResponse::success(SetMessagePriorityResponse { matched }),

        Err(SetMessagePriorityError::RepositoryError(e)) => {
            error!("Repository error setting priority on {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::session_helper::authenticated_flag;

    #[actix_web::test]
    async fn test_priority_body_rejects_unknown_levels() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(authenticated_flag(true))
                .service(set_message_priority_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!(
                "/api/admin/messages/{}/priority",
                Uuid::new_v4()
            ))
            .set_json(json!({ "priority": "urgent" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
