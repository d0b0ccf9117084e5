use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::mailbox::application::domain::entities::MessageView;
use crate::mailbox::application::use_cases::get_messages::GetMessagesError;
use crate::session::adapter::incoming::web::extractors::AdminOperator;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GetMessagesParams {
    /// Which partition to list; defaults to the active mailbox.
    pub view: Option<MessageView>,
}

#[get("/api/admin/messages")]
pub async fn get_messages_handler(
    _operator: AdminOperator,
    params: web::Query<GetMessagesParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let view = params.into_inner().view.unwrap_or(MessageView::Active);

    match data.mailbox.get_list.execute(view).await {
        Ok(messages) => ApiResponse::success(messages),

        Err(GetMessagesError::QueryFailed(e)) => {
            error!("Query error listing messages: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::session_helper::authenticated_flag;

    #[actix_web::test]
    async fn test_view_param_accepts_both_partitions() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(authenticated_flag(true))
                .service(get_messages_handler),
        )
        .await;

        for uri in [
            "/api/admin/messages",
            "/api/admin/messages?view=active",
            "/api/admin/messages?view=archived",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "uri: {uri}");
        }
    }

    #[actix_web::test]
    async fn test_mailbox_is_admin_only() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(authenticated_flag(false))
                .service(get_messages_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/messages")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
