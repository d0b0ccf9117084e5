use actix_web::{get, web, Responder};

use crate::session::adapter::incoming::web::extractors::AdminOperator;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/metrics")]
pub async fn get_system_metrics_handler(
    _operator: AdminOperator,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.metrics.snapshot().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::session_helper::authenticated_flag;

    #[actix_web::test]
    async fn test_metrics_carry_the_hud_tiles() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(authenticated_flag(true))
                .service(get_system_metrics_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/metrics")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["data"]["uptimePct"].is_number());
        assert!(body["data"]["coreLoadPct"].is_number());
        assert_eq!(body["data"]["syncStatus"], "active");
    }
}
