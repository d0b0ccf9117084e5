use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    store: &'static str,
    assistant: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
/// - No store access
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Exercises the in-memory store through a real use case
/// - Reports whether the chat bridge has a credential; an unconfigured
///   bridge still serves its canned replies, so it never fails readiness
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let store_status = match data.skill.get_list.execute().await {
        Ok(_) => "ok",
        Err(_) => "unhealthy",
    };

    let assistant_status = if data.assistant_configured {
        "ok"
    } else {
        "unconfigured"
    };

    if store_status == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            store: store_status,
            assistant: assistant_status,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            store: store_status,
            assistant: assistant_status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_liveness_is_always_ok() {
        let app = test::init_service(App::new().service(health)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_readiness_reports_store_and_assistant() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(readiness),
        )
        .await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["store"], "ok");
    }
}
