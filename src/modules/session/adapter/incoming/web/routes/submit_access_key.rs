use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::session::application::use_cases::submit_access_key::{
    SubmitAccessKeyError, ACCESS_DENIED_MESSAGE,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAccessKeyRequest {
    /// The demo access key. Plaintext comparison, demo semantics.
    #[schema(example = "usman_root")]
    pub access_key: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GateStatusResponse {
    /// Gate state after the scan finished.
    #[schema(example = "success")]
    pub status: String,
}

/// Submit the admin access key
///
/// Runs the gate's scan sequence and reports the resulting state. The
/// authenticated flag commits shortly after a success, mirroring the
/// original UI's staging delay.
#[utoipa::path(
    post,
    path = "/api/session/access",
    tag = "session",
    request_body = SubmitAccessKeyRequest,
    responses(
        (
            status = 200,
            description = "Access granted; the session commits momentarily",
            body = inline(SuccessResponse<GateStatusResponse>),
            example = json!({
                "success": true,
                "data": { "status": "success" }
            })
        ),
        (
            status = 401,
            description = "Wrong key; the gate resets itself after its error delay",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "ACCESS_DENIED",
                    "message": "ACCESS_DENIED: INVALID_CREDENTIALS"
                }
            })
        ),
        (
            status = 409,
            description = "A scan sequence is already running",
            body = ErrorResponse
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        ),
    )
)]
#[post("/api/session/access")]
pub async fn submit_access_key_handler(
    req: web::Json<SubmitAccessKeyRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .session
        .submit_access_key
        .execute(&req.into_inner().access_key)
        .await
    {
        Ok(status) => ApiResponse::success(GateStatusResponse {
            status: format!("{:?}", status).to_lowercase(),
        }),

        Err(SubmitAccessKeyError::Denied) => {
            ApiResponse::unauthorized("ACCESS_DENIED", ACCESS_DENIED_MESSAGE)
        }

        Err(SubmitAccessKeyError::GateBusy) => {
            ApiResponse::conflict("GATE_BUSY", "A scan sequence is already running")
        }

        Err(SubmitAccessKeyError::RepositoryError(e)) => {
            error!("Repository error in the access gate: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubSubmitAccessKeyUseCase;

    #[actix_web::test]
    async fn test_denied_submission_is_a_401_with_the_terminal_line() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_submit_access_key(StubSubmitAccessKeyUseCase::denied())
                        .build(),
                )
                .service(submit_access_key_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/session/access")
            .set_json(json!({ "accessKey": "swordfish" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ACCESS_DENIED");
        assert_eq!(body["error"]["message"], ACCESS_DENIED_MESSAGE);
    }

    #[actix_web::test]
    async fn test_granted_submission_reports_success() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_submit_access_key(StubSubmitAccessKeyUseCase::granted())
                        .build(),
                )
                .service(submit_access_key_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/session/access")
            .set_json(json!({ "accessKey": "usman_root" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "success");
    }

    #[actix_web::test]
    async fn test_busy_gate_is_a_conflict() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_submit_access_key(StubSubmitAccessKeyUseCase::busy())
                        .build(),
                )
                .service(submit_access_key_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/session/access")
            .set_json(json!({ "accessKey": "usman_root" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }
}
