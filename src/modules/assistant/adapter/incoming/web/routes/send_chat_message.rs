use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::assistant::application::use_cases::send_chat_message::SendChatMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// Free-form visitor text for the assistant.
    #[schema(example = "What has Usman built with D3?")]
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatResponse {
    /// Model output, or one of the two canned failure lines.
    pub reply: String,
    /// True when `reply` is a canned line.
    #[schema(example = false)]
    pub fallback: bool,
}

/// Ask the site assistant
///
/// Forwards the message and the current system instruction to the external
/// text-generation endpoint. Failures come back as a canned reply, never as
/// an error payload; only one message may be in flight at a time.
#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "assistant",
    request_body = ChatRequest,
    responses(
        (
            status = 200,
            description = "Reply from the model, or a canned fallback line",
            body = inline(SuccessResponse<ChatResponse>),
            example = json!({
                "success": true,
                "data": { "reply": "He built the Quantum Dashboard.", "fallback": false }
            })
        ),
        (
            status = 400,
            description = "Empty message",
            body = ErrorResponse
        ),
        (
            status = 409,
            description = "A previous message is still in flight",
            body = ErrorResponse
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        ),
    )
)]
#[post("/api/chat")]
pub async fn send_chat_message_handler(
    req: web::Json<ChatRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let message = req.into_inner().message;
    let message = message.trim();

    // The original widget silently ignored empty sends; over HTTP that
    // becomes an explicit rejection.
    if message.is_empty() {
        return ApiResponse::bad_request("EMPTY_MESSAGE", "Message must not be empty");
    }

    match data.chat.execute(message).await {
        Ok(reply) => ApiResponse::success(reply),

        Err(SendChatMessageError::AssistantBusy) => ApiResponse::conflict(
            "ASSISTANT_BUSY",
            "A previous message is still being answered",
        ),

        Err(SendChatMessageError::RepositoryError(e)) => {
            error!("Repository error reading the assistant instruction: {}", e);
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
    use crate::tests::support::stubs::StubSendChatMessageUseCase;

    #[actix_web::test]
    async fn test_reply_envelope_carries_text_and_fallback_flag() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_chat(StubSendChatMessageUseCase::reply("It works."))
                        .build(),
                )
                .service(send_chat_message_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(json!({ "message": "does it work?" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["reply"], "It works.");
        assert_eq!(body["data"]["fallback"], false);
    }

    #[actix_web::test]
    async fn test_whitespace_only_messages_are_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(send_chat_message_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(json!({ "message": "   " }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_busy_assistant_is_a_conflict() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_chat(StubSendChatMessageUseCase::busy())
                        .build(),
                )
                .service(send_chat_message_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(json!({ "message": "hello" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ASSISTANT_BUSY");
    }
}
