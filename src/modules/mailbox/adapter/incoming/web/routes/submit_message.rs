use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::mailbox::application::domain::entities::IncomingMessage;
use crate::mailbox::application::use_cases::submit_message::SubmitMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public contact-form payload. The subject may be blank; the store swaps in
/// its placeholder. Nothing validates the email format; browser-native form
/// constraints are the only check the source system ever had.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitMessageRequest {
    pub sender_name: String,
    pub sender_email: String,
    #[serde(default)]
    pub subject: String,
    pub body: String,
}

#[post("/api/contact")]
pub async fn submit_message_handler(
    req: web::Json<SubmitMessageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let incoming = IncomingMessage {
        sender_name: req.sender_name,
        sender_email: req.sender_email,
        subject: req.subject,
        body: req.body,
    };

    match data.mailbox.submit.execute(incoming).await {
        Ok(stored) => {
            info!("Contact message received from {}", stored.sender_email);
            ApiResponse::created(stored)
        }

        Err(SubmitMessageError::RepositoryError(e)) => {
            error!("Repository error storing contact message: {}", e);
            ApiResponse::internal_error()
        }
    }
}
