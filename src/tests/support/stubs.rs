use async_trait::async_trait;

use crate::assistant::application::use_cases::send_chat_message::{
    ChatReply, ISendChatMessageUseCase, SendChatMessageError,
};
use crate::session::application::domain::entities::GateStatus;
use crate::session::application::use_cases::submit_access_key::{
    ISubmitAccessKeyUseCase, SubmitAccessKeyError,
};

/* --------------------------------------------------
 * Access gate stubs
 * -------------------------------------------------- */

pub struct StubSubmitAccessKeyUseCase {
    result: Result<GateStatus, SubmitAccessKeyError>,
}

impl StubSubmitAccessKeyUseCase {
    pub fn granted() -> Self {
        Self {
            result: Ok(GateStatus::Success),
        }
    }

    pub fn denied() -> Self {
        Self {
            result: Err(SubmitAccessKeyError::Denied),
        }
    }

    pub fn busy() -> Self {
        Self {
            result: Err(SubmitAccessKeyError::GateBusy),
        }
    }
}

#[async_trait]
impl ISubmitAccessKeyUseCase for StubSubmitAccessKeyUseCase {
    async fn execute(&self, _access_key: &str) -> Result<GateStatus, SubmitAccessKeyError> {
        self.result.clone()
    }
}

/* --------------------------------------------------
 * Chat bridge stubs
 * -------------------------------------------------- */

pub struct StubSendChatMessageUseCase {
    result: Result<ChatReply, SendChatMessageError>,
}

impl StubSendChatMessageUseCase {
    pub fn reply(text: &str) -> Self {
        Self {
            result: Ok(ChatReply {
                reply: text.to_string(),
                fallback: false,
            }),
        }
    }

    pub fn busy() -> Self {
        Self {
            result: Err(SendChatMessageError::AssistantBusy),
        }
    }
}

#[async_trait]
impl ISendChatMessageUseCase for StubSendChatMessageUseCase {
    async fn execute(&self, _message: &str) -> Result<ChatReply, SendChatMessageError> {
        self.result.clone()
    }
}
