use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::error;

use crate::assistant::application::domain::replies::{
    CONNECTION_REFUSED_REPLY, RECALIBRATING_REPLY,
};
use crate::assistant::application::ports::outgoing::{ChatModel, ChatModelError};
use crate::site::application::ports::outgoing::{ContentRepository, ContentRepositoryError};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: String,
    /// True when the reply is one of the canned failure lines rather than
    /// model output.
    pub fallback: bool,
}

#[derive(Debug, Clone)]
pub enum SendChatMessageError {
    /// A previous message is still in flight; one at a time, no queueing.
    AssistantBusy,
    RepositoryError(String),
}

#[async_trait]
pub trait ISendChatMessageUseCase: Send + Sync {
    async fn execute(&self, message: &str) -> Result<ChatReply, SendChatMessageError>;
}

/// Picks the canned line for a bridge failure. The source sniffed the error
/// message for credential/connection markers and fell back to the
/// recalibration line for everything else, including empty replies.
fn fallback_reply(error: &ChatModelError) -> &'static str {
    match error {
        ChatModelError::RequestFailed(msg)
            if msg.contains("refused") || msg.contains("API_KEY") =>
        {
            CONNECTION_REFUSED_REPLY
        }
        _ => RECALIBRATING_REPLY,
    }
}

pub struct SendChatMessageService<M, C>
where
    M: ChatModel,
    C: ContentRepository,
{
    chat_model: M,
    content_repository: C,
    /// Busy flag: held for the whole round trip so a second message cannot
    /// start while one is outstanding. In-flight calls are never cancelled.
    in_flight: Mutex<()>,
}

impl<M, C> SendChatMessageService<M, C>
where
    M: ChatModel,
    C: ContentRepository,
{
    pub fn new(chat_model: M, content_repository: C) -> Self {
        Self {
            chat_model,
            content_repository,
            in_flight: Mutex::new(()),
        }
    }
}

#[async_trait]
impl<M, C> ISendChatMessageUseCase for SendChatMessageService<M, C>
where
    M: ChatModel + Send + Sync,
    C: ContentRepository + Send + Sync,
{
    async fn execute(&self, message: &str) -> Result<ChatReply, SendChatMessageError> {
        let _guard = self
            .in_flight
            .try_lock()
            .map_err(|_| SendChatMessageError::AssistantBusy)?;

        // Always the instruction as it stands right now, not a snapshot;
        // an admin edit applies to the very next message.
        let instruction = self
            .content_repository
            .assistant_instruction()
            .await
            .map_err(|ContentRepositoryError::StorageError(msg)| {
                SendChatMessageError::RepositoryError(msg)
            })?;

        match self.chat_model.generate(message, &instruction).await {
            Ok(text) => Ok(ChatReply {
                reply: text,
                fallback: false,
            }),

            Err(e) => {
                error!("Chat bridge failure: {}", e);
                Ok(ChatReply {
                    reply: fallback_reply(&e).to_string(),
                    fallback: true,
                })
            }
        }
    }
}
