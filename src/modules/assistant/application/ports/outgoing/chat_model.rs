// src/modules/assistant/application/ports/outgoing/chat_model.rs

use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChatModelError {
    /// Whatever the provider or the transport reported, as text. The reply
    /// classification sniffs this message.
    #[error("{0}")]
    RequestFailed(String),

    /// The provider answered but carried no usable text.
    #[error("No response from neural network.")]
    EmptyReply,
}

/// Outbound text-generation port. One prompt, one instruction, one reply;
/// no history is carried across calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        system_instruction: &str,
    ) -> Result<String, ChatModelError>;
}
