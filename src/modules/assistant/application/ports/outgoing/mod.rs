mod chat_model;

pub use chat_model::{ChatModel, ChatModelError};
#[cfg(test)]
pub use chat_model::MockChatModel;
