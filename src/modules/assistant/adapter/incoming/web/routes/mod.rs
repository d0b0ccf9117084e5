mod send_chat_message;

pub use send_chat_message::send_chat_message_handler;
pub use send_chat_message::__path_send_chat_message_handler;
pub use send_chat_message::{ChatRequest, ChatResponse};
