pub mod send_chat_message;
