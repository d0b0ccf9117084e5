pub mod archive_message;
pub mod delete_message;
pub mod get_mailbox_stats;
pub mod get_messages;
pub mod mark_message_read;
pub mod set_message_priority;
pub mod submit_message;
