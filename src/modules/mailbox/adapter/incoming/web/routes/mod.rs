mod archive_message;
mod delete_message;
mod get_mailbox_stats;
mod get_messages;
mod mark_message_read;
mod set_message_priority;
mod submit_message;

pub use archive_message::archive_message_handler;
pub use delete_message::delete_message_handler;
pub use get_mailbox_stats::get_mailbox_stats_handler;
pub use get_messages::get_messages_handler;
pub use mark_message_read::mark_message_read_handler;
pub use set_message_priority::set_message_priority_handler;
pub use submit_message::submit_message_handler;
