use std::sync::Arc;

use crate::mailbox::application::use_cases::{
    archive_message::IArchiveMessageUseCase, delete_message::IDeleteMessageUseCase,
    get_mailbox_stats::IGetMailboxStatsUseCase, get_messages::IGetMessagesUseCase,
    mark_message_read::IMarkMessageReadUseCase, set_message_priority::ISetMessagePriorityUseCase,
    submit_message::ISubmitMessageUseCase,
};

#[derive(Clone)]
pub struct MailboxUseCases {
    pub submit: Arc<dyn ISubmitMessageUseCase + Send + Sync>,
    pub get_list: Arc<dyn IGetMessagesUseCase + Send + Sync>,
    pub mark_read: Arc<dyn IMarkMessageReadUseCase + Send + Sync>,
    pub archive: Arc<dyn IArchiveMessageUseCase + Send + Sync>,
    pub set_priority: Arc<dyn ISetMessagePriorityUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteMessageUseCase + Send + Sync>,
    pub stats: Arc<dyn IGetMailboxStatsUseCase + Send + Sync>,
}
