use async_trait::async_trait;
use serde::Serialize;

use crate::mailbox::application::domain::entities::{partition, unread_count, MessageView};
use crate::mailbox::application::ports::outgoing::{MessageRepository, MessageRepositoryError};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MailboxStats {
    /// Neither read nor archived.
    pub unread: usize,
    pub active: usize,
    pub archived: usize,
}

#[derive(Debug, Clone)]
pub enum GetMailboxStatsError {
    QueryFailed(String),
}

#[async_trait]
pub trait IGetMailboxStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<MailboxStats, GetMailboxStatsError>;
}

pub struct GetMailboxStatsService<R>
where
    R: MessageRepository,
{
    message_repository: R,
}

impl<R> GetMailboxStatsService<R>
where
    R: MessageRepository,
{
    pub fn new(message_repository: R) -> Self {
        Self { message_repository }
    }
}

#[async_trait]
impl<R> IGetMailboxStatsUseCase for GetMailboxStatsService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self) -> Result<MailboxStats, GetMailboxStatsError> {
        let messages = self
            .message_repository
            .all_messages()
            .await
            .map_err(|MessageRepositoryError::StorageError(msg)| {
                GetMailboxStatsError::QueryFailed(msg)
            })?;

        Ok(MailboxStats {
            unread: unread_count(&messages),
            active: partition(&messages, MessageView::Active).len(),
            archived: partition(&messages, MessageView::Archived).len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mailbox::application::domain::entities::{
        ContactMessage, IncomingMessage, MessagePriority,
    };
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    struct FixedMessageRepo {
        messages: Vec<ContactMessage>,
    }

    #[async_trait]
    impl MessageRepository for FixedMessageRepo {
        async fn add_message(
            &self,
            _: IncomingMessage,
        ) -> Result<ContactMessage, MessageRepositoryError> {
            unimplemented!("not needed for stats tests")
        }

        async fn all_messages(&self) -> Result<Vec<ContactMessage>, MessageRepositoryError> {
            Ok(self.messages.clone())
        }

        async fn mark_read(&self, _: Uuid) -> Result<bool, MessageRepositoryError> {
            unimplemented!("not needed for stats tests")
        }

        async fn archive(&self, _: Uuid) -> Result<bool, MessageRepositoryError> {
            unimplemented!("not needed for stats tests")
        }

        async fn set_priority(
            &self,
            _: Uuid,
            _: MessagePriority,
        ) -> Result<bool, MessageRepositoryError> {
            unimplemented!("not needed for stats tests")
        }

        async fn remove(&self, _: Uuid) -> Result<bool, MessageRepositoryError> {
            unimplemented!("not needed for stats tests")
        }
    }

    fn message(read: bool, archived: bool) -> ContactMessage {
        ContactMessage {
            id: Uuid::new_v4(),
            sender_name: "A".to_string(),
            sender_email: "a@b.com".to_string(),
            subject: "s".to_string(),
            body: "hi".to_string(),
            timestamp: Utc::now(),
            is_read: read,
            is_archived: archived,
            priority: MessagePriority::Medium,
        }
    }

    #[tokio::test]
    async fn test_stats_count_each_partition_and_the_unread_set() {
        let service = GetMailboxStatsService::new(FixedMessageRepo {
            messages: vec![
                message(false, false),
                message(true, false),
                message(false, true),
            ],
        });

        let stats = service.execute().await.unwrap();

        assert_eq!(
            stats,
            MailboxStats {
                unread: 1,
                active: 2,
                archived: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_stats_of_an_empty_mailbox_are_all_zero() {
        let service = GetMailboxStatsService::new(FixedMessageRepo { messages: vec![] });

        let stats = service.execute().await.unwrap();

        assert_eq!(
            stats,
            MailboxStats {
                unread: 0,
                active: 0,
                archived: 0,
            }
        );
    }
}
