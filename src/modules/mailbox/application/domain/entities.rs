use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subject used when the contact form leaves the field blank.
pub const DEFAULT_SUBJECT: &str = "(no subject)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessagePriority {
    Low,
    Medium,
    High,
}

/// The two disjoint partitions of the mailbox. Every message is in exactly
/// one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageView {
    Active,
    Archived,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Uuid,
    pub sender_name: String,
    pub sender_email: String,
    pub subject: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
    pub is_archived: bool,
    pub priority: MessagePriority,
}

/// What the public contact form submits. Everything else on a
/// [`ContactMessage`] is synthesized at insertion time.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub sender_name: String,
    pub sender_email: String,
    pub subject: String,
    pub body: String,
}

impl ContactMessage {
    pub fn in_view(&self, view: MessageView) -> bool {
        match view {
            MessageView::Active => !self.is_archived,
            MessageView::Archived => self.is_archived,
        }
    }
}

/// Messages that still demand attention: neither read nor archived.
pub fn unread_count(messages: &[ContactMessage]) -> usize {
    messages
        .iter()
        .filter(|m| !m.is_read && !m.is_archived)
        .count()
}

/// Order-preserving slice of one partition.
pub fn partition(messages: &[ContactMessage], view: MessageView) -> Vec<ContactMessage> {
    messages
        .iter()
        .filter(|m| m.in_view(view))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_partitions_are_disjoint_and_exhaustive() {
        let messages = vec![
            message(false, false),
            message(true, false),
            message(false, true),
            message(true, true),
        ];

        let active = partition(&messages, MessageView::Active);
        let archived = partition(&messages, MessageView::Archived);

        assert_eq!(active.len() + archived.len(), messages.len());
        for m in &messages {
            let in_active = active.iter().any(|a| a.id == m.id);
            let in_archived = archived.iter().any(|a| a.id == m.id);
            assert!(in_active ^ in_archived);
        }
    }

    #[test]
    fn test_unread_count_ignores_archived_messages() {
        let messages = vec![
            message(false, false),
            message(false, false),
            message(false, true),
            message(true, false),
        ];

        assert_eq!(unread_count(&messages), 2);
    }

    #[test]
    fn test_unread_count_of_empty_mailbox_is_zero() {
        assert_eq!(unread_count(&[]), 0);
    }
}
