use std::collections::BTreeMap;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::mailbox::application::domain::entities::{
    ContactMessage, IncomingMessage, MessagePriority, DEFAULT_SUBJECT,
};
use crate::project::application::domain::entities::Project;
use crate::session::application::domain::entities::{
    AuthenticatedFlag, GateStatus, Theme, ViewCommand, ViewState,
};
use crate::site::application::domain::entities::OperatorProfile;
use crate::skill::application::domain::entities::Skill;

use super::seed;

/// The single in-process holder of every mutable collection and flag.
///
/// It stands where a database connection would in a persistent system: built
/// once in `main`, shared behind an `Arc`, and only ever touched through the
/// module adapters. Mutations cannot fail; update/delete on a missing target
/// is a silent no-op, matching the source system's contract. A process
/// restart resets everything to the seed content.
pub struct MemoryStore {
    projects: RwLock<Vec<Project>>,
    skills: RwLock<Vec<Skill>>,
    messages: RwLock<Vec<ContactMessage>>,
    social_links: RwLock<BTreeMap<String, String>>,
    profile: RwLock<OperatorProfile>,
    bio: RwLock<String>,
    assistant_instruction: RwLock<String>,
    view: RwLock<ViewState>,
    gate_status: RwLock<GateStatus>,
    authenticated: AuthenticatedFlag,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            projects: RwLock::new(seed::initial_projects()),
            skills: RwLock::new(seed::initial_skills()),
            messages: RwLock::new(Vec::new()),
            social_links: RwLock::new(seed::initial_social_links()),
            profile: RwLock::new(seed::initial_profile()),
            bio: RwLock::new(seed::initial_bio()),
            assistant_instruction: RwLock::new(seed::initial_assistant_instruction()),
            view: RwLock::new(ViewState::default()),
            gate_status: RwLock::new(GateStatus::Idle),
            authenticated: AuthenticatedFlag::default(),
        }
    }

    /// A store with no seed content. Test fixtures build on this.
    pub fn empty() -> Self {
        Self {
            projects: RwLock::new(Vec::new()),
            skills: RwLock::new(Vec::new()),
            messages: RwLock::new(Vec::new()),
            social_links: RwLock::new(BTreeMap::new()),
            profile: RwLock::new(seed::initial_profile()),
            bio: RwLock::new(String::new()),
            assistant_instruction: RwLock::new(String::new()),
            view: RwLock::new(ViewState::default()),
            gate_status: RwLock::new(GateStatus::Idle),
            authenticated: AuthenticatedFlag::default(),
        }
    }

    // ──────────────────────────────────────────────────────────
    // Projects
    // ──────────────────────────────────────────────────────────

    pub async fn projects(&self) -> Vec<Project> {
        self.projects.read().await.clone()
    }

    pub async fn project_by_id(&self, id: &str) -> Option<Project> {
        self.projects.read().await.iter().find(|p| p.id == id).cloned()
    }

    /// Prepends. Id uniqueness is the caller's problem, as in the source.
    pub async fn add_project(&self, project: Project) {
        self.projects.write().await.insert(0, project);
    }

    /// Whole-entity replace by id. Returns whether anything matched.
    pub async fn update_project(&self, project: Project) -> bool {
        let mut projects = self.projects.write().await;
        match projects.iter_mut().find(|p| p.id == project.id) {
            Some(slot) => {
                *slot = project;
                true
            }
            None => false,
        }
    }

    pub async fn delete_project(&self, id: &str) -> bool {
        let mut projects = self.projects.write().await;
        let before = projects.len();
        projects.retain(|p| p.id != id);
        projects.len() != before
    }

    // ──────────────────────────────────────────────────────────
    // Skills
    // ──────────────────────────────────────────────────────────

    pub async fn skills(&self) -> Vec<Skill> {
        self.skills.read().await.clone()
    }

    /// Sets whatever level arrives; the store does not clamp.
    pub async fn update_skill_level(&self, name: &str, level: u8) -> bool {
        let mut skills = self.skills.write().await;
        match skills.iter_mut().find(|s| s.name == name) {
            Some(skill) => {
                skill.level = level;
                true
            }
            None => false,
        }
    }

    // ──────────────────────────────────────────────────────────
    // Mailbox
    // ──────────────────────────────────────────────────────────

    pub async fn messages(&self) -> Vec<ContactMessage> {
        self.messages.read().await.clone()
    }

    /// Synthesizes id, timestamp and the fresh-message flags, then prepends.
    /// A blank subject becomes the placeholder; priority always starts at
    /// medium.
    pub async fn add_message(&self, incoming: IncomingMessage) -> ContactMessage {
        let subject = if incoming.subject.trim().is_empty() {
            DEFAULT_SUBJECT.to_string()
        } else {
            incoming.subject
        };
        let message = ContactMessage {
            id: Uuid::new_v4(),
            sender_name: incoming.sender_name,
            sender_email: incoming.sender_email,
            subject,
            body: incoming.body,
            timestamp: Utc::now(),
            is_read: false,
            is_archived: false,
            priority: MessagePriority::Medium,
        };
        self.messages.write().await.insert(0, message.clone());
        message
    }

    pub async fn mark_message_read(&self, id: Uuid) -> bool {
        self.with_message(id, |m| m.is_read = true).await
    }

    /// Idempotent: archiving an archived message changes nothing.
    pub async fn archive_message(&self, id: Uuid) -> bool {
        self.with_message(id, |m| m.is_archived = true).await
    }

    pub async fn update_message_priority(&self, id: Uuid, priority: MessagePriority) -> bool {
        self.with_message(id, |m| m.priority = priority).await
    }

    pub async fn delete_message(&self, id: Uuid) -> bool {
        let mut messages = self.messages.write().await;
        let before = messages.len();
        messages.retain(|m| m.id != id);
        messages.len() != before
    }

    async fn with_message<F: FnOnce(&mut ContactMessage)>(&self, id: Uuid, apply: F) -> bool {
        let mut messages = self.messages.write().await;
        match messages.iter_mut().find(|m| m.id == id) {
            Some(message) => {
                apply(message);
                true
            }
            None => false,
        }
    }

    // ──────────────────────────────────────────────────────────
    // Site singletons
    // ──────────────────────────────────────────────────────────

    pub async fn bio(&self) -> String {
        self.bio.read().await.clone()
    }

    pub async fn update_bio(&self, text: String) {
        *self.bio.write().await = text;
    }

    pub async fn assistant_instruction(&self) -> String {
        self.assistant_instruction.read().await.clone()
    }

    pub async fn update_assistant_instruction(&self, text: String) {
        *self.assistant_instruction.write().await = text;
    }

    pub async fn social_links(&self) -> BTreeMap<String, String> {
        self.social_links.read().await.clone()
    }

    /// Keyed upsert; an unknown platform simply gains an entry.
    pub async fn update_social_link(&self, platform: String, url: String) {
        self.social_links.write().await.insert(platform, url);
    }

    pub async fn profile(&self) -> OperatorProfile {
        self.profile.read().await.clone()
    }

    pub async fn update_profile(&self, user: String, role: String, avatar: String) {
        let mut profile = self.profile.write().await;
        profile.user = user;
        profile.role = role;
        profile.avatar = avatar;
    }

    pub async fn touch_last_login(&self) {
        self.profile.write().await.last_login = Utc::now();
    }

    // ──────────────────────────────────────────────────────────
    // Session flags
    // ──────────────────────────────────────────────────────────

    /// Cheap clone of the committed-flag handle for the web-layer guard.
    pub fn authenticated_flag(&self) -> AuthenticatedFlag {
        self.authenticated.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.is_set()
    }

    pub fn set_authenticated(&self, value: bool) {
        self.authenticated.set(value);
    }

    /// Deauthenticate and leave the admin view in one step.
    pub async fn logout(&self) {
        self.authenticated.set(false);
        self.view.write().await.admin_view = false;
        *self.gate_status.write().await = GateStatus::Idle;
    }

    pub async fn gate_status(&self) -> GateStatus {
        *self.gate_status.read().await
    }

    pub async fn set_gate_status(&self, status: GateStatus) {
        *self.gate_status.write().await = status;
    }

    pub async fn view(&self) -> ViewState {
        self.view.read().await.clone()
    }

    pub async fn apply_view_command(&self, command: ViewCommand) -> ViewState {
        let mut view = self.view.write().await;
        match command {
            ViewCommand::ToggleAdmin => view.admin_view = !view.admin_view,
            ViewCommand::ToggleChat => view.chat_open = !view.chat_open,
            ViewCommand::ToggleTheme => {
                view.theme = match view.theme {
                    Theme::Dark => Theme::Light,
                    Theme::Light => Theme::Dark,
                }
            }
            ViewCommand::SelectProject { id } => view.selected_project = id,
            ViewCommand::SetMessageFilter { view: filter } => view.message_filter = filter,
        }
        view.clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mailbox::application::domain::entities::unread_count;

    fn incoming(subject: &str) -> IncomingMessage {
        IncomingMessage {
            sender_name: "A".to_string(),
            sender_email: "a@b.com".to_string(),
            subject: subject.to_string(),
            body: "hi".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_message_synthesizes_fresh_message_defaults() {
        let store = MemoryStore::empty();

        let message = store.add_message(incoming("")).await;

        assert_eq!(message.subject, DEFAULT_SUBJECT);
        assert_eq!(message.priority, MessagePriority::Medium);
        assert!(!message.is_read);
        assert!(!message.is_archived);
    }

    #[tokio::test]
    async fn test_add_message_keeps_a_non_blank_subject() {
        let store = MemoryStore::empty();

        let message = store.add_message(incoming("Contract work")).await;

        assert_eq!(message.subject, "Contract work");
    }

    #[tokio::test]
    async fn test_messages_are_prepended() {
        let store = MemoryStore::empty();

        let first = store.add_message(incoming("first")).await;
        let second = store.add_message(incoming("second")).await;

        let messages = store.messages().await;
        assert_eq!(messages[0].id, second.id);
        assert_eq!(messages[1].id, first.id);
    }

    #[tokio::test]
    async fn test_archive_is_idempotent() {
        let store = MemoryStore::empty();
        let message = store.add_message(incoming("s")).await;

        assert!(store.archive_message(message.id).await);
        let after_first = store.messages().await;

        assert!(store.archive_message(message.id).await);
        let after_second = store.messages().await;

        assert_eq!(after_first, after_second);
        assert!(after_second[0].is_archived);
    }

    #[tokio::test]
    async fn test_deleting_a_missing_message_leaves_the_mailbox_unchanged() {
        let store = MemoryStore::empty();
        store.add_message(incoming("keep me")).await;
        let before = store.messages().await;

        assert!(!store.delete_message(Uuid::new_v4()).await);

        assert_eq!(store.messages().await, before);
    }

    #[tokio::test]
    async fn test_unread_count_tracks_read_and_archive_mutations() {
        let store = MemoryStore::empty();
        let a = store.add_message(incoming("a")).await;
        let b = store.add_message(incoming("b")).await;
        store.add_message(incoming("c")).await;

        assert_eq!(unread_count(&store.messages().await), 3);

        store.mark_message_read(a.id).await;
        assert_eq!(unread_count(&store.messages().await), 2);

        store.archive_message(b.id).await;
        assert_eq!(unread_count(&store.messages().await), 1);
    }

    #[tokio::test]
    async fn test_deleting_a_missing_project_is_a_silent_no_op() {
        let store = MemoryStore::new();
        let before = store.projects().await;

        assert!(!store.delete_project("no-such-id").await);

        assert_eq!(store.projects().await, before);
    }

    #[tokio::test]
    async fn test_updating_an_unknown_skill_matches_nothing() {
        let store = MemoryStore::new();
        let before = store.skills().await;

        assert!(!store.update_skill_level("Fortran", 50).await);

        assert_eq!(store.skills().await, before);
    }

    #[tokio::test]
    async fn test_skill_level_is_overwritten_in_place() {
        let store = MemoryStore::new();

        assert!(store.update_skill_level("React", 42).await);

        let skills = store.skills().await;
        let react = skills.iter().find(|s| s.name == "React").unwrap();
        assert_eq!(react.level, 42);
    }

    #[tokio::test]
    async fn test_logout_clears_flag_and_leaves_admin_view() {
        let store = MemoryStore::new();
        store.set_authenticated(true);
        assert!(store.view().await.admin_view);

        store.logout().await;

        assert!(!store.is_authenticated());
        assert!(!store.view().await.admin_view);
    }

    #[tokio::test]
    async fn test_toggle_theme_flips_between_the_two_themes() {
        let store = MemoryStore::new();
        assert_eq!(store.view().await.theme, Theme::Dark);

        let view = store.apply_view_command(ViewCommand::ToggleTheme).await;
        assert_eq!(view.theme, Theme::Light);

        let view = store.apply_view_command(ViewCommand::ToggleTheme).await;
        assert_eq!(view.theme, Theme::Dark);
    }
}
