use actix_web::web;
use std::sync::Arc;

use crate::assistant::application::use_cases::send_chat_message::ISendChatMessageUseCase;
use crate::mailbox::adapter::outgoing::MessageStoreMemory;
use crate::mailbox::application::mailbox_use_cases::MailboxUseCases;
use crate::mailbox::application::use_cases::{
    archive_message::ArchiveMessageService, delete_message::DeleteMessageService,
    get_mailbox_stats::GetMailboxStatsService, get_messages::GetMessagesService,
    mark_message_read::MarkMessageReadService, set_message_priority::SetMessagePriorityService,
    submit_message::SubmitMessageService,
};
use crate::project::adapter::outgoing::ProjectStoreMemory;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectTagsService, GetProjectsService,
    GetRelatedProjectsService, GetSingleProjectService, UpdateProjectService,
};
use crate::session::adapter::outgoing::SessionStoreMemory;
use crate::session::application::domain::entities::GateTiming;
use crate::session::application::ports::outgoing::SessionStateRepository;
use crate::session::application::session_use_cases::SessionUseCases;
use crate::session::application::use_cases::{
    apply_view_command::ApplyViewCommandService, get_session::GetSessionService,
    logout::LogoutService,
    submit_access_key::{AccessGateService, GateTimers, ISubmitAccessKeyUseCase},
};
use crate::shared::store::MemoryStore;
use crate::site::adapter::outgoing::ContentStoreMemory;
use crate::site::application::site_use_cases::SiteUseCases;
use crate::site::application::use_cases::{
    get_assistant_instruction::GetAssistantInstructionService,
    get_site_content::GetSiteContentService,
    update_assistant_instruction::UpdateAssistantInstructionService, update_bio::UpdateBioService,
    update_profile::UpdateProfileService, update_social_link::UpdateSocialLinkService,
};
use crate::skill::adapter::outgoing::SkillStoreMemory;
use crate::skill::application::use_cases::{
    get_skills::GetSkillsService, skill_use_cases::SkillUseCases,
    update_skill_level::UpdateSkillLevelService,
};
use crate::system::application::MetricsSampler;
use crate::tests::support::stubs::StubSendChatMessageUseCase;
use crate::AppState;

/// Real services over a fresh seeded store, with a zero-delay gate and a
/// stubbed chat bridge. Override the pieces a test needs to control.
pub struct TestAppStateBuilder {
    store: Arc<MemoryStore>,
    project: Option<ProjectUseCases>,
    mailbox: Option<MailboxUseCases>,
    submit_access_key: Option<Arc<dyn ISubmitAccessKeyUseCase + Send + Sync>>,
    chat: Option<Arc<dyn ISendChatMessageUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            project: None,
            mailbox: None,
            submit_access_key: None,
            chat: None,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_store(mut self, store: Arc<MemoryStore>) -> Self {
        self.store = store;
        self
    }

    pub fn with_project(mut self, project: ProjectUseCases) -> Self {
        self.project = Some(project);
        self
    }

    pub fn with_mailbox(mut self, mailbox: MailboxUseCases) -> Self {
        self.mailbox = Some(mailbox);
        self
    }

    pub fn with_submit_access_key(
        mut self,
        uc: impl ISubmitAccessKeyUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_access_key = Some(Arc::new(uc));
        self
    }

    pub fn with_chat(mut self, uc: impl ISendChatMessageUseCase + Send + Sync + 'static) -> Self {
        self.chat = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let store = self.store;

        let project_store = ProjectStoreMemory::new(Arc::clone(&store));
        let project = self.project.unwrap_or_else(|| ProjectUseCases {
            create: Arc::new(CreateProjectService::new(project_store.clone())),
            update: Arc::new(UpdateProjectService::new(project_store.clone())),
            delete: Arc::new(DeleteProjectService::new(project_store.clone())),
            get_list: Arc::new(GetProjectsService::new(project_store.clone())),
            get_single: Arc::new(GetSingleProjectService::new(project_store.clone())),
            get_related: Arc::new(GetRelatedProjectsService::new(project_store.clone())),
            get_tags: Arc::new(GetProjectTagsService::new(project_store.clone())),
        });

        let message_store = MessageStoreMemory::new(Arc::clone(&store));
        let mailbox = self.mailbox.unwrap_or_else(|| MailboxUseCases {
            submit: Arc::new(SubmitMessageService::new(message_store.clone())),
            get_list: Arc::new(GetMessagesService::new(message_store.clone())),
            mark_read: Arc::new(MarkMessageReadService::new(message_store.clone())),
            archive: Arc::new(ArchiveMessageService::new(message_store.clone())),
            set_priority: Arc::new(SetMessagePriorityService::new(message_store.clone())),
            delete: Arc::new(DeleteMessageService::new(message_store.clone())),
            stats: Arc::new(GetMailboxStatsService::new(message_store.clone())),
        });

        let skill_store = SkillStoreMemory::new(Arc::clone(&store));
        let skill = SkillUseCases {
            get_list: Arc::new(GetSkillsService::new(skill_store.clone())),
            update_level: Arc::new(UpdateSkillLevelService::new(skill_store.clone())),
        };

        let content_store = ContentStoreMemory::new(Arc::clone(&store));
        let site = SiteUseCases {
            get_content: Arc::new(GetSiteContentService::new(content_store.clone())),
            update_bio: Arc::new(UpdateBioService::new(content_store.clone())),
            update_social_link: Arc::new(UpdateSocialLinkService::new(content_store.clone())),
            get_instruction: Arc::new(GetAssistantInstructionService::new(content_store.clone())),
            update_instruction: Arc::new(UpdateAssistantInstructionService::new(
                content_store.clone(),
            )),
            update_profile: Arc::new(UpdateProfileService::new(content_store.clone())),
        };

        let session_state: Arc<dyn SessionStateRepository> =
            Arc::new(SessionStoreMemory::new(Arc::clone(&store)));
        let timers = GateTimers::default();
        let submit_access_key = self.submit_access_key.unwrap_or_else(|| {
            Arc::new(AccessGateService::new(
                Arc::clone(&session_state),
                "usman_root".to_string(),
                GateTiming::immediate(),
                timers.clone(),
            ))
        });
        let session = SessionUseCases {
            submit_access_key,
            logout: Arc::new(LogoutService::new(Arc::clone(&session_state), timers)),
            get_session: Arc::new(GetSessionService::new(
                Arc::clone(&session_state),
                content_store.clone(),
            )),
            apply_view: Arc::new(ApplyViewCommandService::new(Arc::clone(&session_state))),
        };

        let chat = self
            .chat
            .unwrap_or_else(|| Arc::new(StubSendChatMessageUseCase::reply("stubbed reply")));

        web::Data::new(AppState {
            project,
            skill,
            mailbox,
            site,
            session,
            chat,
            metrics: Arc::new(MetricsSampler::new()),
            assistant_configured: true,
        })
    }
}
