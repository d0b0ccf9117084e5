pub mod modules;
pub use modules::assistant;
pub use modules::mailbox;
pub use modules::project;
pub use modules::session;
pub use modules::site;
pub use modules::skill;
pub use modules::system;
pub mod api;
pub mod health;
pub mod shared;

use crate::assistant::adapter::outgoing::GeminiHttpClient;
use crate::assistant::application::use_cases::send_chat_message::{
    ISendChatMessageUseCase, SendChatMessageService,
};
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
    apply_view_command::ApplyViewCommandService,
    get_session::GetSessionService,
    logout::LogoutService,
    submit_access_key::{AccessGateService, GateTimers},
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

use actix_web::{web, App, HttpServer, Responder};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

/// The demo access key the source shipped with. `ADMIN_ACCESS_KEY` overrides
/// it, but this gate is never more than a plaintext comparison.
const DEFAULT_ACCESS_KEY: &str = "usman_root";

const DEFAULT_METRICS_REFRESH_SECS: u64 = 5;

#[derive(Clone)]
pub struct AppState {
    pub project: ProjectUseCases,
    pub skill: SkillUseCases,
    pub mailbox: MailboxUseCases,
    pub site: SiteUseCases,
    pub session: SessionUseCases,
    pub chat: Arc<dyn ISendChatMessageUseCase + Send + Sync>,
    pub metrics: Arc<MetricsSampler>,
    pub assistant_configured: bool,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env_name = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let access_key = env::var("ADMIN_ACCESS_KEY").unwrap_or_else(|_| DEFAULT_ACCESS_KEY.to_string());
    let metrics_refresh = env::var("METRICS_REFRESH_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_METRICS_REFRESH_SECS);

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // The whole datastore: one seeded in-memory store, reset on restart.
    let store = Arc::new(MemoryStore::new());
    let auth_flag = store.authenticated_flag();

    // Project use cases
    let project_store = ProjectStoreMemory::new(Arc::clone(&store));
    let project_use_cases = ProjectUseCases {
        create: Arc::new(CreateProjectService::new(project_store.clone())),
        update: Arc::new(UpdateProjectService::new(project_store.clone())),
        delete: Arc::new(DeleteProjectService::new(project_store.clone())),
        get_list: Arc::new(GetProjectsService::new(project_store.clone())),
        get_single: Arc::new(GetSingleProjectService::new(project_store.clone())),
        get_related: Arc::new(GetRelatedProjectsService::new(project_store.clone())),
        get_tags: Arc::new(GetProjectTagsService::new(project_store.clone())),
    };

    // Mailbox use cases
    let message_store = MessageStoreMemory::new(Arc::clone(&store));
    let mailbox_use_cases = MailboxUseCases {
        submit: Arc::new(SubmitMessageService::new(message_store.clone())),
        get_list: Arc::new(GetMessagesService::new(message_store.clone())),
        mark_read: Arc::new(MarkMessageReadService::new(message_store.clone())),
        archive: Arc::new(ArchiveMessageService::new(message_store.clone())),
        set_priority: Arc::new(SetMessagePriorityService::new(message_store.clone())),
        delete: Arc::new(DeleteMessageService::new(message_store.clone())),
        stats: Arc::new(GetMailboxStatsService::new(message_store.clone())),
    };

    // Skill use cases
    let skill_store = SkillStoreMemory::new(Arc::clone(&store));
    let skill_use_cases = SkillUseCases {
        get_list: Arc::new(GetSkillsService::new(skill_store.clone())),
        update_level: Arc::new(UpdateSkillLevelService::new(skill_store.clone())),
    };

    // Site use cases
    let content_store = ContentStoreMemory::new(Arc::clone(&store));
    let site_use_cases = SiteUseCases {
        get_content: Arc::new(GetSiteContentService::new(content_store.clone())),
        update_bio: Arc::new(UpdateBioService::new(content_store.clone())),
        update_social_link: Arc::new(UpdateSocialLinkService::new(content_store.clone())),
        get_instruction: Arc::new(GetAssistantInstructionService::new(content_store.clone())),
        update_instruction: Arc::new(UpdateAssistantInstructionService::new(
            content_store.clone(),
        )),
        update_profile: Arc::new(UpdateProfileService::new(content_store.clone())),
    };

    // Mock access gate + session flags. Demo semantics only.
    let session_state: Arc<dyn SessionStateRepository> =
        Arc::new(SessionStoreMemory::new(Arc::clone(&store)));
    let gate_timers = GateTimers::default();
    let session_use_cases = SessionUseCases {
        submit_access_key: Arc::new(AccessGateService::new(
            Arc::clone(&session_state),
            access_key,
            GateTiming::default(),
            gate_timers.clone(),
        )),
        logout: Arc::new(LogoutService::new(
            Arc::clone(&session_state),
            gate_timers,
        )),
        get_session: Arc::new(GetSessionService::new(
            Arc::clone(&session_state),
            content_store.clone(),
        )),
        apply_view: Arc::new(ApplyViewCommandService::new(Arc::clone(&session_state))),
    };

    // Chat bridge
    let gemini = GeminiHttpClient::from_env();
    let assistant_configured = gemini.is_configured();
    if !assistant_configured {
        warn!("GEMINI_API_KEY is not set; the chat bridge will only serve its canned replies");
    }
    let chat_use_case: Arc<dyn ISendChatMessageUseCase + Send + Sync> = Arc::new(
        SendChatMessageService::new(gemini, content_store.clone()),
    );

    // Simulated dashboard metrics, refreshed for the life of the process.
    let metrics = Arc::new(MetricsSampler::new());
    metrics.start(
        Duration::from_secs(metrics_refresh),
        Arc::new(project_store.clone()),
    );

    let state = AppState {
        project: project_use_cases,
        skill: skill_use_cases,
        mailbox: mailbox_use_cases,
        site: site_use_cases,
        session: session_use_cases,
        chat: chat_use_case,
        metrics,
        assistant_configured,
    };

    HttpServer::new(move || {
        App::new()
            .app_data(shared::api::custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(auth_flag.clone()))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
            .configure(init_routes)
            .default_service(web::route().to(route_fallback))
    })
    .bind(server_url)?
    .run()
    .await
}

/// Everything off the known route table: cosmetic 404, same envelope as
/// every other error.
#[cfg(not(tarpaulin_include))]
async fn route_fallback() -> impl Responder {
    shared::api::ApiResponse::not_found("ROUTE_NOT_FOUND", "No such route")
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Session
    cfg.service(crate::session::adapter::incoming::web::routes::submit_access_key_handler);
    cfg.service(crate::session::adapter::incoming::web::routes::logout_handler);
    cfg.service(crate::session::adapter::incoming::web::routes::get_session_handler);
    cfg.service(crate::session::adapter::incoming::web::routes::apply_view_command_handler);
    // Projects (tags before the id routes so the literal segment wins)
    cfg.service(crate::project::adapter::incoming::web::routes::get_project_tags_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_single_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_related_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    // Mailbox (stats before the id routes)
    cfg.service(crate::mailbox::adapter::incoming::web::routes::get_mailbox_stats_handler);
    cfg.service(crate::mailbox::adapter::incoming::web::routes::submit_message_handler);
    cfg.service(crate::mailbox::adapter::incoming::web::routes::get_messages_handler);
    cfg.service(crate::mailbox::adapter::incoming::web::routes::mark_message_read_handler);
    cfg.service(crate::mailbox::adapter::incoming::web::routes::archive_message_handler);
    cfg.service(crate::mailbox::adapter::incoming::web::routes::set_message_priority_handler);
    cfg.service(crate::mailbox::adapter::incoming::web::routes::delete_message_handler);
    // Skills
    cfg.service(crate::skill::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::update_skill_level_handler);
    // Site
    cfg.service(crate::site::adapter::incoming::web::routes::get_site_content_handler);
    cfg.service(crate::site::adapter::incoming::web::routes::update_bio_handler);
    cfg.service(crate::site::adapter::incoming::web::routes::update_social_link_handler);
    cfg.service(crate::site::adapter::incoming::web::routes::get_assistant_instruction_handler);
    cfg.service(crate::site::adapter::incoming::web::routes::update_assistant_instruction_handler);
    cfg.service(crate::site::adapter::incoming::web::routes::update_profile_handler);
    // Assistant
    cfg.service(crate::assistant::adapter::incoming::web::routes::send_chat_message_handler);
    // System metrics
    cfg.service(crate::system::adapter::incoming::web::routes::get_system_metrics_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
