use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

// Session + assistant
use crate::assistant::adapter::incoming::web::routes::{ChatRequest, ChatResponse};
use crate::session::adapter::incoming::web::routes::{GateStatusResponse, SubmitAccessKeyRequest};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Backend API",
        version = "1.0.0",
        description = "Content store, mock admin gate and chat bridge behind the portfolio site",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Session endpoints
        crate::session::adapter::incoming::web::routes::submit_access_key_handler,

        // Assistant endpoints
        crate::assistant::adapter::incoming::web::routes::send_chat_message_handler,

        // Project endpoints
        // get_projects_handler,
        // get_single_project_handler,
        // get_related_projects_handler,
        // get_project_tags_handler,
        // create_project_handler,
        // update_project_handler,
        // delete_project_handler,

        // Mailbox endpoints
        // submit_message_handler,
        // get_messages_handler,
        // get_mailbox_stats_handler,
        // mark_message_read_handler,
        // archive_message_handler,
        // set_message_priority_handler,
        // delete_message_handler,

        // Skill endpoints
        // get_skills_handler,
        // update_skill_level_handler,

        // Site endpoints
        // get_site_content_handler,
        // update_bio_handler,
        // update_social_link_handler,
        // get_assistant_instruction_handler,
        // update_assistant_instruction_handler,
        // update_profile_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<GateStatusResponse>,
            ErrorResponse,
            ErrorDetail,

            // Session DTOs
            SubmitAccessKeyRequest,
            GateStatusResponse,

            // Assistant DTOs
            ChatRequest,
            ChatResponse
        )
    ),
    tags(
        (name = "session", description = "Mock admin gate and view flags (demo only)"),
        (name = "assistant", description = "Chat bridge to the external text-generation endpoint"),
        (name = "projects", description = "Project gallery and admin project log"),
        (name = "mailbox", description = "Contact messages"),
        (name = "skills", description = "Skill matrix"),
        (name = "site", description = "Bio, social links and operator profile"),
    )
)]
pub struct ApiDoc;
