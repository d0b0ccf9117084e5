pub mod get_assistant_instruction;
pub mod get_site_content;
pub mod update_assistant_instruction;
pub mod update_bio;
pub mod update_profile;
pub mod update_social_link;
