mod get_assistant_instruction;
mod get_site_content;
mod update_assistant_instruction;
mod update_bio;
mod update_profile;
mod update_social_link;

pub use get_assistant_instruction::get_assistant_instruction_handler;
pub use get_site_content::get_site_content_handler;
pub use update_assistant_instruction::update_assistant_instruction_handler;
pub use update_bio::update_bio_handler;
pub use update_profile::update_profile_handler;
pub use update_social_link::update_social_link_handler;
