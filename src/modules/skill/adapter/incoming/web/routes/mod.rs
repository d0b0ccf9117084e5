mod get_skills;
mod update_skill_level;

pub use get_skills::get_skills_handler;
pub use update_skill_level::update_skill_level_handler;
