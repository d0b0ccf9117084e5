pub mod get_skills;
pub mod skill_use_cases;
pub mod update_skill_level;
