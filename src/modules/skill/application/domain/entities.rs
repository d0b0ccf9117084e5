use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    Frontend,
    Language,
    Tool,
}

/// A skill gauge on the public matrix. `name` is the unique key; skills are
/// only ever mutated in place by level, never deleted.
///
/// The documented level range is 0-100. The store does not clamp; the admin
/// range input is the only thing enforcing the bound, same as the source
/// system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
}
