mod skill_store_memory;

pub use skill_store_memory::SkillStoreMemory;
