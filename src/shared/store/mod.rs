mod memory_store;
mod seed;

pub use memory_store::MemoryStore;
