mod session_store_memory;

pub use session_store_memory::SessionStoreMemory;
