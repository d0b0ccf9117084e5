mod content_store_memory;

pub use content_store_memory::ContentStoreMemory;
