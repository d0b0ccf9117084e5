mod message_store_memory;

pub use message_store_memory::MessageStoreMemory;
