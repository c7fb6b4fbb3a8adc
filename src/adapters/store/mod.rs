mod memory;

pub use memory::MemoryWindowStore;
