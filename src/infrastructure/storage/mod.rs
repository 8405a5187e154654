//! Non-persistent storage backend

mod memory;

pub use memory::InMemoryStorage;
