//! In-memory storage backend.

pub mod chat_store;

pub use chat_store::InMemoryChatStore;
