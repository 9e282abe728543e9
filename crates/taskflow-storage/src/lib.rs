//! TaskFlow Storage Layer
//!
//! Asynchronous key-value facility backing the local store.
//! Values are opaque strings; callers own the encoding.

mod database;
mod error;
mod kv;
mod memory;
mod migrations;

pub use database::Database;
pub use error::StorageError;
pub use kv::KeyValueStore;
pub use memory::MemoryStore;

pub type Result<T> = std::result::Result<T, StorageError>;
