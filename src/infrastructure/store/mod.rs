//! Key-value backends for short code mappings.
//!
//! Provides two [`KeyValueStore`](crate::domain::repositories::KeyValueStore)
//! implementations:
//! - [`RedisStore`] - Persistent, shared Redis backend
//! - [`InMemoryStore`] - Process-local backend for development and tests

mod memory;
mod redis_store;

pub use memory::InMemoryStore;
pub use redis_store::RedisStore;
