//! Key-value backend contract required by the mapping store.

use async_trait::async_trait;

/// Errors raised by a key-value backend.
///
/// These are never shown to HTTP clients; they surface as a generic 500
/// (see [`crate::error::AppError`]).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    Connection(String),

    #[error("Store operation error: {0}")]
    Operation(String),
}

/// Result type for backend operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Minimal key-value backend holding short code → URL pairs.
///
/// Keys are opaque strings here; the typed view lives in
/// [`crate::application::services::LinkService`]. Implementations must be
/// safe to share across requests and must never delete or overwrite keys.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::InMemoryStore`] - Process-local map
/// - [`crate::infrastructure::store::RedisStore`] - Redis-backed store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` if the key exists
    /// - `Ok(None)` if it does not
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes `value` under `key` only if the key is absent.
    ///
    /// Returns `true` if this call created the key, `false` if it already
    /// existed (the stored value is left untouched).
    async fn put_if_absent(&self, key: &str, value: &str) -> StoreResult<bool>;

    /// Lists every key currently present.
    ///
    /// Best-effort snapshot: keys written concurrently may or may not appear.
    async fn list_keys(&self) -> StoreResult<Vec<String>>;

    /// Checks whether the backend is reachable.
    async fn health_check(&self) -> bool;
}
