//! Redis-backed key-value store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

use crate::domain::repositories::{KeyValueStore, StoreError, StoreResult};

/// Keys fetched per `SCAN` round trip.
const SCAN_BATCH: usize = 500;

/// Redis implementation of [`KeyValueStore`].
///
/// Keys are namespaced with a prefix so the store can share a Redis database
/// with other data. Writes use `SET NX`, so an existing key is never
/// overwritten even when two writers race.
///
/// Unlike a cache, errors are propagated: Redis is the source of truth.
pub struct RedisStore {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, key_prefix: impl Into<String>) -> StoreResult<Self> {
        info!("Connecting to Redis store");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            StoreError::Connection(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis store");

        Ok(Self {
            client: manager,
            key_prefix: key_prefix.into(),
        })
    }

    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }

    fn strip_key<'a>(&self, full_key: &'a str) -> Option<&'a str> {
        full_key.strip_prefix(self.key_prefix.as_str())
    }
}

/// Builds a `SCAN MATCH` pattern selecting every key under `prefix`.
fn scan_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('*');
    pattern
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        let value = conn
            .get::<_, Option<String>>(&full_key)
            .await
            .map_err(|e| StoreError::Operation(format!("GET {} failed: {}", full_key, e)))?;

        debug!(
            "Store {}: {}",
            if value.is_some() { "HIT" } else { "MISS" },
            key
        );
        Ok(value)
    }

    async fn put_if_absent(&self, key: &str, value: &str) -> StoreResult<bool> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        let created = conn
            .set_nx::<_, _, bool>(&full_key, value)
            .await
            .map_err(|e| StoreError::Operation(format!("SETNX {} failed: {}", full_key, e)))?;

        debug!("Store SETNX: {} -> {} (created: {})", key, value, created);
        Ok(created)
    }

    async fn list_keys(&self) -> StoreResult<Vec<String>> {
        let pattern = scan_pattern(&self.key_prefix);
        let mut conn = self.client.clone();
        let mut cursor: u64 = 0;
        let mut keys = Vec::new();

        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH)
                .query_async(&mut conn)
                .await
                .map_err(|e| StoreError::Operation(format!("SCAN failed: {}", e)))?;

            keys.extend(
                batch
                    .iter()
                    .filter_map(|full_key| self.strip_key(full_key))
                    .map(str::to_string),
            );

            if next == 0 {
                break;
            }
            cursor = next;
        }

        // SCAN may return a key more than once.
        keys.sort_unstable();
        keys.dedup();

        debug!("Store SCAN: {} keys", keys.len());
        Ok(keys)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_pattern() {
        assert_eq!(scan_pattern("link:"), "link:*");
        assert_eq!(scan_pattern(""), "*");
    }

    #[test]
    fn test_scan_pattern_escapes_glob_characters() {
        assert_eq!(scan_pattern("a*b?[c]"), "a\\*b\\?\\[c\\]*");
        assert_eq!(scan_pattern("x\\y"), "x\\\\y*");
    }
}
