//! Short link creation, lookup and listing service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::entities::{Mapping, Registration, ShortCode};
use crate::domain::repositories::KeyValueStore;
use crate::error::AppError;
use crate::utils::code_generator::derive_code;

/// Gateway between HTTP handlers and the key-value backend.
///
/// Enforces first-writer-wins: a code, once registered, keeps its URL for
/// the lifetime of the store. There is no update or delete.
///
/// The public origin used in short links is injected at construction so the
/// service never reads process-wide configuration.
pub struct LinkService {
    store: Arc<dyn KeyValueStore>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// # Arguments
    ///
    /// - `store` - Backend holding code → URL pairs
    /// - `base_url` - Public origin prepended to `/s/<code>`
    pub fn new(store: Arc<dyn KeyValueStore>, base_url: impl Into<String>) -> Self {
        Self {
            store,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Reads the URL registered under `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backend fails.
    pub async fn lookup(&self, code: &ShortCode) -> Result<Option<String>, AppError> {
        Ok(self.store.get(code.as_str()).await?)
    }

    /// Registers `code → url` unless the code is already taken.
    ///
    /// The existing value is read first and the write is only issued when the
    /// code is absent. The write itself is put-if-absent, so a writer that
    /// loses a race with a concurrent registration never overwrites it.
    ///
    /// An occupied code is not an error, whatever URL it holds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backend fails.
    pub async fn register(&self, code: &ShortCode, url: &str) -> Result<Registration, AppError> {
        if let Some(existing_url) = self.lookup(code).await? {
            if existing_url == url {
                debug!("Code {} already registered for {}", code, url);
                return Ok(Registration::AlreadyPresent);
            }

            warn!(
                %code,
                requested_url = url,
                existing_url = %existing_url,
                "Short code collision, keeping first URL"
            );
            return Ok(Registration::Collision { existing_url });
        }

        if self.store.put_if_absent(code.as_str(), url).await? {
            debug!("Registered {} -> {}", code, url);
            Ok(Registration::Created)
        } else {
            warn!(%code, requested_url = url, "Code registered concurrently, keeping first URL");
            Ok(Registration::Raced)
        }
    }

    /// Lists every stored mapping, ordered by code.
    ///
    /// Keys that are not valid short codes, or that disappear between listing
    /// and reading, are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backend fails.
    pub async fn enumerate(&self) -> Result<Vec<Mapping>, AppError> {
        let keys = self.store.list_keys().await?;
        let mut mappings = Vec::with_capacity(keys.len());

        for key in keys {
            let code = match ShortCode::parse(&key) {
                Ok(code) => code,
                Err(e) => {
                    warn!("Skipping foreign key in store: {}", e);
                    continue;
                }
            };

            if let Some(url) = self.store.get(code.as_str()).await? {
                mappings.push(Mapping::new(code, url));
            }
        }

        mappings.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(mappings)
    }

    /// Derives the code for `url` and registers it.
    ///
    /// Returns the derived code paired with the URL that was asked for. When
    /// the code already belongs to a different URL the caller still receives
    /// the derived code; the collision is only logged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backend fails.
    pub async fn shorten(&self, url: &str) -> Result<(Mapping, Registration), AppError> {
        let code = derive_code(url);
        let registration = self.register(&code, url).await?;

        Ok((Mapping::new(code, url), registration))
    }

    /// Resolves a raw code taken from a request to its stored URL.
    ///
    /// Malformed codes can never have been registered and are reported as not
    /// found without touching the backend.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no URL is stored for `code`.
    /// Returns [`AppError::Internal`] if the backend fails.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let not_found = || AppError::not_found("Short link not found", json!({ "code": code }));

        let code = ShortCode::parse(code).map_err(|_| not_found())?;

        self.lookup(&code).await?.ok_or_else(not_found)
    }

    /// Builds the public short link for `code`.
    pub fn short_url(&self, code: &ShortCode) -> String {
        code.to_url(&self.base_url)
    }

    /// Reports whether the backend is reachable.
    pub async fn store_healthy(&self) -> bool {
        self.store.health_check().await
    }
}
