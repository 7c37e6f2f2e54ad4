//! # Hash Redirect
//!
//! A URL shortener whose short codes are derived from the URL itself.
//!
//! ## How codes are made
//!
//! Every URL maps to exactly one 8-character lowercase hex code built from
//! its SHA-256 and SHA-512 digests (see [`utils::code_generator`]). Asking to
//! shorten the same URL twice returns the same code. When two URLs happen to
//! share a code, the first one registered keeps it.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Short codes, mappings and the key-value store contract
//! - **Application Layer** ([`application`]) - Registration, lookup and listing
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - Handlers, DTOs and middleware
//!
//! ## Endpoints
//!
//! - `GET /p?url=<url>` - Create a short link (201)
//! - `GET /s/<code>` - Redirect to the original URL (302)
//! - `GET /l` - List every short link (200)
//! - `GET /health` - Store health check
//!
//! ## Quick Start
//!
//! ```bash
//! export APP_ENV="development"
//! export REDIS_URL="redis://localhost:6379"  # Optional, in-memory otherwise
//!
//! cargo run
//! curl -i "http://localhost:8787/p?url=https://example.com/a"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Mapping, Registration, ShortCode};
    pub use crate::domain::repositories::{KeyValueStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{InMemoryStore, RedisStore};
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::derive_code;
}
