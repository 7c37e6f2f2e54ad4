//! Domain layer containing entities and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Short codes and mappings
//! - [`repositories`] - The key-value backend trait implemented by infrastructure
//!
//! The domain layer has no dependency on HTTP or on any concrete backend.

pub mod entities;
pub mod repositories;
