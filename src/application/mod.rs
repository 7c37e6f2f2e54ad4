//! Application layer services implementing business logic.
//!
//! Services sit between HTTP handlers and the storage contract: they derive
//! codes, enforce first-writer-wins registration and build public links.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation, lookup and listing

pub mod services;
