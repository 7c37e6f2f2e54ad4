//! HTTP layer: translates requests into link operations and shapes responses.
//!
//! # Modules
//!
//! - [`dto`] - Request parameters and response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing, deadline and panic recovery
//! - [`routes`] - Route table

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
