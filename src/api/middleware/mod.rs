//! HTTP middleware for request processing.
//!
//! Provides request tracing plus the outer boundary that enforces a deadline
//! and converts panics into 500 responses.

pub mod boundary;
pub mod tracing;
