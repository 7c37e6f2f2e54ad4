//! Data Transfer Objects for requests and responses.
//!
//! Link endpoints answer in plain text; health answers in JSON.

pub mod health;
pub mod links;
pub mod shorten;
