//! HTTP request handlers.
//!
//! Each handler module corresponds to one request intent.

pub mod fallback;
pub mod health;
pub mod links;
pub mod redirect;
pub mod shorten;

pub use fallback::not_found_handler;
pub use health::health_handler;
pub use links::list_handler;
pub use redirect::{missing_code_handler, redirect_handler};
pub use shorten::shorten_handler;
