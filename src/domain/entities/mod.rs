//! Core domain entities.
//!
//! - [`ShortCode`] - The 8-character hex key of a stored URL
//! - [`Mapping`] - A `(ShortCode, original URL)` pair
//! - [`Registration`] - What happened when a mapping was registered

pub mod mapping;
pub mod short_code;

pub use mapping::{Mapping, Registration};
pub use short_code::{InvalidShortCode, SHORT_CODE_LEN, ShortCode};
