//! Short code value type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of hex characters in every short code.
pub const SHORT_CODE_LEN: usize = 8;

/// An 8-character lowercase hexadecimal identifier for a stored URL.
///
/// Codes are derived from the URL itself (see
/// [`crate::utils::code_generator::derive_code`]) and are never chosen by
/// users. Two different URLs may derive the same code; the store keeps
/// whichever was registered first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortCode(String);

/// Error returned when a string is not a well-formed short code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid short code '{0}': expected {SHORT_CODE_LEN} lowercase hex characters")]
pub struct InvalidShortCode(pub String);

impl ShortCode {
    /// Parses a code received from outside the process (request path, store key).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidShortCode`] unless the input is exactly
    /// [`SHORT_CODE_LEN`] characters of `[0-9a-f]`.
    pub fn parse(code: &str) -> Result<Self, InvalidShortCode> {
        if Self::is_well_formed(code) {
            Ok(Self(code.to_string()))
        } else {
            Err(InvalidShortCode(code.to_string()))
        }
    }

    /// Wraps a string already known to be well formed.
    pub(crate) fn new_unchecked(code: String) -> Self {
        debug_assert!(Self::is_well_formed(&code));
        Self(code)
    }

    pub fn is_well_formed(code: &str) -> bool {
        code.len() == SHORT_CODE_LEN
            && code
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the public short link `<base>/s/<code>`.
    ///
    /// A trailing slash on `base_url` is ignored.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/s/{}", base_url.trim_end_matches('/'), self.0)
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ShortCode {
    type Error = InvalidShortCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ShortCode> for String {
    fn from(code: ShortCode) -> Self {
        code.0
    }
}
