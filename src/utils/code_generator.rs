//! Deterministic short code derivation.
//!
//! A code is built from two independent digests of the URL so the two halves
//! of the code are not slices of the same hash:
//!
//! - the first 4 hex characters of SHA-256, followed by
//! - the 4 hex characters of SHA-512 that end one character before the end
//!   of its hex form (positions `len-5 .. len-1`).
//!
//! The result has 32 bits of entropy. Around 2^16 stored URLs the chance of
//! at least one collision reaches 50%; colliding URLs share a code and the
//! first one registered keeps it.

use crate::domain::entities::{SHORT_CODE_LEN, ShortCode};
use sha2::{Digest, Sha256, Sha512};

/// Hex characters taken from each digest.
const HALF_LEN: usize = SHORT_CODE_LEN / 2;

/// Derives the short code for `url`.
///
/// Pure and total: the same input always gives the same code, on every run
/// and every host. The input is not validated; an empty string is accepted.
///
/// # Examples
///
/// ```ignore
/// let code = derive_code("https://example.com/a");
/// assert_eq!(code.as_str(), "2dce7d0e");
/// ```
pub fn derive_code(url: &str) -> ShortCode {
    let sha256 = hex::encode(Sha256::digest(url.as_bytes()));
    let sha512 = hex::encode(Sha512::digest(url.as_bytes()));

    let tail_end = sha512.len() - 1;
    let tail_start = tail_end - HALF_LEN;

    let mut code = String::with_capacity(SHORT_CODE_LEN);
    code.push_str(&sha256[..HALF_LEN]);
    code.push_str(&sha512[tail_start..tail_end]);

    ShortCode::new_unchecked(code)
}
