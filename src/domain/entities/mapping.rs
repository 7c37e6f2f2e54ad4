//! Mapping entity: a short code and the URL it redirects to.

use super::ShortCode;

/// A stored association between a [`ShortCode`] and the original URL.
///
/// The original URL is opaque: it is stored and returned exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub code: ShortCode,
    pub original_url: String,
}

impl Mapping {
    pub fn new(code: ShortCode, original_url: impl Into<String>) -> Self {
        Self {
            code,
            original_url: original_url.into(),
        }
    }

    /// Renders the mapping as a single listing line without the trailing newline.
    pub fn to_listing_line(&self, base_url: &str) -> String {
        format!("{} -> {}", self.code.to_url(base_url), self.original_url)
    }
}

/// Outcome of registering a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// The code was absent and now points at the given URL.
    Created,
    /// The code already pointed at this same URL.
    AlreadyPresent,
    /// The code already pointed at a different URL, which is kept.
    Collision { existing_url: String },
    /// The code was absent when checked but another writer created it
    /// before this write landed; the other writer's URL is kept.
    Raced,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_creation() {
        let code = ShortCode::parse("2dce7d0e").unwrap();
        let mapping = Mapping::new(code.clone(), "https://example.com/a");

        assert_eq!(mapping.code, code);
        assert_eq!(mapping.original_url, "https://example.com/a");
    }

    #[test]
    fn test_listing_line() {
        let mapping = Mapping::new(
            ShortCode::parse("2dce7d0e").unwrap(),
            "https://example.com/a",
        );

        assert_eq!(
            mapping.to_listing_line("http://localhost:8787"),
            "http://localhost:8787/s/2dce7d0e -> https://example.com/a"
        );
    }
}
