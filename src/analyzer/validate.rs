// src/analyzer/validate.rs
// =============================================================================
// This module turns free-text user input into a URL we are willing to fetch.
//
// Two steps:
// 1. Normalize: trim surrounding whitespace and lower-case EVERYTHING
// 2. Validate: the whole string must look like scheme://labels.tld(/rest)
//
// Known limitation: lower-casing also touches the path and query, and those
// can be case-sensitive on real servers. "/About" and "/about" may be
// different pages. We keep that behavior on purpose (see DESIGN.md).
//
// Rust concepts:
// - Newtype pattern: NormalizedUrl wraps a String so the type system
//   remembers that the string already passed validation
// - Lazy statics: the regex is compiled once, the first time it's used
// =============================================================================

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use super::AnalyzeError;

// scheme: http, https, ftp or ftps
// host:   one or more "label." groups, then an alphabetic TLD of 2+ chars
// rest:   nothing, a bare "/", or "/" or "?" followed by non-whitespace
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:http|ftp)s?://(?:[\w-]+\.)+[a-z]{2,}(?:/?|[/?]\S+)$")
        .expect("URL pattern is a valid regex")
});

/// A URL that has been trimmed, lower-cased and validated.
///
/// The only way to get one outside of tests is [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedUrl(String);

impl NormalizedUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Lets tests point the pipeline at a local mock server, whose
    // "http://127.0.0.1:PORT" address would never pass validation.
    #[cfg(test)]
    pub(crate) fn new_unchecked(url: impl Into<String>) -> Self {
        NormalizedUrl(url.into())
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Trims and lower-cases the input. Does NOT validate.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalizes `raw` and checks that the result is a well-formed
/// HTTP(S)/FTP(S) URL. Never touches the network.
pub fn validate(raw: &str) -> Result<NormalizedUrl, AnalyzeError> {
    let normalized = normalize(raw);

    if URL_PATTERN.is_match(&normalized) {
        Ok(NormalizedUrl(normalized))
    } else {
        tracing::debug!(input = %raw, "rejected input as a URL");
        Err(AnalyzeError::InvalidUrl(raw.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case_and_whitespace() {
        let url = validate("  HTTPS://Example.COM/Path  ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/path");
    }

    #[test]
    fn test_accepts_supported_schemes() {
        for raw in [
            "http://example.com",
            "https://example.com",
            "ftp://files.example.org",
            "ftps://files.example.org",
        ] {
            assert!(validate(raw).is_ok(), "expected {raw} to be valid");
        }
    }

    #[test]
    fn test_accepts_path_and_query_forms() {
        assert!(validate("https://example.com/").is_ok());
        assert!(validate("https://blog.example.co.uk/posts/1?page=2").is_ok());
        assert!(validate("https://example.com?q=rust").is_ok());
        assert!(validate("https://my-site.example.io/a-b_c").is_ok());
    }

    #[test]
    fn test_rejects_missing_structure() {
        for raw in [
            "",
            "   ",
            "example.com",
            "https://",
            "https://localhost",
            "https://example",
            "https://example.c",
            "mailto:someone@example.com",
            "gopher://example.com",
            "http://127.0.0.1",
        ] {
            assert_eq!(
                validate(raw),
                Err(AnalyzeError::InvalidUrl(raw.trim().to_string())),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_partial_matches() {
        // A valid URL followed by junk must not pass
        assert!(validate("https://example.com/a b").is_err());
        assert!(validate("see https://example.com").is_err());
        // Ports are not part of the accepted shape
        assert!(validate("https://example.com:8080").is_err());
    }

    #[test]
    fn test_normalize_does_not_validate() {
        assert_eq!(normalize("  NOT A URL "), "not a url");
    }
}
