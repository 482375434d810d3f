// src/analyzer/error.rs
// =============================================================================
// The two ways an analysis can fail.
//
// The pipeline only ever reports one of two outcomes to the caller:
// - the input was not a usable URL (we never touched the network)
// - we could not get the page (timeout, DNS, refused, TLS, non-200, ...)
//
// The concrete network cause is deliberately NOT part of the error. It is
// logged at debug level by the fetcher, but callers only see FetchFailed.
// =============================================================================

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    /// The input failed syntactic validation
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// No content could be retrieved for the URL
    #[error("Could not fetch website: {0}")]
    FetchFailed(String),
}

impl AnalyzeError {
    /// Short machine-friendly name, used in JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            AnalyzeError::InvalidUrl(_) => "invalid_url",
            AnalyzeError::FetchFailed(_) => "fetch_failed",
        }
    }
}
