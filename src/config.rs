// src/config.rs
// =============================================================================
// Settings for one analysis run.
//
// The defaults are compile-time constants. The CLI can override the two
// timeouts, everything else is fixed.
// =============================================================================

use std::time::Duration;

/// Timeout for fetching the page itself
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;

/// Timeout for each robots.txt / sitemap.xml probe
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 5_000;

/// Sent with every request. Some servers refuse clients without one.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; seo-analyzer/0.1)";

#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub fetch_timeout: Duration,
    pub probe_timeout: Duration,
    pub user_agent: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
            probe_timeout: Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl AnalyzerConfig {
    // Builds a config from the millisecond values the CLI hands us
    pub fn with_timeouts(fetch_timeout_ms: u64, probe_timeout_ms: u64) -> Self {
        Self {
            fetch_timeout: Duration::from_millis(fetch_timeout_ms),
            probe_timeout: Duration::from_millis(probe_timeout_ms),
            ..Self::default()
        }
    }
}
