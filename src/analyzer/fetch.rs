// src/analyzer/fetch.rs
// =============================================================================
// This module downloads the page we are going to analyze.
//
// Key functionality:
// - One GET request, with our User-Agent and an explicit timeout
// - Only an exact 200 OK counts as content
// - Every other outcome (404, 500, timeout, DNS, TLS, ...) is "Absent"
// - No retries: a single attempt, fail fast
//
// The caller can't tell a timeout from a 404. That is intentional: the
// report only cares whether we have a page. The concrete reason is still
// logged at debug level for anyone running with -v.
//
// Rust concepts:
// - Enums with data: FetchResult carries the body only when there is one
// - async/await: the request runs on the tokio runtime
// =============================================================================

use anyhow::Result;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::config::AnalyzerConfig;

// The outcome of fetching one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// The server answered 200 OK with this body
    Content(String),
    /// Anything else
    Absent,
}

impl FetchResult {
    pub fn is_content(&self) -> bool {
        matches!(self, FetchResult::Content(_))
    }
}

// Builds the HTTP client shared by the fetcher and the resource probe.
//
// Timeouts are set per request, not here, because the page fetch and the
// probes use different limits.
pub fn build_client(config: &AnalyzerConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()?;
    Ok(client)
}

// Fetches `url` and returns its body if, and only if, the status is 200.
//
// Parameters:
//   client: shared reqwest client (cheap to clone, but we only borrow it)
//   url: the URL to fetch
//   timeout: upper bound for the whole request, body included
pub async fn fetch(client: &Client, url: &str, timeout: Duration) -> FetchResult {
    let response = match client.get(url).timeout(timeout).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!(%url, cause = describe_error(&e), "request failed");
            return FetchResult::Absent;
        }
    };

    let status = response.status();
    if status != StatusCode::OK {
        tracing::debug!(%url, status = status.as_u16(), "non-200 response");
        return FetchResult::Absent;
    }

    // The timeout also covers reading the body, so a server that stalls
    // half way through still ends up here as an error
    match response.text().await {
        Ok(body) => {
            tracing::debug!(%url, bytes = body.len(), "fetched page");
            FetchResult::Content(body)
        }
        Err(e) => {
            tracing::debug!(%url, cause = describe_error(&e), "failed to read body");
            FetchResult::Absent
        }
    }
}

// Turns a reqwest error into a short label for the logs.
// Never shown to the caller.
fn describe_error(error: &reqwest::Error) -> &'static str {
    if error.is_timeout() {
        "timeout"
    } else if error.is_redirect() {
        "too many redirects"
    } else if error.is_connect() {
        "connection failed"
    } else if error.is_builder() {
        "unsupported url"
    } else if error.is_body() || error.is_decode() {
        "body error"
    } else {
        "request error"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_USER_AGENT;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> Client {
        build_client(&AnalyzerConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_returns_body_on_200() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .and(header("user-agent", DEFAULT_USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>hello</p>"))
            .expect(1)
            .mount(&server)
            .await;

        let url = format!("{}/page", server.uri());
        let result = fetch(&client(), &url, Duration::from_secs(5)).await;

        assert_eq!(result, FetchResult::Content("<p>hello</p>".to_string()));
    }

    #[tokio::test]
    async fn test_fetch_404_is_absent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
            .mount(&server)
            .await;

        let url = format!("{}/missing", server.uri());
        let result = fetch(&client(), &url, Duration::from_secs(5)).await;

        assert_eq!(result, FetchResult::Absent);
    }

    #[tokio::test]
    async fn test_fetch_other_success_codes_are_absent() {
        // Only an exact 200 counts
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let result = fetch(&client(), &server.uri(), Duration::from_secs(5)).await;

        assert!(!result.is_content());
    }

    #[tokio::test]
    async fn test_fetch_timeout_is_absent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("too late")
                    .set_delay(Duration::from_millis(1_000)),
            )
            .mount(&server)
            .await;

        let result = fetch(&client(), &server.uri(), Duration::from_millis(100)).await;

        assert_eq!(result, FetchResult::Absent);
    }

    #[tokio::test]
    async fn test_fetch_makes_a_single_attempt() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let result = fetch(&client(), &server.uri(), Duration::from_secs(5)).await;

        assert_eq!(result, FetchResult::Absent);
        // `expect(1)` is verified when the server is dropped
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host_is_absent() {
        // Port 9 (discard) on localhost is almost never listening
        let result = fetch(&client(), "http://127.0.0.1:9/", Duration::from_secs(2)).await;
        assert_eq!(result, FetchResult::Absent);
    }

    #[tokio::test]
    async fn test_fetch_unsupported_scheme_is_absent() {
        // ftp:// passes validation, but reqwest can't speak it
        let result = fetch(&client(), "ftp://files.example.org", Duration::from_secs(2)).await;
        assert_eq!(result, FetchResult::Absent);
    }
}
