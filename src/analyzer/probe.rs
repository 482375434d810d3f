// src/analyzer/probe.rs
// =============================================================================
// This module checks whether a site publishes the usual crawler helpers:
// - /robots.txt
// - /sitemap.xml
//
// A resource counts as "found" only when the server answers exactly 200.
// We never look inside the files, presence is all we report.
//
// The two checks are independent. If robots.txt times out, the sitemap
// check still runs and still reports its own result. We run both at the
// same time with futures::join!, which is only faster, not different.
// =============================================================================

use reqwest::Client;
use std::time::Duration;

use super::fetch::fetch;
use crate::report::{Section, TECHNICAL_SECTION};

/// Presence of the well-known auxiliary resources
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TechnicalMetrics {
    pub robots_txt_found: bool,
    pub sitemap_xml_found: bool,
}

impl TechnicalMetrics {
    pub fn to_section(&self) -> Section {
        Section::new(TECHNICAL_SECTION)
            .with("robots.txt Found", self.robots_txt_found)
            .with("sitemap.xml Found", self.sitemap_xml_found)
    }
}

// Builds "{base}/{resource}" after dropping any trailing slashes from base
fn resource_url(base: &str, resource: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), resource)
}

// Probes `base` for robots.txt and sitemap.xml
//
// Parameters:
//   client: shared HTTP client
//   base: the page URL. Note this is NOT reduced to the site root, so a
//         base of https://example.com/blog/ probes /blog/robots.txt
//   timeout: limit for each of the two requests
pub async fn probe(client: &Client, base: &str, timeout: Duration) -> TechnicalMetrics {
    let robots_url = resource_url(base, "robots.txt");
    let sitemap_url = resource_url(base, "sitemap.xml");

    let (robots, sitemap) = futures::join!(
        is_present(client, &robots_url, timeout),
        is_present(client, &sitemap_url, timeout),
    );

    TechnicalMetrics {
        robots_txt_found: robots,
        sitemap_xml_found: sitemap,
    }
}

// Errors stay local: any failure is just "not found"
async fn is_present(client: &Client, url: &str, timeout: Duration) -> bool {
    let found = fetch(client, url, timeout).await.is_content();
    tracing::debug!(%url, found, "probed resource");
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::fetch::build_client;
    use crate::config::AnalyzerConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> Client {
        build_client(&AnalyzerConfig::default()).unwrap()
    }

    #[test]
    fn test_resource_url_strips_trailing_slashes() {
        assert_eq!(
            resource_url("https://example.com", "robots.txt"),
            "https://example.com/robots.txt"
        );
        assert_eq!(
            resource_url("https://example.com//", "sitemap.xml"),
            "https://example.com/sitemap.xml"
        );
        assert_eq!(
            resource_url("https://example.com/blog/", "robots.txt"),
            "https://example.com/blog/robots.txt"
        );
    }

    #[tokio::test]
    async fn test_robots_found_sitemap_missing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/robots.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/sitemap.xml"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let base = format!("{}/", server.uri());
        let metrics = probe(&client(), &base, Duration::from_secs(5)).await;

        assert_eq!(
            metrics,
            TechnicalMetrics {
                robots_txt_found: true,
                sitemap_xml_found: false,
            }
        );
    }

    #[tokio::test]
    async fn test_slow_resource_does_not_affect_the_other() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/robots.txt"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(1_000)))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/sitemap.xml"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<urlset/>"))
            .mount(&server)
            .await;

        let metrics = probe(&client(), &server.uri(), Duration::from_millis(200)).await;

        assert!(!metrics.robots_txt_found);
        assert!(metrics.sitemap_xml_found);
    }

    #[tokio::test]
    async fn test_unreachable_site_reports_nothing_found() {
        let metrics = probe(&client(), "http://127.0.0.1:9", Duration::from_secs(2)).await;
        assert_eq!(metrics, TechnicalMetrics::default());
    }

    #[test]
    fn test_section_keys() {
        let section = TechnicalMetrics {
            robots_txt_found: true,
            sitemap_xml_found: false,
        }
        .to_section();

        assert_eq!(section.name(), "Technical SEO");
        let names: Vec<&str> = section.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["robots.txt Found", "sitemap.xml Found"]);
    }
}
