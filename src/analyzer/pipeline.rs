// src/analyzer/pipeline.rs
// =============================================================================
// Ties the pieces together:
//
//   raw input -> validate -> fetch -> extract ---\
//                                 \-> probe -----+-> PageReport
//
// Rules:
// - An invalid URL stops everything before any network access
// - A failed fetch (Absent, or an empty page) stops everything too; we
//   never return a half-filled report
// - Probe failures are NOT pipeline failures, they just become `false`
//
// An Analyzer holds no state between runs apart from its HTTP client and
// settings, so one instance can analyze as many URLs as you like.
// =============================================================================

use anyhow::Result;
use reqwest::Client;

use super::extract::extract;
use super::fetch::{build_client, fetch, FetchResult};
use super::probe::probe;
use super::validate::{validate, NormalizedUrl};
use super::AnalyzeError;
use crate::config::AnalyzerConfig;
use crate::report::{PageReport, PlaceholderSource, TECHNICAL_SECTION};

pub struct Analyzer {
    client: Client,
    config: AnalyzerConfig,
    // Optional stand-in metrics. None means the report only has real data.
    placeholders: Option<Box<dyn PlaceholderSource + Send + Sync>>,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(&config)?,
            config,
            placeholders: None,
        })
    }

    // Adds an Off-Page section and extra technical metrics from `source`
    pub fn with_placeholders(mut self, source: impl PlaceholderSource + Send + Sync + 'static) -> Self {
        self.placeholders = Some(Box::new(source));
        self
    }

    /// Runs the whole pipeline on free-text input
    pub async fn analyze(&self, raw: &str) -> Result<PageReport, AnalyzeError> {
        let url = validate(raw)?;
        self.analyze_url(&url).await
    }

    /// Runs the pipeline on an already validated URL
    pub async fn analyze_url(&self, url: &NormalizedUrl) -> Result<PageReport, AnalyzeError> {
        tracing::info!(%url, "analyzing page");

        let html = match fetch(&self.client, url.as_str(), self.config.fetch_timeout).await {
            // An empty page has nothing to analyze, same as no page at all
            FetchResult::Content(body) if !body.is_empty() => body,
            _ => {
                tracing::warn!(%url, "could not fetch page");
                return Err(AnalyzeError::FetchFailed(url.to_string()));
            }
        };

        let on_page = extract(&html);
        let technical = probe(&self.client, url.as_str(), self.config.probe_timeout).await;

        let mut report = PageReport::new();
        report.push_section(on_page.to_section());
        if let Some(source) = &self.placeholders {
            report.push_section(source.off_page());
        }
        report.push_section(technical.to_section());

        if let Some(source) = &self.placeholders {
            if let Some(section) = report.section_mut(TECHNICAL_SECTION) {
                for (name, value) in source.technical_extras() {
                    section.insert(name, value);
                }
            }
        }

        tracing::info!(
            %url,
            words = on_page.word_count,
            h1 = on_page.h1_count(),
            robots = technical.robots_txt_found,
            sitemap = technical.sitemap_xml_found,
            "analysis finished"
        );

        Ok(report)
    }
}
