// src/report/placeholder.rs
// =============================================================================
// Placeholder (DUMMY) metrics.
//
// Real backlink, social and page-speed numbers need paid third-party APIs.
// We don't have those, so these values are random and mean nothing. They
// exist only so the report has the same shape as a full SEO audit.
//
// They are off by default (enable with --placeholders) and every value is
// labelled as a placeholder in the table view.
//
// Rust concepts:
// - Traits: the pipeline doesn't care where the numbers come from, so a
//   test can plug in fixed values instead of random ones
// =============================================================================

use rand::Rng;

use super::{MetricValue, Section, OFF_PAGE_SECTION};

/// A source of stand-in metrics that we can't compute from the page itself
pub trait PlaceholderSource {
    /// The whole "Off-Page SEO" section
    fn off_page(&self) -> Section;

    /// Extra metrics appended to the "Technical SEO" section
    fn technical_extras(&self) -> Vec<(&'static str, MetricValue)>;
}

/// Uniformly random values, in the same ranges a real site might show
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPlaceholders;

impl PlaceholderSource for RandomPlaceholders {
    fn off_page(&self) -> Section {
        let mut rng = rand::thread_rng();

        Section::new(OFF_PAGE_SECTION)
            .with("Backlinks", rng.gen_range(50u64..=500))
            .with("Referring Domains", rng.gen_range(10u64..=100))
            .with("Social Shares", rng.gen_range(20u64..=1000))
    }

    fn technical_extras(&self) -> Vec<(&'static str, MetricValue)> {
        let mut rng = rand::thread_rng();

        vec![
            ("Page Speed Score", MetricValue::Count(rng.gen_range(60..=100))),
            ("Mobile Friendly", MetricValue::Flag(rng.gen_bool(0.5))),
        ]
    }
}

/// Names of every metric a PlaceholderSource may produce
pub const PLACEHOLDER_METRICS: [&str; 5] = [
    "Backlinks",
    "Referring Domains",
    "Social Shares",
    "Page Speed Score",
    "Mobile Friendly",
];

pub fn is_placeholder(metric: &str) -> bool {
    PLACEHOLDER_METRICS.contains(&metric)
}
