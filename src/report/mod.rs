// src/report/mod.rs
// =============================================================================
// Everything about the analysis result once the pipeline has produced it.
//
// Submodules:
// - model: PageReport, Section and MetricValue
// - placeholder: random stand-in metrics (off-page, page speed, ...)
// - render: table and JSON output
// =============================================================================

mod model;
mod placeholder;
mod render;

pub use model::{MetricValue, PageReport, Section};
pub use placeholder::{PlaceholderSource, RandomPlaceholders};
pub use render::{render_error_json, render_json, render_table};

// Section names, in the order they appear in a report
pub const ON_PAGE_SECTION: &str = "On-Page SEO";
pub const OFF_PAGE_SECTION: &str = "Off-Page SEO";
pub const TECHNICAL_SECTION: &str = "Technical SEO";
