// src/analyzer/mod.rs
// =============================================================================
// This module contains the fetch-validate-extract pipeline.
//
// Submodules:
// - validate: normalizes and checks the input URL
// - fetch: downloads the page (200 OK or nothing)
// - extract: reads title, meta description, <h1>s and word count
// - probe: looks for robots.txt and sitemap.xml
// - pipeline: runs all of the above and builds the report
// - error: the two ways an analysis can fail
// =============================================================================

mod error;
mod extract;
mod fetch;
mod pipeline;
mod probe;
mod validate;

pub use error::AnalyzeError;
pub use pipeline::Analyzer;
pub use validate::validate;
