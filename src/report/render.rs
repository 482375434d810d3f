// src/report/render.rs
// =============================================================================
// Turns a PageReport (or an error) into text for the terminal.
//
// Two formats:
// - table: one row per metric, CATEGORY / METRIC / VALUE
// - json:  sections as objects, metrics in insertion order
//
// These functions return Strings instead of printing, so tests can look
// at the output. main.rs does the actual println!.
// =============================================================================

use anyhow::Result;
use serde_json::json;
use std::fmt::Write;

use super::placeholder::is_placeholder;
use super::PageReport;
use crate::analyzer::AnalyzeError;

// Longer values are cut so the table stays readable
const MAX_VALUE_WIDTH: usize = 60;

pub fn render_json(report: &PageReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

// Errors keep the same top-level "Error" key in JSON mode
pub fn render_error_json(error: &AnalyzeError) -> Result<String> {
    let body = json!({
        "Error": error.to_string(),
        "Kind": error.kind(),
    });
    Ok(serde_json::to_string_pretty(&body)?)
}

pub fn render_table(report: &PageReport) -> String {
    let mut out = String::new();

    // writeln! into a String can't fail, so the results are ignored
    let _ = writeln!(out, "{:<16} {:<20} {}", "CATEGORY", "METRIC", "VALUE");
    let _ = writeln!(out, "{}", "=".repeat(16 + 1 + 20 + 1 + MAX_VALUE_WIDTH));

    for row in report.rows() {
        let mut value = truncate(&row.value.to_string(), MAX_VALUE_WIDTH);
        if is_placeholder(row.metric) {
            value.push_str(" (placeholder)");
        }
        let _ = writeln!(out, "{:<16} {:<20} {}", row.category, row.metric, value);
    }

    out
}

// Truncates on character boundaries, never in the middle of a code point
fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        value.to_string()
    } else {
        let kept: String = value.chars().take(max_chars - 3).collect();
        format!("{}...", kept)
    }
}
