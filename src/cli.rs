// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Commands:
// - analyze <url>:  fetch the page and print its SEO report
// - validate <url>: only normalize and check the URL, no network
// =============================================================================

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_FETCH_TIMEOUT_MS, DEFAULT_PROBE_TIMEOUT_MS};

#[derive(Parser, Debug)]
#[command(
    name = "seo-analyzer",
    version = "0.1.0",
    about = "Fetch a web page and report its on-page and technical SEO signals",
    long_about = "seo-analyzer downloads a single page and reports its title, meta description, \
                  <h1> headings and word count, plus whether the site serves robots.txt and \
                  sitemap.xml."
)]
pub struct Cli {
    /// Log what happens to stderr (debug level)
    ///
    /// RUST_LOG, when set, takes precedence over this flag
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a single web page
    ///
    /// Example: seo-analyzer analyze https://example.com --json
    Analyze {
        /// URL to analyze (must include http:// or https://)
        url: String,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,

        /// Timeout for fetching the page, in milliseconds
        #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT_MS)]
        timeout_ms: u64,

        /// Timeout for each robots.txt / sitemap.xml check, in milliseconds
        #[arg(long, default_value_t = DEFAULT_PROBE_TIMEOUT_MS)]
        probe_timeout_ms: u64,

        /// Add RANDOM placeholder metrics (backlinks, shares, page speed, ...)
        ///
        /// These numbers are dummies. They are labelled as such in the table.
        #[arg(long)]
        placeholders: bool,
    },

    /// Normalize and validate a URL without fetching it
    ///
    /// Example: seo-analyzer validate "  HTTPS://Example.COM  "
    Validate {
        /// URL to check
        url: String,

        /// Output the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_defaults() {
        let cli = Cli::try_parse_from(["seo-analyzer", "analyze", "https://example.com"]).unwrap();

        assert!(!cli.verbose);
        match cli.command {
            Commands::Analyze {
                url,
                json,
                timeout_ms,
                probe_timeout_ms,
                placeholders,
            } => {
                assert_eq!(url, "https://example.com");
                assert!(!json);
                assert_eq!(timeout_ms, 10_000);
                assert_eq!(probe_timeout_ms, 5_000);
                assert!(!placeholders);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_analyze_flags() {
        let cli = Cli::try_parse_from([
            "seo-analyzer",
            "analyze",
            "https://example.com",
            "--json",
            "--timeout-ms",
            "2500",
            "--placeholders",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Analyze {
                json: true,
                timeout_ms: 2500,
                placeholders: true,
                ..
            }
        ));
    }

    #[test]
    fn test_validate_command() {
        let cli = Cli::try_parse_from(["seo-analyzer", "validate", "example.com"]).unwrap();
        assert!(matches!(cli.command, Commands::Validate { json: false, .. }));
    }

    #[test]
    fn test_url_is_required() {
        assert!(Cli::try_parse_from(["seo-analyzer", "analyze"]).is_err());
    }
}
