// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr only)
// 3. Dispatch to the appropriate subcommand handler
// 4. Print the report (table or JSON) to stdout
// 5. Exit with proper code (0 = report printed, 1 = analysis failed,
//    2 = internal error)
// =============================================================================

mod analyzer;      // src/analyzer/ - validate, fetch, extract, probe
mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - timeouts and user agent
mod logging;       // src/logging.rs - tracing setup
mod report;        // src/report/ - report model and rendering

use analyzer::{AnalyzeError, Analyzer};
use clap::Parser;
use cli::{Cli, Commands};
use config::AnalyzerConfig;
use report::{PageReport, RandomPlaceholders, ON_PAGE_SECTION};

use anyhow::Result;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Anything that isn't an analysis outcome ends up here
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = report printed
//   Ok(1) = invalid URL or the page could not be fetched
//   Err   = unexpected error (exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    match cli.command {
        Commands::Analyze {
            url,
            json,
            timeout_ms,
            probe_timeout_ms,
            placeholders,
        } => {
            let config = AnalyzerConfig::with_timeouts(timeout_ms, probe_timeout_ms);
            let mut analyzer = Analyzer::new(config)?;
            if placeholders {
                analyzer = analyzer.with_placeholders(RandomPlaceholders);
            }
            handle_analyze(&analyzer, &url, json).await
        }
        Commands::Validate { url, json } => handle_validate(&url, json),
    }
}

// Handles the 'analyze' subcommand
async fn handle_analyze(analyzer: &Analyzer, url: &str, json: bool) -> Result<i32> {
    if !json {
        println!("🔍 Analyzing: {}", url.trim());
    }

    match analyzer.analyze(url).await {
        Ok(report) => {
            if json {
                println!("{}", report::render_json(&report)?);
            } else {
                println!();
                print!("{}", report::render_table(&report));
                println!();
                print_summary(&report);
            }
            Ok(0)
        }
        Err(e) => {
            print_error(&e, json)?;
            Ok(1)
        }
    }
}

// Handles the 'validate' subcommand. Never touches the network.
fn handle_validate(url: &str, json: bool) -> Result<i32> {
    match analyzer::validate(url) {
        Ok(normalized) => {
            if json {
                let body = serde_json::json!({ "URL": normalized });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                println!("✅ Valid: {}", normalized);
            }
            Ok(0)
        }
        Err(e) => {
            print_error(&e, json)?;
            Ok(1)
        }
    }
}

fn print_error(error: &AnalyzeError, json: bool) -> Result<()> {
    if json {
        // Errors stay on stdout in JSON mode so scripts see a single document
        println!("{}", report::render_error_json(error)?);
    } else {
        eprintln!("❌ {}", error);
    }
    Ok(())
}

fn print_summary(report: &PageReport) {
    let metric_count: usize = report.sections().iter().map(|s| s.len()).sum();

    println!("📊 Summary:");
    println!("   📂 Sections: {}", report.sections().len());
    println!("   📋 Metrics: {}", metric_count);

    if let Some(on_page) = report.section(ON_PAGE_SECTION) {
        if let Some(words) = on_page.get("Word Count") {
            println!("   📝 Words: {}", words);
        }
        if let Some(h1) = on_page.get("H1 Count") {
            println!("   🔠 H1 tags: {}", h1);
        }
    }
}
