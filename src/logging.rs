// src/logging.rs
// =============================================================================
// Sets up `tracing` so log events go to stderr.
//
// stdout is reserved for the report (so --json output can be piped into jq),
// everything diagnostic goes to stderr.
//
// Filter priority:
// 1. RUST_LOG, if set (e.g. RUST_LOG=seo_analyzer=trace)
// 2. -v on the command line: debug for our crate
// 3. otherwise: warnings only
// =============================================================================

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

pub fn init_logging(verbose: bool) -> Result<()> {
    let default_filter = if verbose { "warn,seo_analyzer=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    Ok(())
}
