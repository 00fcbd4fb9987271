use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unusable.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "house_score=debug"
    } else {
        "house_score=info"
    }
}

/// Pick the log filter: a parseable `rust_log` wins, anything else falls back
/// to [`default_filter`].
pub fn build_filter(rust_log: Option<&str>, verbose: bool) -> Result<EnvFilter> {
    if let Some(directives) = rust_log.filter(|s| !s.trim().is_empty()) {
        match EnvFilter::try_new(directives) {
            Ok(filter) => return Ok(filter),
            Err(e) => eprintln!("Ignoring RUST_LOG '{}': {}", directives, e),
        }
    }

    let fallback = default_filter(verbose);
    EnvFilter::try_new(fallback)
        .with_context(|| format!("Invalid default log filter '{}'", fallback))
}

/// Install the stderr log subscriber for score runs.
///
/// Logs go to stderr without colors so report output on stdout stays clean
/// for `--format json` and `--format tsv`.
pub fn init(verbose: bool) -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = build_filter(rust_log.as_deref(), verbose)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))
}
