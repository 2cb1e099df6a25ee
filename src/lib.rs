pub mod checks;
pub mod client;
pub mod report;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::checks::Harness;
use crate::client::ApiClient;

const DEFAULT_BASE_URL: &str =
    "https://741246cc-dd1b-4d51-a6e5-49f35380c96b.preview.emergentagent.com";

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the status-check API under probe
    #[clap(long, env, default_value = DEFAULT_BASE_URL, value_parser = normalize_base_url)]
    pub base_url: String,
    #[clap(long, env, default_value = "info")]
    log_level: LevelFilter,
}

#[allow(clippy::unnecessary_wraps)]
fn normalize_base_url(val: &str) -> Result<String, String> {
    let trimmed = val.strip_suffix('/').unwrap_or(val);
    Ok(trimmed.to_string())
}

/// Runs the probe with the provided CLI configuration.
///
/// Initializes logging, builds the HTTP client bound to the configured base
/// URL, and executes the full check sequence. The returned value is the
/// process exit code: 0 when every check passed, 1 otherwise.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed. Failures of
/// individual checks never surface here; they are reported through the
/// console output and the exit code.
pub async fn run(cli: Cli) -> Result<i32> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(cli.log_level)
        .with(fmt::layer())
        .init();

    let client = ApiClient::new(cli.base_url)?;
    info!(base_url = client.base_url(), "Probe configured");

    let harness = Harness::new(client);
    Ok(harness.run_all_tests().await)
}
