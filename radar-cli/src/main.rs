//! Radar Trigger
//!
//! Starts a batch of remote API test runs from a trigger URL, waits for
//! their results and exits non-zero unless every run passed in time.
//!
//! Flow:
//! - Trigger: one GET on the trigger URL yields the runs to track
//! - Poll: every unresolved run is queried once per cycle until all are
//!   terminal or the deadline passes
//! - Verdict: pass/fail counts and timeout decide the exit code

mod config;
mod poll;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use radar_client::{EnvCredentials, RadarClient};
use radar_core::domain::verdict::Verdict;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::poll::Poller;

#[derive(Parser)]
#[command(name = "radar-trigger")]
#[command(about = "Trigger remote API test runs and wait for their results", long_about = None)]
struct Cli {
    /// Trigger URL that starts the test runs
    trigger_url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "radar_cli=info,radar_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(verdict) => ExitCode::from(verdict.exit_code()),
        Err(e) => {
            report::print_error(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<Verdict> {
    let config = Config::from_env();
    config.validate().context("Invalid configuration")?;
    info!(
        "Loaded configuration: api_url={}, poll_interval={:?}, timeout={:?}",
        config.api_url, config.poll_interval, config.timeout
    );

    let client = RadarClient::new(config.api_url.clone(), EnvCredentials::new())
        .with_dashboard_url(config.dashboard_url.clone());

    let runs = client
        .trigger_runs(&cli.trigger_url)
        .await
        .context("Failed to trigger test runs")?;
    report::print_started(runs.len());

    let verdict = Poller::new(&client, config.poll_interval, config.timeout)
        .run(runs)
        .await?;
    report::print_verdict(&verdict, config.timeout);

    Ok(verdict)
}
