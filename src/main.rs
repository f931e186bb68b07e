//! github-desktop-notifications entry point.

use std::process::ExitCode;

use anyhow::{Context, Result};

use github_desktop_notifications::adapters::clock::IntervalTicker;
use github_desktop_notifications::adapters::desktop::DesktopNotifier;
use github_desktop_notifications::adapters::github::GitHubClient;
use github_desktop_notifications::infrastructure::credentials;
use github_desktop_notifications::infrastructure::logging::LoggerImpl;
use github_desktop_notifications::{Config, ConfigLoader, Reconciler, POLL_INTERVAL};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let _logger = match LoggerImpl::init(&config.logging) {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "startup failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<()> {
    let token = credentials::read_token().context("Failed to read GitHub token")?;
    let feed = GitHubClient::new(token, &config.github)?;

    let mut reconciler = Reconciler::new(feed, DesktopNotifier::new());
    let mut ticker = IntervalTicker::new(POLL_INTERVAL);
    reconciler.run(&mut ticker).await;

    Ok(())
}
