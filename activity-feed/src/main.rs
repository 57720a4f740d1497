//! Activity Feed
//!
//! Polls a repository event feed and renders push, pull request and merge
//! activity to the terminal, refreshing on a fixed interval.

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;

#[cfg(test)]
mod test_utils;

use adapters::{HttpEventSource, IntervalTicker, TerminalRenderTarget};
use app::{FeedPoller, POLL_INTERVAL};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout is the display
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,activity_feed=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();

    let source = Arc::new(HttpEventSource::new(&config.feed_api_url)?);
    tracing::info!(
        url = source.events_url(),
        interval_secs = POLL_INTERVAL.as_secs(),
        "Starting activity feed"
    );

    let display = TerminalRenderTarget::new(std::io::stdout(), config.ansi);
    let poller = Arc::new(FeedPoller::new(source, display, chrono::Local));

    tokio::select! {
        _ = poller.run(IntervalTicker::new(POLL_INTERVAL)) => {}
        result = tokio::signal::ctrl_c() => {
            result?;
            tracing::info!("Shutting down");
        }
    }

    Ok(())
}
