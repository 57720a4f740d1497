//! Feed poller
//!
//! Drives the fetch, decode and render cycle. Each tick starts an independent
//! refresh; nothing stops two refreshes from overlapping, and whichever
//! finishes last owns the display.

use std::fmt::Display;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::TimeZone;
use tokio::task::JoinSet;

use crate::domain::ports::{EventSource, RenderTarget, Ticker};
use crate::feed::render_events;

/// Fixed delay between poll cycles
pub const POLL_INTERVAL: Duration = Duration::from_secs(15);

/// What one poll cycle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The display now shows this many entries
    Rendered(usize),
    /// The feed was empty and the placeholder is shown
    Empty,
    /// Fetch, decode or render failed; the failure has been logged
    Failed,
}

/// Polls an event source and renders each snapshot into a display
pub struct FeedPoller<S, R, Tz>
where
    S: EventSource,
    R: RenderTarget,
    Tz: TimeZone,
{
    source: Arc<S>,
    target: Arc<Mutex<R>>,
    tz: Tz,
}

impl<S, R, Tz> FeedPoller<S, R, Tz>
where
    S: EventSource + 'static,
    R: RenderTarget + 'static,
    Tz: TimeZone + Send + Sync + 'static,
    Tz::Offset: Display,
{
    pub fn new(source: Arc<S>, target: R, tz: Tz) -> Self {
        Self {
            source,
            target: Arc::new(Mutex::new(target)),
            tz,
        }
    }

    /// Run one poll cycle.
    ///
    /// The display is only touched once a snapshot has been fetched and
    /// decoded, so a failed fetch leaves the previous render in place.
    pub async fn refresh(&self) -> RefreshOutcome {
        let events = match self.source.fetch_events().await {
            Ok(events) => events,
            Err(e) => {
                let kind = if e.is_decode() {
                    "decode"
                } else if e.is_transport() {
                    "transport"
                } else {
                    "other"
                };
                tracing::error!(error = %e, kind, "Error fetching events");
                return RefreshOutcome::Failed;
            }
        };

        tracing::debug!(count = events.len(), "Fetched event snapshot");

        // Held for the whole render so one snapshot is never spliced into another
        let mut target = self.target.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = render_events(&events, &mut *target, &self.tz) {
            tracing::error!(error = %e, "Error rendering events");
            return RefreshOutcome::Failed;
        }

        if events.is_empty() {
            RefreshOutcome::Empty
        } else {
            RefreshOutcome::Rendered(events.len())
        }
    }

    /// Refresh on every tick until the ticker runs out.
    ///
    /// Refreshes are spawned, not awaited, so a slow request never delays the
    /// next tick. In-flight refreshes are awaited before returning.
    pub async fn run<T: Ticker>(self: Arc<Self>, mut ticker: T) {
        let mut in_flight = JoinSet::new();

        while ticker.tick().await {
            // Reap finished cycles so the set doesn't grow forever
            while in_flight.try_join_next().is_some() {}

            let poller = Arc::clone(&self);
            in_flight.spawn(async move { poller.refresh().await });
        }

        tracing::debug!(pending = in_flight.len(), "Ticker stopped, draining refreshes");
        while in_flight.join_next().await.is_some() {}
    }
}
