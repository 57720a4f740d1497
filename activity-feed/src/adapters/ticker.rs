//! Interval ticker backed by the tokio timer

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{self, Interval, MissedTickBehavior};

use crate::domain::ports::Ticker;

/// Ticks immediately, then once per `period`, forever
pub struct IntervalTicker {
    interval: Interval,
}

impl IntervalTicker {
    pub fn new(period: Duration) -> Self {
        let mut interval = time::interval(period);
        // A stalled runtime shouldn't produce a burst of catch-up polls
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }
}

#[async_trait]
impl Ticker for IntervalTicker {
    async fn tick(&mut self) -> bool {
        self.interval.tick().await;
        true
    }
}
