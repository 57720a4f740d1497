//! Scheduler port trait

use async_trait::async_trait;

/// Source of poll ticks
///
/// Production ticks on a fixed interval; tests tick by hand.
#[async_trait]
pub trait Ticker: Send {
    /// Wait for the next tick. Returns `false` once no more ticks will come.
    async fn tick(&mut self) -> bool;
}
