//! Event source port trait

use async_trait::async_trait;

use crate::domain::entities::Event;
use crate::error::FeedError;

/// Provides the current event snapshot
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetch and decode the complete, ordered list of events.
    ///
    /// Transport and decoding failures are returned, never partially applied.
    async fn fetch_events(&self) -> Result<Vec<Event>, FeedError>;
}
