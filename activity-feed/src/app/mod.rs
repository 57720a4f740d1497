//! Application layer
//!
//! Orchestrates poll cycles between the event source and the display.

pub mod feed_poller;

pub use feed_poller::{FeedPoller, POLL_INTERVAL};
