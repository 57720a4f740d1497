//! Error types for the activity feed
//!
//! A poll cycle can fail in two ways that matter to the viewer (transport and
//! decoding) plus one local failure (writing to the display). All of them are
//! caught at the `refresh()` boundary and logged; none reach the display.

use thiserror::Error;

/// Errors raised while fetching, decoding or rendering one snapshot
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Feed returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Decoding error: {0}")]
    Decode(String),

    #[error("Render error: {0}")]
    Render(#[from] std::io::Error),
}

impl FeedError {
    /// Transport failures cover both unreachable hosts and non-2xx replies
    pub fn is_transport(&self) -> bool {
        matches!(self, FeedError::Transport(_) | FeedError::Status { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, FeedError::Decode(_))
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(e: serde_json::Error) -> Self {
        FeedError::Decode(e.to_string())
    }
}
