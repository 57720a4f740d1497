//! Render target port trait
//!
//! The display region a snapshot is drawn into. Implementations only need to
//! support wiping their contents and appending children in order.

use crate::error::FeedError;

pub trait RenderTarget: Send {
    /// Remove everything currently displayed
    fn clear(&mut self) -> Result<(), FeedError>;

    /// Append one event entry after the existing ones
    fn append_entry(
        &mut self,
        text: &str,
        timestamp_text: &str,
        style_class: &str,
    ) -> Result<(), FeedError>;

    /// Append the message shown in place of an empty list
    fn append_placeholder(&mut self, text: &str) -> Result<(), FeedError>;
}
