//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod http;
pub mod terminal;
pub mod ticker;

pub use http::HttpEventSource;
pub use terminal::TerminalRenderTarget;
pub use ticker::IntervalTicker;
