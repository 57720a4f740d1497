//! Domain ports (traits)
//!
//! Port traits define what a poll cycle needs from the outside world.
//! Adapters provide concrete implementations of these traits.

pub mod render_target;
pub mod scheduler;
pub mod source;

pub use render_target::RenderTarget;
pub use scheduler::Ticker;
pub use source::EventSource;
