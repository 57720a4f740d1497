//! Feed module
//!
//! Human-readable rendering of event snapshots.

pub mod renderer;

pub use renderer::render_events;
