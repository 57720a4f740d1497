//! Domain layer
//!
//! Contains the feed data model with no knowledge of transport or display.
//! - `entities`: The event snapshot model
//! - `ports`: Trait definitions for the feed source, display and scheduler

pub mod entities;
pub mod ports;
