//! Domain entities

pub mod event;

pub use event::{decode_events, Action, Event, Timestamp};
