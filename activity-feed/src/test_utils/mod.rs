//! Test utilities
//!
//! Hand-written mocks and fixtures for unit testing.
//!
//! The mocks model the outside world just closely enough to observe a poll
//! cycle: a scripted event source, a container that records its children, and
//! a ticker driven from the test body.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use logs::*;
pub use mocks::*;
