//! Feed renderer
//!
//! Turns an event snapshot into display entries. Everything here is pure
//! except `render_events`, which writes into a `RenderTarget`.

use std::fmt::Display;

use chrono::TimeZone;

use crate::domain::entities::{Action, Event, Timestamp};
use crate::domain::ports::RenderTarget;
use crate::error::FeedError;

/// Shown when the feed has no events
pub const PLACEHOLDER_MESSAGE: &str = "No events yet";

/// Base class shared by every entry
pub const ENTRY_CLASS: &str = "event-entry";

/// Shown in place of a timestamp that could not be read
pub const INVALID_DATE: &str = "Invalid Date";

/// `1/1/2024, 12:00:00 AM`
const LOCAL_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Human-readable message for one event. Depends only on the action and the
/// fields that action uses.
pub fn format_message(event: &Event) -> String {
    match &event.action {
        Action::Push => format!("{} pushed to {}", event.author, event.to_branch),
        Action::PullRequest => format!(
            "{} submitted a pull request from {} to {}",
            event.author, event.from_branch, event.to_branch
        ),
        Action::Merge => format!(
            "{} merged branch {} to {}",
            event.author, event.from_branch, event.to_branch
        ),
        Action::Unknown(raw) => format!("Unknown action: {}", raw),
    }
}

/// Style class for an entry: the base class plus the raw action value
pub fn style_class(action: &Action) -> String {
    format!("{} {}", ENTRY_CLASS, action.as_str())
}

/// Format a timestamp in the viewer's timezone
pub fn format_timestamp<Tz>(timestamp: &Timestamp, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match timestamp.as_datetime() {
        Some(dt) => dt.with_timezone(tz).format(LOCAL_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Replace the target's contents with a rendering of `events`, in order
pub fn render_events<R, Tz>(events: &[Event], target: &mut R, tz: &Tz) -> Result<(), FeedError>
where
    R: RenderTarget + ?Sized,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    target.clear()?;

    if events.is_empty() {
        return target.append_placeholder(PLACEHOLDER_MESSAGE);
    }

    for event in events {
        target.append_entry(
            &format_message(event),
            &format_timestamp(&event.timestamp, tz),
            &style_class(&event.action),
        )?;
    }

    Ok(())
}
