//! Feed event domain entity
//!
//! An event is one repository action reported by the feed service. The
//! dashboard never creates or mutates events; it reads a snapshot per poll
//! and throws it away after rendering.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

use crate::error::FeedError;

/// Kind of repository action
///
/// Unknown values are kept verbatim so they can still be shown and styled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Push,
    PullRequest,
    Merge,
    Unknown(String),
}

impl Action {
    /// The raw wire value, as sent by the feed service
    pub fn as_str(&self) -> &str {
        match self {
            Action::Push => "PUSH",
            Action::PullRequest => "PULL_REQUEST",
            Action::Merge => "MERGE",
            Action::Unknown(raw) => raw,
        }
    }
}

impl From<&str> for Action {
    fn from(s: &str) -> Self {
        // Wire values are case-sensitive: "push" is not a push.
        match s {
            "PUSH" => Action::Push,
            "PULL_REQUEST" => Action::PullRequest,
            "MERGE" => Action::Merge,
            other => Action::Unknown(other.to_string()),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point in time an event happened
///
/// Strings are RFC 3339, RFC 2822, or a naive ISO datetime or date taken
/// as UTC (a bare date is midnight).
/// Numbers are epoch milliseconds. Anything else is `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    At(DateTime<Utc>),
    Invalid,
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

impl Timestamp {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::parse(s),
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.floor() as i64))
                .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
                .map(Timestamp::At)
                .unwrap_or(Timestamp::Invalid),
            _ => Timestamp::Invalid,
        }
    }

    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Timestamp::At(dt.with_timezone(&Utc));
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
            return Timestamp::At(dt.with_timezone(&Utc));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
            .map(|naive| Timestamp::At(naive.and_utc()))
            .unwrap_or(Timestamp::Invalid)
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::At(dt) => Some(*dt),
            Timestamp::Invalid => None,
        }
    }
}

/// One feed record
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub request_id: Option<String>,
    pub action: Action,
    pub author: String,
    /// Only meaningful for pull requests and merges
    pub from_branch: String,
    pub to_branch: String,
    pub timestamp: Timestamp,
}

impl Event {
    /// Read one record leniently.
    ///
    /// Missing or oddly-typed fields never fail the record: strings default to
    /// empty, scalars are stringified, and a non-object element becomes an
    /// unknown action carrying its JSON text.
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(fields) = value else {
            return Event {
                request_id: None,
                action: Action::Unknown(value.to_string()),
                author: String::new(),
                from_branch: String::new(),
                to_branch: String::new(),
                timestamp: Timestamp::Invalid,
            };
        };

        let text = |key: &str| fields.get(key).map(lenient_string).unwrap_or_default();

        Event {
            request_id: fields
                .get("request_id")
                .map(lenient_string)
                .filter(|id| !id.is_empty()),
            action: Action::from(text("action").as_str()),
            author: text("author"),
            from_branch: text("from_branch"),
            to_branch: text("to_branch"),
            timestamp: fields
                .get("timestamp")
                .map(Timestamp::from_value)
                .unwrap_or(Timestamp::Invalid),
        }
    }
}

fn lenient_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Decode a `/events` response body into an ordered snapshot.
///
/// Only a body that is not a JSON array is a decoding failure.
pub fn decode_events(body: &str) -> Result<Vec<Event>, FeedError> {
    let records: Vec<Value> = serde_json::from_str(body)?;
    Ok(records.iter().map(Event::from_value).collect())
}
