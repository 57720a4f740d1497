//! Test fixtures
//!
//! Factory functions for events with sensible defaults.

use chrono::{TimeZone, Utc};

use crate::domain::entities::{Action, Event, Timestamp};

/// 2024-01-01T00:00:00Z
pub fn test_timestamp() -> Timestamp {
    Timestamp::At(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
}

/// Create an event with the given action and default fields
pub fn test_event(action: Action) -> Event {
    Event {
        request_id: None,
        action,
        author: "test-author".to_string(),
        from_branch: "feature".to_string(),
        to_branch: "main".to_string(),
        timestamp: test_timestamp(),
    }
}

pub fn test_push(author: &str, to_branch: &str) -> Event {
    Event {
        author: author.to_string(),
        from_branch: String::new(),
        to_branch: to_branch.to_string(),
        ..test_event(Action::Push)
    }
}

pub fn test_pull_request(author: &str, from_branch: &str, to_branch: &str) -> Event {
    Event {
        author: author.to_string(),
        from_branch: from_branch.to_string(),
        to_branch: to_branch.to_string(),
        ..test_event(Action::PullRequest)
    }
}

pub fn test_merge(author: &str, from_branch: &str, to_branch: &str) -> Event {
    Event {
        author: author.to_string(),
        from_branch: from_branch.to_string(),
        to_branch: to_branch.to_string(),
        ..test_event(Action::Merge)
    }
}
