use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category tag of an activity event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Start,
    Progress,
    Complete,
    Info,
    Testing,
    Debug,
    Review,
    Error,
    Deploy,
}

impl ActivityKind {
    /// Lowercase tag used in logs and serialized events
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Start => "start",
            ActivityKind::Progress => "progress",
            ActivityKind::Complete => "complete",
            ActivityKind::Info => "info",
            ActivityKind::Testing => "testing",
            ActivityKind::Debug => "debug",
            ActivityKind::Review => "review",
            ActivityKind::Error => "error",
            ActivityKind::Deploy => "deploy",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry in the activity feed
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEvent {
    /// Unique event id (UUID v4)
    pub id: String,
    /// Id of the emitting worker
    pub worker_id: u32,
    /// Display name of the emitting worker
    pub worker_name: String,
    /// Message text
    pub message: String,
    /// Category tag
    pub kind: ActivityKind,
    /// When the event was generated
    pub timestamp: DateTime<Utc>,
}

impl ActivityEvent {
    /// Create an event stamped with a fresh id and the current time
    pub fn new(
        worker_id: u32,
        worker_name: &str,
        message: impl Into<String>,
        kind: ActivityKind,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            worker_id,
            worker_name: worker_name.to_string(),
            message: message.into(),
            kind,
            timestamp: Utc::now(),
        }
    }

    /// Human-readable age relative to `now` ("12s ago", "3m ago", "1h ago")
    pub fn age(&self, now: DateTime<Utc>) -> String {
        let seconds = (now - self.timestamp).num_seconds().max(0);
        if seconds < 60 {
            return format!("{}s ago", seconds);
        }
        let minutes = seconds / 60;
        if minutes < 60 {
            return format!("{}m ago", minutes);
        }
        format!("{}h ago", minutes / 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_event_ids_are_unique() {
        let a = ActivityEvent::new(1, "AI-Dev-1", "a", ActivityKind::Info);
        let b = ActivityEvent::new(1, "AI-Dev-1", "a", ActivityKind::Info);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_age_formatting() {
        let event = ActivityEvent::new(1, "AI-Dev-1", "x", ActivityKind::Start);
        let t = event.timestamp;
        assert_eq!(event.age(t + Duration::seconds(5)), "5s ago");
        assert_eq!(event.age(t + Duration::seconds(150)), "2m ago");
        assert_eq!(event.age(t + Duration::seconds(7300)), "2h ago");
        assert_eq!(event.age(t - Duration::seconds(3)), "0s ago");
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&ActivityKind::Complete).unwrap();
        assert_eq!(json, "\"complete\"");
        assert_eq!(ActivityKind::Deploy.to_string(), "deploy");
    }
}
