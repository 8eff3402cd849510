use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use tokio::sync::broadcast;

use super::events::{ActivityEvent, ActivityKind};

/// Number of events retained when no capacity is configured
pub const DEFAULT_FEED_CAPACITY: usize = 50;

/// Broadcast channel capacity for live subscribers
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Destination for worker activity.
///
/// Workers only know this trait; the [`ActivityFeed`] is the production sink.
pub trait ActivitySink: Send + Sync {
    /// Record one event and return it
    fn record(
        &self,
        worker_id: u32,
        worker_name: &str,
        message: &str,
        kind: ActivityKind,
    ) -> ActivityEvent;
}

/// Summary counters over the retained events
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FeedStats {
    /// Retained event count
    pub total: usize,
    /// Events younger than one minute
    pub recent: usize,
}

/// Bounded newest-first event log.
///
/// Cloning is cheap; clones share the same buffer and broadcast channel.
#[derive(Clone)]
pub struct ActivityFeed {
    events: Arc<RwLock<VecDeque<ActivityEvent>>>,
    capacity: usize,
    event_tx: broadcast::Sender<ActivityEvent>,
}

impl ActivityFeed {
    /// Create a feed retaining at most `capacity` events (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            events: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            capacity,
            event_tx,
        }
    }

    /// Maximum number of retained events
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Insert an already-built event at the front, discarding the oldest
    /// entries beyond capacity.
    pub fn push(&self, event: ActivityEvent) {
        {
            let mut events = self.events.write();
            events.push_front(event.clone());
            events.truncate(self.capacity);
        }
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }

    /// Up to `limit` most recent events, newest first
    pub fn recent(&self, limit: usize) -> Vec<ActivityEvent> {
        self.events.read().iter().take(limit).cloned().collect()
    }

    /// All retained events, newest first
    pub fn snapshot(&self) -> Vec<ActivityEvent> {
        self.events.read().iter().cloned().collect()
    }

    /// Number of retained events
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// Whether the feed holds no events
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Counters relative to `now`
    pub fn stats(&self, now: DateTime<Utc>) -> FeedStats {
        let events = self.events.read();
        let recent = events
            .iter()
            .filter(|e| (now - e.timestamp).num_seconds() < 60)
            .count();
        FeedStats {
            total: events.len(),
            recent,
        }
    }

    /// Subscribe to events as they are published.
    ///
    /// Slow receivers lag and lose the oldest events, like any broadcast channel.
    pub fn subscribe(&self) -> broadcast::Receiver<ActivityEvent> {
        self.event_tx.subscribe()
    }
}

impl Default for ActivityFeed {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_CAPACITY)
    }
}

impl ActivitySink for ActivityFeed {
    fn record(
        &self,
        worker_id: u32,
        worker_name: &str,
        message: &str,
        kind: ActivityKind,
    ) -> ActivityEvent {
        let event = ActivityEvent::new(worker_id, worker_name, message, kind);
        tracing::debug!(
            worker = worker_name,
            kind = %kind,
            "{}",
            message
        );
        self.push(event.clone());
        event
    }
}
