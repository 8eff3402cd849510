//! Activity feed: bounded, newest-first log of worker events.

mod events;
mod store;

pub use events::{ActivityEvent, ActivityKind};
pub use store::{ActivityFeed, ActivitySink, FeedStats, DEFAULT_FEED_CAPACITY};
