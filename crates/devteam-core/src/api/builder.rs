//! Builder for constructing a [`TeamCoordinator`] instance.
//!
//! ```ignore
//! let coordinator = TeamCoordinatorBuilder::new(settings)
//!     .with_random(shared(SequenceRandom::constant(0.5)))
//!     .with_profiler(Arc::new(DescriptionProfiler))
//!     .build();
//! ```

use std::sync::Arc;

use crate::config::Settings;
use crate::feed::ActivityFeed;
use crate::models::ModelRegistry;
use crate::profile::{DescriptionProfiler, FsProjectProfiler, ProjectProfiler};
use crate::random::{shared, SharedRandom, ThreadRandom};

use super::core::TeamCoordinator;

/// Builder for constructing a [`TeamCoordinator`] Facade instance
pub struct TeamCoordinatorBuilder {
    settings: Arc<Settings>,
    registry: Option<ModelRegistry>,
    profiler: Option<Arc<dyn ProjectProfiler>>,
    feed: Option<ActivityFeed>,
    rng: Option<SharedRandom>,
}

impl TeamCoordinatorBuilder {
    /// Create a new builder with the given settings
    pub fn new(settings: Settings) -> Self {
        Self::from_shared_settings(Arc::new(settings))
    }

    /// Create a new builder from already-shared settings
    pub fn from_shared_settings(settings: Arc<Settings>) -> Self {
        Self {
            settings,
            registry: None,
            profiler: None,
            feed: None,
            rng: None,
        }
    }

    /// Use a prepared model registry instead of one built from settings
    pub fn with_registry(mut self, registry: ModelRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Use a custom project profiler
    pub fn with_profiler(mut self, profiler: Arc<dyn ProjectProfiler>) -> Self {
        self.profiler = Some(profiler);
        self
    }

    /// Publish into an existing feed
    pub fn with_feed(mut self, feed: ActivityFeed) -> Self {
        self.feed = Some(feed);
        self
    }

    /// Draw every random decision from `rng`
    pub fn with_random(mut self, rng: SharedRandom) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Build the `TeamCoordinator` instance
    ///
    /// Missing parts are derived from settings: the registry from `[models]`,
    /// the profiler from `[profile]`, the feed capacity from `[feed]`.
    pub fn build(self) -> TeamCoordinator {
        let settings = self.settings;
        let registry = self
            .registry
            .unwrap_or_else(|| ModelRegistry::from_settings(&settings.models));
        let profiler = self.profiler.unwrap_or_else(|| {
            if settings.profile.scan_filesystem {
                Arc::new(FsProjectProfiler)
            } else {
                Arc::new(DescriptionProfiler)
            }
        });
        let feed = self
            .feed
            .unwrap_or_else(|| ActivityFeed::new(settings.feed.capacity));
        let rng = self.rng.unwrap_or_else(|| shared(ThreadRandom));

        TeamCoordinator::new(settings, registry, profiler, feed, rng)
    }
}
